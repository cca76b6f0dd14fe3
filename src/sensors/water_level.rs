//! Simulated paddy water-level sensor.
//!
//! The water level rises by a uniform 0.5–1.0 cm per cycle while the
//! pump runs and recedes by 0.1–0.3 cm while it is off. Levels are
//! clamped at zero; there is no upper bound — the emergency threshold
//! in the gateway is what stops the pump before the field floods.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Rise per cycle while the pump runs (cm).
const RISE_DELTA: core::ops::RangeInclusive<f32> = 0.5..=1.0;
/// Drain per cycle while the pump is off (cm).
const DRAIN_DELTA: core::ops::RangeInclusive<f32> = 0.1..=0.3;

pub struct WaterLevelSensor {
    current: f32,
    rng: SmallRng,
}

impl WaterLevelSensor {
    /// Entropy-seeded sensor with its initial reading drawn uniformly
    /// from `seed_band` (floored at zero).
    pub fn new(seed_band: (f32, f32)) -> Self {
        Self::from_rng(seed_band, SmallRng::from_entropy())
    }

    /// Deterministic sensor for replay and testing.
    pub fn with_seed(seed_band: (f32, f32), seed: u64) -> Self {
        Self::from_rng(seed_band, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(seed_band: (f32, f32), mut rng: SmallRng) -> Self {
        let (low, high) = seed_band;
        let current = if high > low {
            rng.gen_range(low..=high)
        } else {
            low
        };
        Self {
            current: current.max(0.0),
            rng,
        }
    }

    /// Advance the model by one cycle and return the new reading.
    pub fn read_value(&mut self, pump_is_on: bool) -> f32 {
        if pump_is_on {
            self.current += self.rng.gen_range(RISE_DELTA);
        } else {
            self.current -= self.rng.gen_range(DRAIN_DELTA);
        }
        self.current = self.current.max(0.0);
        self.current
    }

    pub fn current_value(&self) -> f32 {
        self.current
    }

    /// Scenario/test injection point. Floored at zero.
    pub fn set_current_value(&mut self, value: f32) {
        self.current = value.max(0.0);
    }
}
