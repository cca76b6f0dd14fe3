//! Simulated soil-moisture sensor.
//!
//! Models pump-driven wetting versus passive evaporation: while the pump
//! runs, moisture climbs by a uniform 3.0–6.0% per cycle; while it is
//! off, moisture drains by 0.5–1.5%. Readings are clamped to [0, 100].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Wetting delta per cycle while the pump runs (%).
const WET_DELTA: core::ops::RangeInclusive<f32> = 3.0..=6.0;
/// Evaporation delta per cycle while the pump is off (%).
const DRY_DELTA: core::ops::RangeInclusive<f32> = 0.5..=1.5;

pub struct SoilMoistureSensor {
    current: f32,
    rng: SmallRng,
}

impl SoilMoistureSensor {
    /// Entropy-seeded sensor with its initial reading drawn uniformly
    /// from `seed_band` (clamped to [0, 100]).
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
            current: current.clamp(0.0, 100.0),
            rng,
        }
    }

    /// Advance the model by one cycle and return the new reading.
    ///
    /// `pump_is_on` is the pump state during the *prior* cycle — the
    /// gateway captures it before reading.
    pub fn read_value(&mut self, pump_is_on: bool) -> f32 {
        if pump_is_on {
            self.current += self.rng.gen_range(WET_DELTA);
        } else {
            self.current -= self.rng.gen_range(DRY_DELTA);
        }
        self.current = self.current.clamp(0.0, 100.0);
        self.current
    }

    pub fn current_value(&self) -> f32 {
        self.current
    }

    /// Scenario/test injection point. Clamped like any reading.
    pub fn set_current_value(&mut self, value: f32) {
        self.current = value.clamp(0.0, 100.0);
    }
}
