//! Edge gateway — the per-cycle decision core.
//!
//! [`EdgeGateway`] owns one soil-moisture sensor, one water-level sensor
//! and the pump. [`EdgeGateway::run_logic_cycle`] performs one atomic
//! read-decide-act-record pass:
//!
//! 1. Capture the pump state from the prior cycle.
//! 2. Read both sensors against that state.
//! 3. Classify the moisture reading (when enabled).
//! 4. Apply the decision policy in strict priority order — first match
//!    wins:
//!    emergency OFF > low-moisture ON > high-moisture OFF > hold.
//! 5. Emit an immutable [`CycleRecord`].
//!
//! The hold branch is the hysteresis band: between the on- and
//! off-thresholds the pump keeps whatever state it had, so it cannot
//! chatter around a single threshold.

use log::{error, info};
use serde::Serialize;

use crate::actuator::{Pump, PumpState};
use crate::classify::{self, MoistureCategory};
use crate::config::GatewayConfig;
use crate::sensors::{SensorReadings, SoilMoistureSensor, WaterLevelSensor};

/// Immutable snapshot of one completed cycle.
#[derive(Debug, Clone, Serialize)]
pub struct CycleRecord {
    /// Local wall-clock time of the cycle, `HH:MM:SS`.
    pub timestamp: String,
    /// Moisture reading (%), rounded to one decimal.
    pub moisture: f32,
    /// Water level reading (cm), rounded to one decimal.
    pub level: f32,
    /// Pump state at the end of the cycle.
    pub pump_state: PumpState,
    /// Human-readable log line for the cycle.
    pub log: String,
    /// Moisture category, present only when the classifier is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<MoistureCategory>,
}

/// Edge gateway for one simulated device.
pub struct EdgeGateway {
    /// Soil-moisture sensor. Public for scenario setup and tests.
    pub soil: SoilMoistureSensor,
    /// Water-level sensor. Public for scenario setup and tests.
    pub water: WaterLevelSensor,
    pump: Pump,
    config: GatewayConfig,
    log_message: String,
}

impl EdgeGateway {
    /// Assemble a gateway from pre-built parts (explicit ownership — no
    /// ambient global state).
    pub fn new(
        soil: SoilMoistureSensor,
        water: WaterLevelSensor,
        pump: Pump,
        config: GatewayConfig,
    ) -> Self {
        Self {
            soil,
            water,
            pump,
            config,
            log_message: "System ready.".to_owned(),
        }
    }

    /// Build a gateway with entropy-seeded sensors.
    pub fn from_config(config: GatewayConfig) -> Self {
        let soil = SoilMoistureSensor::new((config.moisture_seed_low, config.moisture_seed_high));
        let water = WaterLevelSensor::new((config.level_seed_low, config.level_seed_high));
        Self::new(soil, water, Pump::new(), config)
    }

    /// Build a fully deterministic gateway. Each sensor gets its own
    /// sub-seed derived from `seed` so the two trajectories stay
    /// independent but reproducible.
    pub fn with_seed(config: GatewayConfig, seed: u64) -> Self {
        let soil = SoilMoistureSensor::with_seed(
            (config.moisture_seed_low, config.moisture_seed_high),
            derive_seed(seed, "soil-moisture"),
        );
        let water = WaterLevelSensor::with_seed(
            (config.level_seed_low, config.level_seed_high),
            derive_seed(seed, "water-level"),
        );
        Self::new(soil, water, Pump::new(), config)
    }

    /// Run one logic cycle and return its record.
    pub fn run_logic_cycle(&mut self) -> CycleRecord {
        // 1. The sensors react to the pump state of the *prior* cycle.
        let pump_was_on = self.pump.is_on();

        // 2. Read.
        let readings = SensorReadings {
            moisture: self.soil.read_value(pump_was_on),
            level: self.water.read_value(pump_was_on),
        };

        // 3. Classify.
        let category = self
            .config
            .classifier_enabled
            .then(|| classify::classify(readings.moisture));

        // Default informational line; decision branches may replace it.
        self.log_message = match category {
            Some(cat) => format!(
                "Auto | moisture: {:.1}% ({cat}), level: {:.1} cm",
                readings.moisture, readings.level
            ),
            None => format!(
                "Auto | moisture: {:.1}%, level: {:.1} cm",
                readings.moisture, readings.level
            ),
        };

        // 4. Decide — strict priority, first match wins.
        if readings.level > self.config.level_emergency_threshold {
            self.pump.set_state(PumpState::Off);
            self.log_message = "EMERGENCY: water level too high! Pump disabled.".to_owned();
            error!(
                "emergency cut-off at level {:.1} cm (threshold {:.1})",
                readings.level, self.config.level_emergency_threshold
            );
        } else if readings.moisture <= self.config.moisture_on_threshold {
            self.pump.set_state(PumpState::On);
        } else if readings.moisture > self.config.moisture_off_threshold {
            self.pump.set_state(PumpState::Off);
        }
        // Otherwise: hysteresis band — hold the current state.

        // 5. Record.
        CycleRecord {
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            moisture: round1(readings.moisture),
            level: round1(readings.level),
            pump_state: self.pump.state(),
            log: self.log_message.clone(),
            category,
        }
    }

    /// Manual override: write the pump state directly, bypassing policy.
    ///
    /// The override holds only until the next automatic cycle
    /// re-evaluates. An unrecognized token changes nothing at the
    /// actuator, but the gateway log still reflects the attempt;
    /// returns whether the token was recognized.
    pub fn manual_override(&mut self, token: &str) -> bool {
        let recognized = self.pump.apply_command(token);
        self.log_message = format!("MANUAL OVERRIDE: pump set to {token} by user");
        info!("{}", self.log_message);
        recognized
    }

    pub fn pump_state(&self) -> PumpState {
        self.pump.state()
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// The most recent log line (override or cycle).
    pub fn log_message(&self) -> &str {
        &self.log_message
    }
}

/// Round to one decimal, as served on the wire.
fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Derive an independent-but-reproducible sub-seed for a named part
/// (FNV-1a over the label, folded into the base seed).
fn derive_seed(base: u64, label: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in label.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    base ^ hash
}
