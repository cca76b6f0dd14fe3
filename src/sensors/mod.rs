//! Sensor subsystem — stochastic models of the physical field.
//!
//! Each sensor owns its own seedable RNG ([`rand::rngs::SmallRng`]), so
//! a whole session can be replayed deterministically by constructing the
//! sensors with caller-supplied seeds. Production constructors seed from
//! OS entropy instead.
//!
//! A sensor never fails: readings are clamped into their physical range
//! on every update, so there is no numeric error path.

pub mod soil_moisture;
pub mod water_level;

pub use soil_moisture::SoilMoistureSensor;
pub use water_level::WaterLevelSensor;

/// The values captured from both sensors in a single cycle.
#[derive(Debug, Clone, Copy)]
pub struct SensorReadings {
    /// Soil moisture (%), always within [0, 100].
    pub moisture: f32,
    /// Water level (cm), always >= 0.
    pub level: f32,
}
