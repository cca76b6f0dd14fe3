//! Gateway configuration.
//!
//! All tunable parameters for one simulated device: decision thresholds,
//! sensor seed bands, and the fixed cycle duration used by the session
//! analysis. Two presets are supported — the classified deployment
//! ([`Default`]) and the plain low/high band ([`GatewayConfig::plain_band`]).
//! Both run through the same decision code path; only the numbers and the
//! classifier switch differ.

use serde::{Deserialize, Serialize};

/// Configuration for one [`EdgeGateway`](crate::gateway::EdgeGateway).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    // --- Decision thresholds ---
    /// Pump turns ON when moisture is at or below this (%).
    pub moisture_on_threshold: f32,
    /// Pump turns OFF when moisture is above this (%).
    pub moisture_off_threshold: f32,
    /// Emergency pump cut-off when water level exceeds this (cm).
    pub level_emergency_threshold: f32,

    // --- Classification ---
    /// Attach a discrete moisture category to every cycle record.
    pub classifier_enabled: bool,

    // --- Sensor seed bands (initial reading drawn uniformly) ---
    /// Lower bound of the initial soil-moisture band (%).
    pub moisture_seed_low: f32,
    /// Upper bound of the initial soil-moisture band (%).
    pub moisture_seed_high: f32,
    /// Lower bound of the initial water-level band (cm).
    pub level_seed_low: f32,
    /// Upper bound of the initial water-level band (cm).
    pub level_seed_high: f32,

    // --- Timing ---
    /// Wall-clock seconds one logical cycle represents (analysis only).
    pub cycle_duration_secs: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            // The band between on and off is deliberately wide: once the
            // pump starts at <= 17.0% it keeps running until the soil is
            // well wet (> 40.0%), so the pump never chatters around a
            // single threshold.
            moisture_on_threshold: 17.0,
            moisture_off_threshold: 40.0,
            level_emergency_threshold: 15.0,

            classifier_enabled: true,

            moisture_seed_low: 5.0,
            moisture_seed_high: 25.0,
            level_seed_low: 1.0,
            level_seed_high: 3.0,

            cycle_duration_secs: 2,
        }
    }
}

impl GatewayConfig {
    /// Plain low/high deployment: no classifier, pump on at <= 40.0%,
    /// off above 75.0%, soil seeded in a wetter starting band.
    pub fn plain_band() -> Self {
        Self {
            moisture_on_threshold: 40.0,
            moisture_off_threshold: 75.0,
            classifier_enabled: false,
            moisture_seed_low: 30.0,
            moisture_seed_high: 50.0,
            ..Self::default()
        }
    }
}
