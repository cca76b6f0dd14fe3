//! Pump actuator.
//!
//! The pump is a dumb two-state actuator: it stores a flag and nothing
//! else. Decision logic lives in the gateway; logging of *why* a state
//! changed is the caller's job.
//!
//! String commands ("ON"/"OFF", case-insensitive) exist only at the
//! input boundary. Internally the state is the two-value [`PumpState`]
//! enum, so an illegal state is unrepresentable. An unrecognized command
//! token is a silent no-op — the control endpoint decides how to report
//! that, not the actuator.

use log::info;
use serde::Serialize;

/// Pump state. Serialized as `"ON"` / `"OFF"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PumpState {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl PumpState {
    /// Parse a boundary command token, case-insensitively.
    /// Returns `None` for anything that is not "ON" or "OFF".
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("ON") {
            Some(Self::On)
        } else if token.eq_ignore_ascii_case("OFF") {
            Some(Self::Off)
        } else {
            None
        }
    }

    /// Wire form of the state.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

impl core::fmt::Display for PumpState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The water pump. Starts OFF.
#[derive(Debug)]
pub struct Pump {
    state: PumpState,
}

impl Pump {
    pub fn new() -> Self {
        Self {
            state: PumpState::Off,
        }
    }

    /// Set the pump state directly. Logs only actual transitions.
    pub fn set_state(&mut self, state: PumpState) {
        if self.state != state {
            info!("pump {} -> {}", self.state, state);
            self.state = state;
        }
    }

    /// Apply a boundary command token. Unrecognized tokens leave the
    /// state unchanged; returns whether the token was recognized.
    pub fn apply_command(&mut self, token: &str) -> bool {
        match PumpState::parse(token) {
            Some(state) => {
                self.set_state(state);
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> PumpState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        self.state == PumpState::On
    }
}

impl Default for Pump {
    fn default() -> Self {
        Self::new()
    }
}
