//! Transport-decoupled request layer.
//!
//! This crate owns no sockets. A hosting HTTP server maps its routes to
//! the three handlers on [`DeviceContext`] and serializes whatever comes
//! back:
//!
//! - `GET /data`     → [`DeviceContext::handle_data`]
//! - `POST /control` → [`DeviceContext::handle_control`]
//! - `GET /analysis` → [`DeviceContext::handle_analysis`]
//!
//! One context exists per simulated device and owns its gateway and
//! session history behind a single mutex, so every cycle is one atomic
//! read-decide-act-record-append sequence and a manual override can
//! never interleave with a running cycle.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisAggregator, Summary};
use crate::config::GatewayConfig;
use crate::error::{CommandError, Error, Result};
use crate::gateway::{CycleRecord, EdgeGateway};

/// Body of `POST /control`.
#[derive(Debug, Deserialize)]
pub struct ControlRequest {
    /// Pump command token. Absent field or empty token → explicit
    /// failure; present but unrecognized token → accepted no-op.
    #[serde(default)]
    pub command: Option<String>,
}

/// Success body of `POST /control`.
#[derive(Debug, Serialize)]
pub struct ControlResponse {
    pub status: &'static str,
    /// Echoes the client's token verbatim, even for accepted no-ops.
    pub new_state: String,
}

/// Failure body served with a non-2xx status.
pub fn failed_payload() -> serde_json::Value {
    serde_json::json!({ "status": "failed" })
}

struct DeviceState {
    gateway: EdgeGateway,
    analysis: AnalysisAggregator,
}

/// One simulated device: gateway plus session history, serialized
/// behind a single lock.
pub struct DeviceContext {
    inner: Mutex<DeviceState>,
}

impl DeviceContext {
    pub fn new(config: GatewayConfig) -> Self {
        let analysis = AnalysisAggregator::new(config.cycle_duration_secs);
        Self {
            inner: Mutex::new(DeviceState {
                gateway: EdgeGateway::from_config(config),
                analysis,
            }),
        }
    }

    /// Deterministic context for reproducible sessions.
    pub fn with_seed(config: GatewayConfig, seed: u64) -> Self {
        let analysis = AnalysisAggregator::new(config.cycle_duration_secs);
        Self {
            inner: Mutex::new(DeviceState {
                gateway: EdgeGateway::with_seed(config, seed),
                analysis,
            }),
        }
    }

    /// `GET /data`: run one cycle, append its record to the session
    /// history, return it.
    pub fn handle_data(&self) -> CycleRecord {
        let mut state = self.lock();
        let record = state.gateway.run_logic_cycle();
        state.analysis.add_record(record.clone());
        record
    }

    /// `POST /control`: manual pump override.
    ///
    /// A body without a command — absent field or empty token — is
    /// rejected; a body with an unrecognized command value is accepted
    /// without changing pump state. The gateway log is overwritten with
    /// the override line on every accepted request.
    pub fn handle_control(&self, request: &ControlRequest) -> Result<ControlResponse> {
        let command = request
            .command
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or(CommandError::MissingCommand)?;

        self.lock().gateway.manual_override(command);
        Ok(ControlResponse {
            status: "success",
            new_state: command.to_owned(),
        })
    }

    /// `GET /analysis`: the session summary, or the empty-history error.
    pub fn handle_analysis(&self) -> Result<Summary> {
        self.lock().analysis.summarize().map_err(Error::from)
    }

    /// Records collected so far this session.
    pub fn history_len(&self) -> usize {
        self.lock().analysis.len()
    }

    // A poisoned lock means a panic in test code while holding the
    // guard; the device state itself is still consistent, so recover it.
    fn lock(&self) -> MutexGuard<'_, DeviceState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
