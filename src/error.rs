//! Unified error types for the simulator.
//!
//! A single `Error` enum that every subsystem can convert into, keeping
//! the request layer's error handling uniform. Nothing in the core is
//! fatal: sensor values are clamped rather than rejected, and an invalid
//! actuator command is a silent no-op at the actuator level, so the only
//! error sources are the analysis and control boundaries.

use core::fmt;

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Session analysis could not be produced.
    Analysis(AnalysisError),
    /// A control request was malformed.
    Command(CommandError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Analysis(e) => write!(f, "analysis: {e}"),
            Self::Command(e) => write!(f, "command: {e}"),
        }
    }
}

impl std::error::Error for Error {}

/// Errors from [`AnalysisAggregator::summarize`](crate::analysis::AnalysisAggregator::summarize).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    /// No cycle records have been collected this session.
    EmptyHistory,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHistory => write!(f, "no data collected yet"),
        }
    }
}

impl From<AnalysisError> for Error {
    fn from(e: AnalysisError) -> Self {
        Self::Analysis(e)
    }
}

/// Errors from the control endpoint.
///
/// Note the asymmetry: a request *without* a command field is rejected
/// with [`CommandError::MissingCommand`], while a request carrying an
/// unrecognized command value is accepted and simply changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The request body had no `command` field.
    MissingCommand,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCommand => write!(f, "missing command"),
        }
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Self::Command(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
