//! Irrisim — closed-loop irrigation controller simulator.
//!
//! Virtual soil-moisture and water-level sensors feed an edge gateway
//! that decides once per logical cycle whether the pump should run.
//! Every cycle produces an immutable [`gateway::CycleRecord`]; the
//! session [`analysis::AnalysisAggregator`] summarises all records on
//! demand. The [`api`] module exposes transport-decoupled handlers for
//! a hosting HTTP layer — this crate owns no sockets.

#![deny(unused_must_use)]

pub mod actuator;
pub mod analysis;
pub mod api;
pub mod classify;
pub mod config;
pub mod gateway;
pub mod sensors;

mod error;

pub use error::{AnalysisError, CommandError, Error, Result};
