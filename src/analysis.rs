//! Session analysis.
//!
//! The aggregator keeps every [`CycleRecord`] produced since the process
//! started (insertion order, no eviction) and recomputes the summary
//! from the full history on every call. History fits in memory for a
//! single session, so there is no streaming state to keep consistent.

use serde::Serialize;

use crate::actuator::PumpState;
use crate::error::AnalysisError;
use crate::gateway::CycleRecord;

/// Aggregate statistics over the session history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_records: usize,
    /// ON-cycles multiplied by the configured cycle duration.
    pub total_pump_on_time_seconds: u64,
    pub max_moisture: f32,
    pub min_moisture: f32,
    /// Rounded to one decimal.
    pub avg_moisture: f32,
    pub max_level: f32,
    pub min_level: f32,
    /// Rounded to one decimal.
    pub avg_level: f32,
}

/// Accumulates every cycle record produced in-session.
pub struct AnalysisAggregator {
    history: Vec<CycleRecord>,
    cycle_duration_secs: u32,
}

impl AnalysisAggregator {
    pub fn new(cycle_duration_secs: u32) -> Self {
        Self {
            history: Vec::new(),
            cycle_duration_secs,
        }
    }

    /// Append a record. O(1); history grows for the life of the process.
    pub fn add_record(&mut self, record: CycleRecord) {
        self.history.push(record);
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Compute the session summary from the full history.
    pub fn summarize(&self) -> Result<Summary, AnalysisError> {
        if self.history.is_empty() {
            return Err(AnalysisError::EmptyHistory);
        }

        let on_cycles = self
            .history
            .iter()
            .filter(|r| r.pump_state == PumpState::On)
            .count() as u64;

        let (moisture_min, moisture_max, moisture_sum) = min_max_sum(
            self.history.iter().map(|r| r.moisture),
        );
        let (level_min, level_max, level_sum) = min_max_sum(self.history.iter().map(|r| r.level));

        let count = self.history.len() as f32;
        Ok(Summary {
            total_records: self.history.len(),
            total_pump_on_time_seconds: on_cycles * u64::from(self.cycle_duration_secs),
            max_moisture: moisture_max,
            min_moisture: moisture_min,
            avg_moisture: round1(moisture_sum / count),
            max_level: level_max,
            min_level: level_min,
            avg_level: round1(level_sum / count),
        })
    }
}

fn min_max_sum(values: impl Iterator<Item = f32>) -> (f32, f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    let mut sum = 0.0;
    for v in values {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }
    (min, max, sum)
}

fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
