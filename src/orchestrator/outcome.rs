use std::path::PathBuf;
use std::time::Duration;

use crate::PerfChartsError;
use crate::chart::{ChartId, ChartKind};

/// A chart job that wrote its artifact.
#[derive(Debug, Clone)]
pub struct JobSuccess {
    pub id: ChartId,
    pub kind: ChartKind,
    pub metrics: Vec<String>,
    pub title: String,
    pub path: PathBuf,
    pub elapsed: Duration,
}

/// A chart job that was attempted and failed.
#[derive(Debug)]
pub struct JobFailure {
    pub id: ChartId,
    pub error: PerfChartsError,
}

/// Result of one batch. Every submitted spec lands in exactly one list,
/// each sorted by [`ChartId`].
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub successes: Vec<JobSuccess>,
    pub failures: Vec<JobFailure>,
    /// Jobs that never started because the batch was cancelled.
    pub cancelled: Vec<ChartId>,
}

impl BatchOutcome {
    #[must_use]
    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len() + self.cancelled.len()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.cancelled.is_empty()
    }

    #[must_use]
    pub fn success(&self, id: &ChartId) -> Option<&JobSuccess> {
        self.successes.iter().find(|s| &s.id == id)
    }

    #[must_use]
    pub fn failure(&self, id: &ChartId) -> Option<&JobFailure> {
        self.failures.iter().find(|f| &f.id == id)
    }

    pub(super) fn sort(&mut self) {
        self.successes.sort_by(|a, b| a.id.cmp(&b.id));
        // Stable, so a duplicate stays after the first spec with its id.
        self.failures.sort_by(|a, b| a.id.cmp(&b.id));
        self.cancelled.sort();
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
