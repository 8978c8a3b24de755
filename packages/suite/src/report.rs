// ABOUTME: Per-scenario outcomes and the aggregated suite report
// ABOUTME: Serializes to JSON for machine-readable output

use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Passed,
    Failed,
    /// Not run because an earlier scenario failed under fail-fast
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub rank: u32,
    pub name: &'static str,
    pub status: OutcomeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub elapsed_ms: u128,
}

impl ScenarioOutcome {
    pub fn passed(rank: u32, name: &'static str, elapsed: Duration) -> Self {
        Self {
            rank,
            name,
            status: OutcomeStatus::Passed,
            message: None,
            elapsed_ms: elapsed.as_millis(),
        }
    }

    pub fn failed(rank: u32, name: &'static str, message: String, elapsed: Duration) -> Self {
        Self {
            rank,
            name,
            status: OutcomeStatus::Failed,
            message: Some(message),
            elapsed_ms: elapsed.as_millis(),
        }
    }

    pub fn skipped(rank: u32, name: &'static str) -> Self {
        Self {
            rank,
            name,
            status: OutcomeStatus::Skipped,
            message: None,
            elapsed_ms: 0,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.status == OutcomeStatus::Passed
    }
}

/// Outcomes of one run, in execution order
#[derive(Debug, Clone, Default, Serialize)]
pub struct SuiteReport {
    pub outcomes: Vec<ScenarioOutcome>,
}

impl SuiteReport {
    pub fn push(&mut self, outcome: ScenarioOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn passed(&self) -> usize {
        self.count(OutcomeStatus::Passed)
    }

    pub fn failed(&self) -> usize {
        self.count(OutcomeStatus::Failed)
    }

    pub fn skipped(&self) -> usize {
        self.count(OutcomeStatus::Skipped)
    }

    /// True when nothing failed or was skipped
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(ScenarioOutcome::is_passed)
    }

    pub fn outcome(&self, rank: u32) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|o| o.rank == rank)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn count(&self, status: OutcomeStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }
}
