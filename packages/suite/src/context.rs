// ABOUTME: Per-run state handed from one scenario to the next
// ABOUTME: Holds the idea id captured by the list scenario for edit and delete

use tracing::debug;

use crate::error::{ScenarioError, ScenarioResult};

/// State carried from one scenario to the next within a single run.
///
/// Owned by the runner and lent to each scenario in rank order, so a reader
/// always sees exactly what earlier scenarios wrote.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SuiteContext {
    last_created_idea_id: Option<String>,
}

impl SuiteContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_last_created_idea_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        debug!("Recording last created idea id {}", id);
        self.last_created_idea_id = Some(id);
    }

    pub fn last_created_idea_id(&self) -> Option<&str> {
        self.last_created_idea_id.as_deref()
    }

    /// The stored id, or a missing-prerequisite error if the list scenario has not run
    pub fn require_last_created_idea_id(&self) -> ScenarioResult<&str> {
        self.last_created_idea_id()
            .ok_or(ScenarioError::MissingPrerequisite(
                "no idea id recorded; the list scenario must run first",
            ))
    }
}
