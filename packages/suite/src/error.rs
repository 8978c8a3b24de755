// ABOUTME: Error types for the scenario runner
// ABOUTME: ScenarioError fails a single scenario; SuiteError aborts the whole run

use ideacenter_client::IdeaCenterError;
use reqwest::StatusCode;
use thiserror::Error;

pub type ScenarioResult<T> = Result<T, ScenarioError>;
pub type SuiteResult<T> = Result<T, SuiteError>;

/// Failure local to one scenario; later scenarios still run
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Expected status {expected}, got {actual}: {body}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
        body: String,
    },

    #[error("Expected message '{expected}', got {actual:?}")]
    UnexpectedMessage {
        expected: String,
        actual: Option<String>,
    },

    #[error("Expected body to contain '{expected}', got: {body}")]
    BodyMismatch { expected: String, body: String },

    #[error("Idea list is empty")]
    EmptyList,

    #[error("Last listed idea has no id")]
    MissingId,

    #[error("Missing prerequisite: {0}")]
    MissingPrerequisite(&'static str),

    #[error(transparent)]
    Client(#[from] IdeaCenterError),
}

impl ScenarioError {
    /// Whether the scenario never got to send its request
    pub fn is_missing_prerequisite(&self) -> bool {
        matches!(self, ScenarioError::MissingPrerequisite(_))
    }
}

/// Failure that stops the suite before (or instead of) running scenarios
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("Duplicate scenario rank {rank}: '{first}' and '{second}'")]
    DuplicateRank {
        rank: u32,
        first: &'static str,
        second: &'static str,
    },

    #[error("No scenario with rank {0}")]
    UnknownRank(u32),

    #[error(transparent)]
    Client(#[from] IdeaCenterError),
}

impl SuiteError {
    pub fn is_auth_error(&self) -> bool {
        matches!(self, SuiteError::Client(e) if e.is_auth_error())
    }
}
