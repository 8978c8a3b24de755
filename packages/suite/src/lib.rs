// ABOUTME: IdeaCenter API suite: ordered CRUD and negative-path scenarios
// ABOUTME: Scenarios share a SuiteContext passed through an explicit sequential runner

pub mod context;
pub mod error;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod scenarios;

// Re-export main types
pub use context::SuiteContext;
pub use error::{ScenarioError, ScenarioResult, SuiteError, SuiteResult};
pub use report::{OutcomeStatus, ScenarioOutcome, SuiteReport};
pub use runner::{resolve_token, RunOptions, SuiteRunner};
pub use scenario::Scenario;
pub use scenarios::default_sequence;
