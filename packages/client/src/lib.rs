// ABOUTME: IdeaCenter API client crate: configuration, credentials, sessions, and idea calls
// ABOUTME: Shared by the suite runner and its integration tests

//! IdeaCenter API client
//!
//! Credential resolution, per-scenario authenticated sessions, and typed calls
//! for the Idea endpoints of the IdeaCenter service.

pub mod config;
pub mod credentials;
pub mod error;
pub mod ideas;
pub mod models;
pub mod session;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use credentials::{CredentialResolver, Credentials};
pub use error::{ClientResult, IdeaCenterError};
pub use models::{ApiResponse, IdeaRequest};
pub use session::{ApiReply, Session, SessionFactory};
