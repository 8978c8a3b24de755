// ABOUTME: Request and response bodies exchanged with the IdeaCenter API
// ABOUTME: Idea payloads keep title and description optional so nulls can be sent

use serde::{Deserialize, Serialize};

/// Login request body for `POST /api/User/Authentication`
#[derive(Debug, Serialize)]
pub struct AuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Login response body
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub accesstoken: Option<String>,
}

/// Payload for creating or editing an idea.
///
/// `title` and `description` are required by the server; they are optional
/// here so that validation failures can be provoked with explicit `null`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl IdeaRequest {
    /// A complete request with an empty url
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            url: Some(String::new()),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// A request with every field set to `null`
    pub fn without_required_fields() -> Self {
        Self {
            title: None,
            description: None,
            url: None,
        }
    }
}

/// Generic `{msg, id}` body returned by the idea endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}
