// ABOUTME: Credential resolution producing the bearer token used for a whole run
// ABOUTME: Prefers a pre-issued static token and falls back to an email/password login

use std::fmt;

use reqwest::{Client, StatusCode};
use tracing::{debug, info};
use url::Url;

use crate::{
    config::Config,
    error::{ClientResult, IdeaCenterError},
    models::{AuthRequest, AuthResponse},
    session::endpoint,
};

/// Login endpoint, relative to the base URL
pub const AUTH_PATH: &str = "/api/User/Authentication";

/// Credentials read once at suite start
#[derive(Clone, Default)]
pub struct Credentials {
    /// Pre-issued token; empty means "log in"
    pub static_token: String,
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn with_login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            static_token: String::new(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn has_static_token(&self) -> bool {
        !self.static_token.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("static_token", &if self.has_static_token() { "<set>" } else { "<empty>" })
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Turns [`Credentials`] into a bearer token
pub struct CredentialResolver {
    client: Client,
    base_url: Url,
}

impl CredentialResolver {
    /// Resolver honouring the configured base URL and HTTP timeout
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| {
                IdeaCenterError::config(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Return the static token if set, otherwise log in.
    ///
    /// Any failure here is fatal for the run: there is no token to fall back on.
    pub async fn resolve(&self, credentials: &Credentials) -> ClientResult<String> {
        if credentials.has_static_token() {
            debug!("Using pre-issued static token");
            return Ok(credentials.static_token.clone());
        }

        self.login(&credentials.email, &credentials.password).await
    }

    /// Exchange email and password for an access token
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<String> {
        let url = endpoint(&self.base_url, AUTH_PATH);
        info!("Requesting access token for {} from {}", email, url);

        let response = self
            .client
            .post(&url)
            .json(&AuthRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK || body.trim().is_empty() {
            return Err(IdeaCenterError::auth(format!(
                "Failed to get token: {} - {}",
                status, body
            )));
        }

        let auth: AuthResponse = serde_json::from_str(&body).map_err(|e| {
            IdeaCenterError::auth(format!("Login response is not valid JSON: {}", e))
        })?;

        match auth.accesstoken {
            Some(token) if !token.is_empty() => {
                info!("Access token obtained");
                Ok(token)
            }
            _ => Err(IdeaCenterError::auth("Token is null or empty.")),
        }
    }
}
