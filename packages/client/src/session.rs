// ABOUTME: Session factory and authenticated HTTP session used by every scenario
// ABOUTME: Each session is built fresh, carries the bearer token, and is closed after use

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::{ClientResult, IdeaCenterError};

/// Join a base URL and an absolute API path, keeping any path prefix on the base
pub(crate) fn endpoint(base_url: &Url, path: &str) -> String {
    format!("{}{}", base_url.as_str().trim_end_matches('/'), path)
}

/// Builds a fresh authenticated [`Session`] for every scenario
#[derive(Debug, Clone)]
pub struct SessionFactory {
    base_url: Url,
    token: String,
    timeout: Option<Duration>,
    open: Arc<AtomicUsize>,
}

impl SessionFactory {
    pub fn new(base_url: Url, token: impl Into<String>) -> Self {
        Self {
            base_url,
            token: token.into(),
            timeout: None,
            open: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn from_config(config: &Config, token: impl Into<String>) -> Self {
        Self {
            timeout: config.http_timeout,
            ..Self::new(config.base_url.clone(), token)
        }
    }

    /// Sessions created by this factory (or its clones) that are not closed yet
    pub fn open_sessions(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }

    /// Construct a client. Performs no network I/O.
    pub fn create(&self) -> ClientResult<Session> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| {
                IdeaCenterError::config(format!("Failed to build HTTP client: {}", e))
            })?;

        self.open.fetch_add(1, Ordering::SeqCst);
        Ok(Session {
            http_client,
            base_url: self.base_url.clone(),
            token: self.token.clone(),
            open: Arc::clone(&self.open),
        })
    }
}

/// HTTP client bound to a base URL that sends the bearer token on every request
pub struct Session {
    http_client: Client,
    base_url: Url,
    token: String,
    open: Arc<AtomicUsize>,
}

impl Session {
    /// Start a request to `path` with the bearer credential attached
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, endpoint(&self.base_url, path))
            .bearer_auth(&self.token)
    }

    /// Send a request and capture status and body
    pub async fn execute(&self, request: RequestBuilder) -> ClientResult<ApiReply> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Received {} ({} bytes)", status, body.len());
        Ok(ApiReply { status, body })
    }

    /// Release the underlying client
    pub fn close(self) {
        debug!("Closing session for {}", self.base_url);
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Status and raw body of one HTTP exchange
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: StatusCode,
    pub body: String,
}

impl ApiReply {
    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            IdeaCenterError::invalid_response(format!("{} (body: {})", e, self.body))
        })
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.body.contains(needle)
    }
}
