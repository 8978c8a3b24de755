// ABOUTME: Environment-driven configuration for the IdeaCenter suite
// ABOUTME: Resolves base URL, static token, login credentials, and HTTP timeout

use std::env;
use std::num::ParseIntError;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::credentials::Credentials;
use crate::error::IdeaCenterError;

pub const DEFAULT_BASE_URL: &str =
    "http://softuni-qa-loadbalancer-2137572849.eu-north-1.elb.amazonaws.com:84";
pub const DEFAULT_LOGIN_EMAIL: &str = "tester@mail.com";
pub const DEFAULT_LOGIN_PASSWORD: &str = "tester1";

pub const BASE_URL_VAR: &str = "IDEACENTER_BASE_URL";
pub const TOKEN_VAR: &str = "IDEACENTER_TOKEN";
pub const EMAIL_VAR: &str = "IDEACENTER_EMAIL";
pub const PASSWORD_VAR: &str = "IDEACENTER_PASSWORD";
pub const TIMEOUT_VAR: &str = "IDEACENTER_HTTP_TIMEOUT_SECS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Base URL must use http or https, got: {0}")]
    UnsupportedScheme(String),
    #[error("Invalid HTTP timeout: {0}")]
    InvalidTimeout(#[from] ParseIntError),
    #[error("HTTP timeout must be greater than zero")]
    ZeroTimeout,
}

impl From<ConfigError> for IdeaCenterError {
    fn from(err: ConfigError) -> Self {
        IdeaCenterError::Configuration(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    /// Pre-issued bearer token; empty means "log in instead"
    pub static_token: String,
    pub login_email: String,
    pub login_password: String,
    /// None keeps the transport default
    pub http_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut config = Self::for_base_url(&base_url)?;

        let static_token = env::var(TOKEN_VAR)
            .map(|t| t.trim().to_string())
            .unwrap_or_default();
        config = config.with_static_token(static_token);

        if let Ok(email) = env::var(EMAIL_VAR) {
            config.login_email = email;
        }
        if let Ok(password) = env::var(PASSWORD_VAR) {
            config.login_password = password;
        }

        config.http_timeout = match env::var(TIMEOUT_VAR) {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_timeout(&raw)?),
            _ => None,
        };

        Ok(config)
    }

    /// Config pointing at `base_url` with default credentials and no static token
    pub fn for_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            static_token: String::new(),
            login_email: DEFAULT_LOGIN_EMAIL.to_string(),
            login_password: DEFAULT_LOGIN_PASSWORD.to_string(),
            http_timeout: None,
        })
    }

    pub fn with_static_token(mut self, token: impl Into<String>) -> Self {
        self.static_token = token.into();
        self
    }

    pub fn with_login(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.login_email = email.into();
        self.login_password = password.into();
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            static_token: self.static_token.clone(),
            ..Credentials::with_login(self.login_email.clone(), self.login_password.clone())
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let secs = raw.trim().parse::<u64>()?;
    if secs == 0 {
        return Err(ConfigError::ZeroTimeout);
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [BASE_URL_VAR, TOKEN_VAR, EMAIL_VAR, PASSWORD_VAR, TIMEOUT_VAR] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.base_url.as_str(), format!("{}/", DEFAULT_BASE_URL));
        assert!(config.static_token.is_empty());
        assert_eq!(config.login_email, DEFAULT_LOGIN_EMAIL);
        assert_eq!(config.login_password, DEFAULT_LOGIN_PASSWORD);
        assert!(config.http_timeout.is_none());
    }

    #[test]
    #[serial]
    fn test_config_from_env_with_overrides() {
        clear_env();
        env::set_var(BASE_URL_VAR, "https://ideas.example.com");
        env::set_var(TOKEN_VAR, "  static-token  ");
        env::set_var(EMAIL_VAR, "qa@example.com");
        env::set_var(PASSWORD_VAR, "secret");
        env::set_var(TIMEOUT_VAR, "15");

        let config = Config::from_env().unwrap();

        assert_eq!(config.base_url.host_str(), Some("ideas.example.com"));
        assert_eq!(config.static_token, "static-token");
        assert_eq!(config.login_email, "qa@example.com");
        assert_eq!(config.login_password, "secret");
        assert_eq!(config.http_timeout, Some(Duration::from_secs(15)));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_invalid_timeout() {
        clear_env();
        env::set_var(TIMEOUT_VAR, "soon");

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidTimeout(_))));

        env::set_var(TIMEOUT_VAR, "0");
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::ZeroTimeout)));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_invalid_base_url() {
        clear_env();
        env::set_var(BASE_URL_VAR, "not a url");

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));

        clear_env();
    }

    #[test]
    fn test_unsupported_scheme_rejected() {
        let result = Config::for_base_url("ftp://ideas.example.com");
        assert!(matches!(result, Err(ConfigError::UnsupportedScheme(s)) if s == "ftp"));
    }

    #[test]
    fn test_credentials_carry_config_values() {
        let config = Config::for_base_url("http://localhost:84")
            .unwrap()
            .with_static_token("abc")
            .with_login("a@b.c", "pw");

        let credentials = config.credentials();
        assert_eq!(credentials.static_token, "abc");
        assert_eq!(credentials.email, "a@b.c");
        assert_eq!(credentials.password, "pw");
    }

    #[test]
    fn test_config_error_converts_to_client_error() {
        let err: IdeaCenterError = ConfigError::ZeroTimeout.into();
        assert!(matches!(err, IdeaCenterError::Configuration(_)));
    }
}
