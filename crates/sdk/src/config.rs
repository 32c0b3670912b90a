//! SDK configuration
//!
//! Settings for the default HTTP transport: where the API lives, how to
//! authenticate, and how long to wait.

use crate::error::{SdkError, SdkResult};
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API
    pub base_url: String,

    /// Bearer token for authentication
    pub bearer_token: Option<String>,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,

    /// Enable request/response logging
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_API_URL.to_string(),
            bearer_token: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("rutas-sdk/{}", crate::VERSION),
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    ///
    /// Supported environment variables:
    /// - `RUTAS_API_URL`: Base URL for the API
    /// - `RUTAS_API_TOKEN`: Bearer token for authentication
    /// - `RUTAS_API_TIMEOUT`: Request timeout in seconds
    /// - `RUTAS_API_DEBUG`: Enable debug logging
    pub fn from_env() -> SdkResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup
    ///
    /// Reads the same keys as [`ClientConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> SdkResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("RUTAS_API_URL") {
            config.base_url = url;
        }

        if let Some(token) = lookup("RUTAS_API_TOKEN") {
            config.bearer_token = Some(token);
        }

        if let Some(timeout) = lookup("RUTAS_API_TIMEOUT") {
            config.timeout = parse_timeout(&timeout)?;
        }

        if lookup("RUTAS_API_DEBUG").is_some() {
            config.debug = true;
        }

        Ok(config)
    }

    /// Set the base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the bearer token
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> SdkResult<()> {
        if self.base_url.is_empty() {
            return Err(SdkError::ConfigError {
                message: "Base URL cannot be empty".to_string(),
            });
        }

        url::Url::parse(&self.base_url).map_err(|e| SdkError::ConfigError {
            message: format!("Invalid base URL: {}", e),
        })?;

        Ok(())
    }

    /// Get the authentication header value
    pub fn auth_header(&self) -> Option<String> {
        self.bearer_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }

    /// Join the base URL and a resource path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn parse_timeout(raw: &str) -> SdkResult<Duration> {
    let secs: u64 = raw.trim().parse().map_err(|_| SdkError::ConfigError {
        message: format!("Invalid timeout value: {}", raw),
    })?;
    Ok(Duration::from_secs(secs))
}
