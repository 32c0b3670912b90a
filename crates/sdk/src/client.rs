//! SDK client implementation
//!
//! This module provides the default, reqwest-backed [`HttpTransport`].

use crate::config::ClientConfig;
use crate::error::{SdkError, SdkResult};
use crate::services::RoutesService;
use crate::transport::{ApiResponse, HttpTransport};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER, USER_AGENT};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Main SDK client
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Create a new client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> SdkResult<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("rutas-sdk")),
        );

        if let Some(auth) = config.auth_header() {
            let mut value = HeaderValue::from_str(&auth).map_err(|_| SdkError::ConfigError {
                message: "Invalid authorization header".to_string(),
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| SdkError::ConfigError {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            inner: Arc::new(ClientInner { http, config }),
        })
    }

    /// Create a client from environment variables
    pub fn from_env() -> SdkResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Get the routes service
    pub fn routes(&self) -> RoutesService<Client> {
        RoutesService::new(self.clone())
    }

    /// Make a request with optional body
    async fn request<T, B>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&B>,
    ) -> SdkResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let url = self.inner.config.url_for(path);

        if self.inner.config.debug {
            debug!("SDK request: {} {}", method, url);
        }

        let mut request = self.inner.http.request(method, &url);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| self.send_error(e))?;

        self.handle_response(response).await
    }

    /// Map a failed send, reporting the configured timeout
    fn send_error(&self, err: reqwest::Error) -> SdkError {
        if err.is_timeout() {
            SdkError::Timeout {
                duration: self.inner.config.timeout,
            }
        } else {
            err.into()
        }
    }

    /// Handle successful response
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> SdkResult<ApiResponse<T>> {
        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_error_response(response).await);
        }

        let text = response.text().await.map_err(|e| self.send_error(e))?;

        if self.inner.config.debug {
            debug!("SDK response body: {}", text);
        }

        // An empty 2xx body reads as JSON null
        let body = if text.trim().is_empty() { "null" } else { text.as_str() };

        let data = serde_json::from_str(body).map_err(|e| {
            error!("Failed to parse response: {}", e);
            SdkError::InvalidResponse {
                message: format!("Failed to parse response: {}", e),
            }
        })?;

        Ok(ApiResponse::new(status.as_u16(), data))
    }

    /// Handle error response
    async fn handle_error_response(&self, response: reqwest::Response) -> SdkError {
        let status_code = response.status().as_u16();
        let path = response.url().path().to_string();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let body = response.text().await.unwrap_or_default();

        if self.inner.config.debug {
            debug!("SDK error response ({}): {}", status_code, body);
        }

        let parsed = serde_json::from_str::<ApiErrorResponse>(&body).ok();
        let (message, code, details) = match parsed {
            Some(api_error) => {
                let message = api_error
                    .message
                    .filter(|m| !m.is_empty())
                    .or(api_error.error)
                    .unwrap_or_else(|| body.clone());
                (message, api_error.code, api_error.details)
            }
            None => (body, None, None),
        };

        map_status(status_code, message, code, details, path, retry_after)
    }
}

/// Translate a non-success status into an SDK error
fn map_status(
    status_code: u16,
    message: String,
    code: Option<String>,
    details: Option<serde_json::Value>,
    path: String,
    retry_after: Option<u64>,
) -> SdkError {
    match status_code {
        400 | 422 => SdkError::ValidationError { message },
        401 => SdkError::Unauthorized {
            message: or_default(message, "Unauthorized"),
            status_code,
        },
        403 => SdkError::Forbidden {
            message: or_default(message, "Forbidden"),
        },
        404 => SdkError::NotFound { path },
        409 => SdkError::Conflict { message },
        429 => SdkError::RateLimited { retry_after },
        500..=599 => SdkError::ServerError {
            status_code,
            message,
        },
        _ => SdkError::ApiError {
            status_code,
            code,
            message,
            details,
        },
    }
}

fn or_default(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// API error response structure
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    message: Option<String>,
    error: Option<String>,
    code: Option<String>,
    details: Option<serde_json::Value>,
}

#[async_trait]
impl HttpTransport for Client {
    type Error = SdkError;

    async fn get<T>(&self, path: &str) -> SdkResult<ApiResponse<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.request(reqwest::Method::GET, path, Option::<&()>::None)
            .await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> SdkResult<ApiResponse<T>>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        self.request(reqwest::Method::POST, path, Some(body)).await
    }
}

/// Client builder for ergonomic configuration
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Load configuration from environment
    pub fn from_env(mut self) -> SdkResult<Self> {
        self.config = ClientConfig::from_env()?;
        Ok(self)
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the bearer token
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.config.bearer_token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Enable debug mode
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Build the client
    pub fn build(self) -> SdkResult<Client> {
        Client::new(self.config)
    }
}
