//! HTTP transport abstraction
//!
//! Services talk to the API through [`HttpTransport`] so the default
//! reqwest-backed [`Client`](crate::Client) can be swapped for a test double.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// A parsed HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    /// HTTP status code
    pub status: u16,
    /// Parsed response body
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Create a response with the given status and body
    pub fn new(status: u16, data: T) -> Self {
        Self { status, data }
    }

    /// Take the body, dropping the envelope
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Capability to issue JSON requests against a preconfigured API.
///
/// Base URL, headers and authentication belong to the implementor; callers
/// pass only a resource path.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Error produced by this transport
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issue a GET request
    async fn get<T>(&self, path: &str) -> Result<ApiResponse<T>, Self::Error>
    where
        T: DeserializeOwned + Send;

    /// Issue a POST request with a JSON body
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, Self::Error>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;
}

#[async_trait]
impl<'a, H: HttpTransport> HttpTransport for &'a H {
    type Error = H::Error;

    async fn get<T>(&self, path: &str) -> Result<ApiResponse<T>, Self::Error>
    where
        T: DeserializeOwned + Send,
    {
        (**self).get(path).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, Self::Error>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        (**self).post(path, body).await
    }
}

#[async_trait]
impl<H: HttpTransport> HttpTransport for Arc<H> {
    type Error = H::Error;

    async fn get<T>(&self, path: &str) -> Result<ApiResponse<T>, Self::Error>
    where
        T: DeserializeOwned + Send,
    {
        (**self).get(path).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, Self::Error>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        (**self).post(path, body).await
    }
}
