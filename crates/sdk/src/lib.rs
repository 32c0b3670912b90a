//! # Rutas SDK
//!
//! Rust client for the `/rutas` routes API.
//!
//! Two operations are exposed through [`RoutesService`]:
//!
//! - **List**: `GET /rutas`, returning every stored route
//! - **Create**: `POST /rutas`, submitting a new route
//!
//! Route records are treated as opaque JSON objects. Typed views
//! ([`Ruta`], [`RutaRequest`]) are available for callers that want them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rutas_sdk::Client;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder()
//!         .base_url("http://localhost:8080")
//!         .bearer_token("your-token")
//!         .build()?;
//!
//!     let routes = client.routes().get_all().await?;
//!     println!("{} routes", routes.len());
//!
//!     let created = client
//!         .routes()
//!         .create(&json!({ "nombre": "Costanera", "coordenadas": [[-33.41, -70.60], [-33.42, -70.61]] }))
//!         .await?;
//!     println!("created: {}", created);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! The default client can be configured through environment variables:
//!
//! - `RUTAS_API_URL`: API endpoint URL
//! - `RUTAS_API_TOKEN`: bearer token for authentication
//! - `RUTAS_API_TIMEOUT`: request timeout in seconds
//! - `RUTAS_API_DEBUG`: log requests and responses at debug level
//!
//! ## Custom transports
//!
//! [`RoutesService`] works over any [`HttpTransport`]. Errors are whatever
//! the transport returns; the service adds no wrapping of its own.
//!
//! ```rust,no_run
//! use rutas_sdk::{Client, RoutesService, SdkError};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let shared = Arc::new(Client::from_env()?);
//! let routes = RoutesService::new(Arc::clone(&shared));
//!
//! match routes.get_all().await {
//!     Ok(list) => println!("{} routes", list.len()),
//!     Err(SdkError::Unauthorized { .. }) => println!("Invalid token"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod transport;

// Re-exports
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{SdkError, SdkResult};
pub use models::*;
pub use services::{RoutesService, ROUTES_PATH};
pub use transport::{ApiResponse, HttpTransport};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::{Client, ClientBuilder};
    pub use crate::config::ClientConfig;
    pub use crate::error::{SdkError, SdkResult};
    pub use crate::models::*;
    pub use crate::services::*;
    pub use crate::transport::{ApiResponse, HttpTransport};
}

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API URL
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
