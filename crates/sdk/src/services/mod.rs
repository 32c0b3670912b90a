//! SDK service implementations
//!
//! This module provides service classes for different API resources.

mod routes;

pub use routes::{RoutesService, ROUTES_PATH};
