//! Notes API - REST API Layer
//!
//! This crate provides the HTTP surface for the notes service: five
//! note operations backed by a pooled PostgreSQL connection, plus
//! health checks and an OpenAPI document.

pub mod config;
pub mod db;
pub mod error;
#[cfg(feature = "openapi")]
pub mod openapi;
pub mod routes;
pub mod schema;
pub mod telemetry;
pub mod types;

// Re-export commonly used types
pub use config::ApiConfig;
pub use db::{DbClient, DbConfig};
pub use error::{ApiError, ApiResult, ErrorCode};
#[cfg(feature = "openapi")]
pub use openapi::ApiDoc;
pub use routes::create_api_router;
pub use types::*;
