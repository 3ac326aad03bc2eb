//! API Configuration Module
//!
//! Server-level configuration (bind address, CORS) loaded from environment
//! variables with sensible defaults for development.

use std::net::SocketAddr;

use crate::error::{ApiError, ApiResult};

/// API configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,

    /// Max age for CORS preflight cache in seconds.
    pub cors_max_age_secs: u64,

    /// Bind host for the HTTP listener.
    pub bind_host: String,

    /// Bind port for the HTTP listener.
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            // CORS defaults: permissive for development
            cors_origins: Vec::new(), // Empty = allow all
            cors_max_age_secs: 86400, // 24 hours
            bind_host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `NOTES_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    /// - `NOTES_CORS_MAX_AGE_SECS`: Preflight cache duration (default: 86400)
    /// - `NOTES_BIND`: Bind host (default: 0.0.0.0)
    /// - `PORT` or `NOTES_PORT`: Bind port (default: 3000)
    pub fn from_env() -> Self {
        let cors_origins = std::env::var("NOTES_CORS_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let cors_max_age_secs = std::env::var("NOTES_CORS_MAX_AGE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(86400);

        let bind_host = std::env::var("NOTES_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .ok()
            .or_else(|| std::env::var("NOTES_PORT").ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        Self {
            cors_origins,
            cors_max_age_secs,
            bind_host,
            port,
        }
    }

    /// Resolve the socket address to bind the listener to.
    pub fn bind_addr(&self) -> ApiResult<SocketAddr> {
        let addr = format!("{}:{}", self.bind_host, self.port);
        addr.parse::<SocketAddr>()
            .map_err(|e| ApiError::invalid_input(format!("Invalid bind address {}: {}", addr, e)))
    }

    /// Check if running with an explicit origin allowlist (production mode).
    pub fn is_production(&self) -> bool {
        !self.cors_origins.is_empty()
    }
}
