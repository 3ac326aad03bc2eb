//! REST API Routes Module
//!
//! Route handlers and router assembly:
//! - Note CRUD routes under /api/v1/notes
//! - Health check endpoints (Kubernetes-compatible)
//! - OpenAPI spec at /openapi.json
//! - CORS support for browser-based clients

pub mod health;
pub mod note;

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::db::DbClient;
use crate::error::{ApiError, ApiResult};

// Re-export route creation functions for convenience
pub use health::create_router as health_router;
pub use note::create_router as note_router;

// ============================================================================
// OPENAPI ENDPOINT
// ============================================================================

/// Handler for /openapi.json endpoint.
#[cfg(feature = "openapi")]
async fn openapi_json() -> axum::Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi;

    axum::Json(crate::openapi::ApiDoc::openapi())
}

// ============================================================================
// CORS
// ============================================================================

/// Build the CORS layer from configuration.
///
/// An empty origin list is the permissive dev posture; configured origins
/// produce an explicit allowlist.
fn build_cors_layer(config: &ApiConfig) -> ApiResult<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    if config.cors_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|e| {
                ApiError::invalid_input(format!("Invalid CORS origin '{}': {}", origin, e))
            })
        })
        .collect::<ApiResult<Vec<_>>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

// ============================================================================
// ROUTER ASSEMBLY
// ============================================================================

/// Build the complete API router.
///
/// Layer order (outer to inner): CORS handles preflight before tracing;
/// request tracing wraps every route.
pub fn create_api_router(db: DbClient, config: &ApiConfig) -> ApiResult<Router> {
    let api_routes = Router::new().nest("/notes", note::create_router(db.clone()));

    let router = Router::new()
        .nest("/api/v1", api_routes)
        // Health checks live outside the versioned API surface
        .nest("/health", health::create_router(db));

    #[cfg(feature = "openapi")]
    let router = router.route("/openapi.json", axum::routing::get(openapi_json));

    let router = router
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config)?);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_dev_mode() {
        let config = ApiConfig::default();
        assert!(build_cors_layer(&config).is_ok());
    }

    #[test]
    fn test_cors_layer_with_origins() {
        let config = ApiConfig {
            cors_origins: vec!["https://notes.example.com".to_string()],
            ..ApiConfig::default()
        };
        assert!(build_cors_layer(&config).is_ok());
    }

    #[test]
    fn test_cors_layer_rejects_bad_origin() {
        let config = ApiConfig {
            cors_origins: vec!["https://bad\norigin".to_string()],
            ..ApiConfig::default()
        };
        assert!(build_cors_layer(&config).is_err());
    }
}
