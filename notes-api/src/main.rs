//! Notes API Server Entry Point
//!
//! Bootstraps configuration, prepares the database schema, and starts
//! the Axum HTTP server.

use axum::Router;
use notes_api::telemetry::init_tracing;
use notes_api::{create_api_router, ApiConfig, ApiError, ApiResult, DbClient, DbConfig};

#[tokio::main]
async fn main() -> ApiResult<()> {
    init_tracing();

    let db_config = DbConfig::from_env();
    let db = DbClient::from_config(&db_config)?;
    db.ensure_schema().await?;

    let api_config = ApiConfig::from_env();
    let app: Router = create_api_router(db, &api_config)?;

    let addr = api_config.bind_addr()?;
    tracing::info!(%addr, "Starting notes API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
