//! OpenAPI Specification for the Notes API
//!
//! This module defines the OpenAPI document for the notes REST API.
//! It uses utoipa to generate the specification from Rust types and
//! route annotations.

use utoipa::OpenApi;

use crate::error::{ApiError, ErrorCode};
use crate::routes::{health, note};
use crate::types::{CreateNoteRequest, DeleteNoteResponse, NoteResponse, UpdateNoteRequest};

/// OpenAPI document for the notes API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes API",
        version = "0.1.0",
        description = "CRUD API for short text notes",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local Development")
    ),
    tags(
        (name = "Notes", description = "Note CRUD operations"),
        (name = "Health", description = "Health check endpoints")
    ),
    paths(
        // === Note Routes ===
        note::list_notes,
        note::get_note,
        note::create_note,
        note::update_note,
        note::delete_note,

        // === Health Routes ===
        health::ping,
        health::liveness,
        health::readiness,
    ),
    components(schemas(
        NoteResponse,
        CreateNoteRequest,
        UpdateNoteRequest,
        DeleteNoteResponse,
        ApiError,
        ErrorCode,
        health::HealthResponse,
        health::HealthStatus,
        health::DatabaseHealth,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_lists_all_note_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/v1/notes"));
        assert!(paths.contains_key("/api/v1/notes/{id}"));
        assert!(paths.contains_key("/health/ready"));
    }

    #[test]
    fn test_openapi_document_serializes() {
        let doc = ApiDoc::openapi();
        assert!(serde_json::to_string(&doc).is_ok());
    }
}
