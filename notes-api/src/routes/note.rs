//! Note REST API Routes
//!
//! This module implements Axum route handlers for the five note
//! operations. All handlers issue at most two sequential statements
//! through the shared DbClient; there is no cross-request coordination
//! and concurrent updates are last-write-wins.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    db::DbClient,
    error::{ApiError, ApiResult},
    types::{CreateNoteRequest, DeleteNoteResponse, NoteResponse, UpdateNoteRequest},
};
use notes_core::{normalize_content, validate_title, NoteId};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// GET /api/v1/notes - List all notes ordered by creation time
#[utoipa::path(
    get,
    path = "/api/v1/notes",
    tag = "Notes",
    responses(
        (status = 200, description = "All notes, oldest first", body = Vec<NoteResponse>),
    ),
)]
pub async fn list_notes(State(db): State<DbClient>) -> ApiResult<impl IntoResponse> {
    let notes = db.note_list().await?;
    let response: Vec<NoteResponse> = notes.into_iter().map(NoteResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/v1/notes/{id} - Get note by ID
#[utoipa::path(
    get,
    path = "/api/v1/notes/{id}",
    tag = "Notes",
    params(
        ("id" = i32, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note details", body = NoteResponse),
        (status = 404, description = "Note not found", body = ApiError),
    ),
)]
pub async fn get_note(
    State(db): State<DbClient>,
    Path(id): Path<NoteId>,
) -> ApiResult<impl IntoResponse> {
    let note = db
        .note_get(id)
        .await?
        .ok_or_else(|| ApiError::note_not_found(id))?;

    Ok(Json(NoteResponse::from(note)))
}

/// POST /api/v1/notes - Create a new note
#[utoipa::path(
    post,
    path = "/api/v1/notes",
    tag = "Notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = NoteResponse),
        (status = 400, description = "Invalid request", body = ApiError),
    ),
)]
pub async fn create_note(
    State(db): State<DbClient>,
    Json(req): Json<CreateNoteRequest>,
) -> ApiResult<impl IntoResponse> {
    let title = validate_title(&req.title)?;
    let content = normalize_content(req.content.as_deref());

    // Insert-then-read-back; new notes always start unfavorited.
    let note = db.note_create(&title, content.as_deref()).await?;

    Ok((StatusCode::CREATED, Json(NoteResponse::from(note))))
}

/// PATCH /api/v1/notes/{id} - Update note (partial patch)
#[utoipa::path(
    patch,
    path = "/api/v1/notes/{id}",
    tag = "Notes",
    params(
        ("id" = i32, Path, description = "Note ID")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated successfully", body = NoteResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Note not found", body = ApiError),
    ),
)]
pub async fn update_note(
    State(db): State<DbClient>,
    Path(id): Path<NoteId>,
    Json(req): Json<UpdateNoteRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.is_empty() {
        return Err(ApiError::invalid_input(
            "At least one field must be provided for update",
        ));
    }

    let patch = req.to_patch()?;
    let note = db.note_update(id, &patch).await?;

    Ok(Json(NoteResponse::from(note)))
}

/// DELETE /api/v1/notes/{id} - Delete note
///
/// Idempotent: reports success even when the note was already absent.
#[utoipa::path(
    delete,
    path = "/api/v1/notes/{id}",
    tag = "Notes",
    params(
        ("id" = i32, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note deleted (or already absent)", body = DeleteNoteResponse),
    ),
)]
pub async fn delete_note(
    State(db): State<DbClient>,
    Path(id): Path<NoteId>,
) -> ApiResult<impl IntoResponse> {
    db.note_delete(id).await?;
    Ok(Json(DeleteNoteResponse { success: true }))
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the note routes router.
pub fn create_router(db: DbClient) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::post(create_note))
        .route("/", axum::routing::get(list_notes))
        .route("/:id", axum::routing::get(get_note))
        .route("/:id", axum::routing::patch(update_note))
        .route("/:id", axum::routing::delete(delete_note))
        .with_state(db)
}
