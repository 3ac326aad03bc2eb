//! Client-side error types.

use notes_api::ApiError;
use notes_core::NoteId;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Note {0} not found")]
    NotFound(NoteId),

    #[error("API error: {0}")]
    Api(ApiError),

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl ClientError {
    /// True when the server reported the requested id as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}
