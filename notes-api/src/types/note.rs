//! Note-related API types

use notes_core::{normalize_content, validate_title, Note, NoteId, NotePatch, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Request to create a new note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateNoteRequest {
    /// Title of the note (required, trimmed server-side)
    pub title: String,
    /// Content of the note (optional; blank strings are stored as NULL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Request to update an existing note.
///
/// Partial patch semantics: fields absent from the request are left
/// unchanged on the stored row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateNoteRequest {
    /// New title (if changing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New content (if changing; blank strings clear the content)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New favorite flag (if changing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

impl UpdateNoteRequest {
    /// True when no field is being updated.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.favorite.is_none()
    }

    /// Convert the wire shape into the explicit present/absent patch
    /// structure, validating a present title along the way.
    pub fn to_patch(&self) -> Result<NotePatch, ValidationError> {
        let mut patch = NotePatch::new();
        if let Some(title) = &self.title {
            patch = patch.title(validate_title(title)?);
        }
        if let Some(content) = &self.content {
            patch = patch.content(normalize_content(Some(content)));
        }
        if let Some(favorite) = self.favorite {
            patch = patch.favorite(favorite);
        }
        Ok(patch)
    }
}

/// Note response with full details.
///
/// Field names are camelCased on the wire (`createdAt`), matching what
/// the browser client renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: NoteId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub favorite: bool,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            favorite: note.favorite,
            created_at: note.created_at,
        }
    }
}

impl From<NoteResponse> for Note {
    fn from(response: NoteResponse) -> Self {
        Self {
            id: response.id,
            title: response.title,
            content: response.content,
            favorite: response.favorite,
            created_at: response.created_at,
        }
    }
}

/// Response for a delete operation. Delete is idempotent, so `success`
/// is reported even when the row was already absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeleteNoteResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use notes_core::FieldUpdate;

    #[test]
    fn test_update_request_is_empty() {
        assert!(UpdateNoteRequest::default().is_empty());
        assert!(!UpdateNoteRequest {
            favorite: Some(true),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_update_request_to_patch_trims_title() -> Result<(), ValidationError> {
        let req = UpdateNoteRequest {
            title: Some("  Errands  ".to_string()),
            ..Default::default()
        };
        let patch = req.to_patch()?;
        assert_eq!(patch.title, FieldUpdate::Set("Errands".to_string()));
        assert!(patch.content.is_keep());
        assert!(patch.favorite.is_keep());
        Ok(())
    }

    #[test]
    fn test_update_request_rejects_blank_title() {
        let req = UpdateNoteRequest {
            title: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(req.to_patch().is_err());
    }

    #[test]
    fn test_update_request_blank_content_clears() -> Result<(), ValidationError> {
        let req = UpdateNoteRequest {
            content: Some("   ".to_string()),
            ..Default::default()
        };
        let patch = req.to_patch()?;
        assert_eq!(patch.content, FieldUpdate::Set(None));
        Ok(())
    }

    #[test]
    fn test_note_response_camel_case() -> Result<(), serde_json::Error> {
        let response = NoteResponse {
            id: 1,
            title: "Groceries".to_string(),
            content: Some("Milk, eggs".to_string()),
            favorite: false,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };
        let json = serde_json::to_string(&response)?;
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("created_at"));
        Ok(())
    }

    #[test]
    fn test_create_request_accepts_missing_content() -> Result<(), serde_json::Error> {
        let req: CreateNoteRequest = serde_json::from_str(r#"{"title":"Groceries"}"#)?;
        assert_eq!(req.title, "Groceries");
        assert_eq!(req.content, None);
        Ok(())
    }
}
