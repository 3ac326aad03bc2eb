//! List route: show all notes, create new ones.

use crate::api_client::NotesApi;
use crate::cache::{QueryCache, QueryKey};
use crate::error::ClientError;
use notes_api::types::{CreateNoteRequest, NoteResponse};
use notes_core::normalize_content;

/// State for the list-and-create route.
#[derive(Debug, Default)]
pub struct ListView {
    /// Create-form title buffer.
    pub title_input: String,
    /// Create-form content buffer.
    pub content_input: String,
    /// Inline error from the last failed submit, if any.
    pub error: Option<String>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the notes list, fetching on cache miss (the route loader
    /// suspends until this resolves).
    pub async fn load<A: NotesApi + ?Sized>(
        &self,
        api: &A,
        cache: &mut QueryCache,
    ) -> Result<Vec<NoteResponse>, ClientError> {
        cache.ensure_list(api).await
    }

    /// The submit button is enabled only for a non-blank title.
    pub fn can_submit(&self) -> bool {
        !self.title_input.trim().is_empty()
    }

    /// Submit the create form.
    ///
    /// On success the list query is invalidated (forcing a refetch on
    /// the next load) and the form is cleared. On failure the error is
    /// surfaced inline and the form is left intact; `None` is returned.
    pub async fn submit<A: NotesApi + ?Sized>(
        &mut self,
        api: &A,
        cache: &mut QueryCache,
    ) -> Option<NoteResponse> {
        if !self.can_submit() {
            return None;
        }

        let req = CreateNoteRequest {
            title: self.title_input.trim().to_string(),
            content: normalize_content(Some(&self.content_input)),
        };

        match api.create_note(&req).await {
            Ok(note) => {
                cache.invalidate(QueryKey::NotesList);
                self.title_input.clear();
                self.content_input.clear();
                self.error = None;
                Some(note)
            }
            Err(e) => {
                tracing::warn!("Create note failed: {}", e);
                self.error = Some(format!("Error creating note: {}", e));
                None
            }
        }
    }
}
