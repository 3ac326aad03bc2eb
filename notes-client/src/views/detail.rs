//! Detail route: view, edit, favorite, and delete a single note.

use crate::api_client::NotesApi;
use crate::cache::{QueryCache, QueryKey};
use crate::error::ClientError;
use notes_api::types::{NoteResponse, UpdateNoteRequest};
use notes_core::{normalize_content, Note, NoteId};

/// Two-step delete confirmation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteConfirm {
    #[default]
    Idle,
    Confirming,
}

/// Where the route ends up after an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    /// Stay on the detail route.
    Stayed,
    /// Navigate back to the list route (after a successful delete).
    NavigateToList,
}

/// State for the detail-and-edit-and-delete route.
#[derive(Debug)]
pub struct DetailView {
    note_id: NoteId,
    /// Edit mode toggles between display and input controls.
    pub editing: bool,
    /// Edit buffer for the title.
    pub edit_title: String,
    /// Edit buffer for the content.
    pub edit_content: String,
    /// Delete confirmation state.
    pub delete_confirm: DeleteConfirm,
    /// Inline error from the last failed mutation, if any.
    pub error: Option<String>,
}

impl DetailView {
    pub fn new(note_id: NoteId) -> Self {
        Self {
            note_id,
            editing: false,
            edit_title: String::new(),
            edit_content: String::new(),
            delete_confirm: DeleteConfirm::default(),
            error: None,
        }
    }

    pub fn note_id(&self) -> NoteId {
        self.note_id
    }

    /// Load the note, fetching on cache miss. A missing id propagates as
    /// `ClientError::NotFound`, which the route maps to its not-found
    /// presentation.
    pub async fn load<A: NotesApi + ?Sized>(
        &self,
        api: &A,
        cache: &mut QueryCache,
    ) -> Result<NoteResponse, ClientError> {
        cache.ensure_note(api, self.note_id).await
    }

    /// Enter edit mode, seeding the buffers from the current note.
    pub fn begin_edit(&mut self, note: &NoteResponse) {
        self.edit_title = note.title.clone();
        self.edit_content = note.content.clone().unwrap_or_default();
        self.editing = true;
    }

    /// Leave edit mode, resetting the buffers to the current note.
    pub fn cancel_edit(&mut self, note: &NoteResponse) {
        self.edit_title = note.title.clone();
        self.edit_content = note.content.clone().unwrap_or_default();
        self.editing = false;
    }

    /// Save the edit buffers.
    ///
    /// A blank title is a no-op (the save control is disabled). Blank
    /// content is omitted from the update, leaving the stored content
    /// unchanged. Returns whether the save was applied; mutation failures
    /// are surfaced inline and rolled back, load failures propagate.
    pub async fn save_edits<A: NotesApi + ?Sized>(
        &mut self,
        api: &A,
        cache: &mut QueryCache,
    ) -> Result<bool, ClientError> {
        let title = self.edit_title.trim().to_string();
        if title.is_empty() {
            return Ok(false);
        }

        let req = UpdateNoteRequest {
            title: Some(title),
            content: normalize_content(Some(&self.edit_content)),
            favorite: None,
        };

        let applied = self.apply_update(api, cache, req).await?;
        if applied {
            self.editing = false;
        }
        Ok(applied)
    }

    /// Flip the favorite flag.
    pub async fn toggle_favorite<A: NotesApi + ?Sized>(
        &mut self,
        api: &A,
        cache: &mut QueryCache,
    ) -> Result<bool, ClientError> {
        let current = cache.ensure_note(api, self.note_id).await?;
        let req = UpdateNoteRequest {
            title: None,
            content: None,
            favorite: Some(!current.favorite),
        };

        self.apply_update(api, cache, req).await
    }

    /// Issue an update with an optimistic cache write: the speculative
    /// value is visible immediately and the pre-mutation snapshot is
    /// restored on failure.
    async fn apply_update<A: NotesApi + ?Sized>(
        &mut self,
        api: &A,
        cache: &mut QueryCache,
        req: UpdateNoteRequest,
    ) -> Result<bool, ClientError> {
        let current = cache.ensure_note(api, self.note_id).await?;

        let patch = match req.to_patch() {
            Ok(patch) => patch,
            Err(e) => {
                self.error = Some(format!("Error updating note: {}", e));
                return Ok(false);
            }
        };

        let speculative: Note = patch.applied(&Note::from(current));
        let guard = cache.begin_optimistic(NoteResponse::from(speculative));

        match api.update_note(self.note_id, &req).await {
            Ok(note) => {
                guard.commit();
                // The server row wins over the speculative value
                cache.set_note(note);
                cache.invalidate(QueryKey::NotesList);
                self.error = None;
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(id = self.note_id, "Update note failed: {}", e);
                guard.roll_back(cache);
                self.error = Some(format!("Error updating note: {}", e));
                Ok(false)
            }
        }
    }

    /// First step of the delete interaction: ask for confirmation.
    pub fn request_delete(&mut self) {
        self.delete_confirm = DeleteConfirm::Confirming;
    }

    /// Abort a pending delete confirmation.
    pub fn cancel_delete(&mut self) {
        self.delete_confirm = DeleteConfirm::Idle;
    }

    /// Second step: commit the delete. A no-op unless a confirmation is
    /// pending. On success the list query is invalidated, the cached
    /// note dropped, and the caller navigates back to the list.
    pub async fn confirm_delete<A: NotesApi + ?Sized>(
        &mut self,
        api: &A,
        cache: &mut QueryCache,
    ) -> DetailOutcome {
        if self.delete_confirm != DeleteConfirm::Confirming {
            return DetailOutcome::Stayed;
        }

        match api.delete_note(self.note_id).await {
            Ok(_) => {
                cache.invalidate(QueryKey::NotesList);
                cache.invalidate(QueryKey::Note(self.note_id));
                DetailOutcome::NavigateToList
            }
            Err(e) => {
                tracing::warn!(id = self.note_id, "Delete note failed: {}", e);
                self.error = Some(format!("Error deleting note: {}", e));
                self.delete_confirm = DeleteConfirm::Idle;
                DetailOutcome::Stayed
            }
        }
    }
}
