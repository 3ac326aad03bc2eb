//! In-memory stand-in for the notes service.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use notes_api::types::{CreateNoteRequest, DeleteNoteResponse, NoteResponse, UpdateNoteRequest};
use notes_api::ApiError;
use notes_client::{ClientError, NotesApi};
use notes_core::{Note, NoteId};

/// Server double with the same observable behavior as the REST surface:
/// list ordered by creation time, idempotent delete, partial patches,
/// not-found on absent ids. A single failure can be injected to drive
/// the rollback paths.
pub struct MockApi {
    state: Mutex<MockState>,
}

struct MockState {
    notes: BTreeMap<NoteId, NoteResponse>,
    next_id: NoteId,
    fail_next: bool,
    get_calls: usize,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                notes: BTreeMap::new(),
                next_id: 1,
                fail_next: false,
                get_calls: 0,
            }),
        }
    }

    /// Insert a note directly, bypassing the API surface.
    pub fn seed(&self, title: &str, content: Option<&str>) -> NoteResponse {
        let mut state = self.state.lock().unwrap();
        let note = state.mint(title, content.map(str::to_string));
        state.notes.insert(note.id, note.clone());
        note
    }

    /// Make the next request fail with a server error.
    pub fn fail_next_request(&self) {
        self.state.lock().unwrap().fail_next = true;
    }

    /// How many times `get_note` has been called.
    pub fn get_calls(&self) -> usize {
        self.state.lock().unwrap().get_calls
    }
}

impl MockState {
    /// Allocate a note with a fresh id. Creation timestamps advance one
    /// second per id so list ordering is deterministic.
    fn mint(&mut self, title: &str, content: Option<String>) -> NoteResponse {
        let id = self.next_id;
        self.next_id += 1;
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        NoteResponse {
            id,
            title: title.to_string(),
            content,
            favorite: false,
            created_at: base + Duration::seconds(id as i64),
        }
    }

    fn check_fail(&mut self) -> Result<(), ClientError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(ClientError::Api(ApiError::database_error(
                "injected failure",
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl NotesApi for MockApi {
    async fn list_notes(&self) -> Result<Vec<NoteResponse>, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.check_fail()?;
        let mut notes: Vec<NoteResponse> = state.notes.values().cloned().collect();
        notes.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(notes)
    }

    async fn get_note(&self, id: NoteId) -> Result<NoteResponse, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.get_calls += 1;
        state.check_fail()?;
        state
            .notes
            .get(&id)
            .cloned()
            .ok_or(ClientError::NotFound(id))
    }

    async fn create_note(&self, req: &CreateNoteRequest) -> Result<NoteResponse, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.check_fail()?;
        let title = notes_core::validate_title(&req.title)
            .map_err(|e| ClientError::Api(ApiError::from(e)))?;
        let content = notes_core::normalize_content(req.content.as_deref());
        let note = state.mint(&title, content);
        state.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn update_note(
        &self,
        id: NoteId,
        req: &UpdateNoteRequest,
    ) -> Result<NoteResponse, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.check_fail()?;
        let patch = req
            .to_patch()
            .map_err(|e| ClientError::Api(ApiError::from(e)))?;
        let current = state
            .notes
            .get(&id)
            .cloned()
            .ok_or(ClientError::NotFound(id))?;
        let updated: NoteResponse = patch.applied(&Note::from(current)).into();
        state.notes.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete_note(&self, id: NoteId) -> Result<DeleteNoteResponse, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.check_fail()?;
        state.notes.remove(&id);
        Ok(DeleteNoteResponse { success: true })
    }
}
