//! Query cache with optimistic updates.
//!
//! Two named queries back the UI: the notes list and note-by-id. The
//! cache is a plain state-transition structure: `ensure` fetches on
//! miss, `invalidate` drops an entry so the next `ensure` refetches,
//! and `begin_optimistic` snapshots the prior value so a failed
//! mutation can be rolled back. None of this is a correctness
//! guarantee; the server remains the source of truth.

use std::collections::HashMap;

use crate::api_client::NotesApi;
use crate::error::ClientError;
use notes_api::types::NoteResponse;
use notes_core::NoteId;

/// Key identifying a cached query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The full notes list, oldest first.
    NotesList,
    /// A single note by id.
    Note(NoteId),
}

/// Client-side cache for the two note queries.
#[derive(Debug, Default)]
pub struct QueryCache {
    list: Option<Vec<NoteResponse>>,
    by_id: HashMap<NoteId, NoteResponse>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached list, if populated.
    pub fn cached_list(&self) -> Option<&[NoteResponse]> {
        self.list.as_deref()
    }

    /// The cached note for an id, if populated.
    pub fn cached_note(&self, id: NoteId) -> Option<&NoteResponse> {
        self.by_id.get(&id)
    }

    /// Replace the cached list.
    pub fn set_list(&mut self, notes: Vec<NoteResponse>) {
        self.list = Some(notes);
    }

    /// Replace the cached entry for a note.
    pub fn set_note(&mut self, note: NoteResponse) {
        self.by_id.insert(note.id, note);
    }

    /// Drop a cached entry; the next `ensure` for that key refetches.
    pub fn invalidate(&mut self, key: QueryKey) {
        match key {
            QueryKey::NotesList => self.list = None,
            QueryKey::Note(id) => {
                self.by_id.remove(&id);
            }
        }
    }

    /// Ensure the list query is populated, fetching on miss.
    pub async fn ensure_list<A: NotesApi + ?Sized>(
        &mut self,
        api: &A,
    ) -> Result<Vec<NoteResponse>, ClientError> {
        if let Some(notes) = &self.list {
            return Ok(notes.clone());
        }
        let notes = api.list_notes().await?;
        self.list = Some(notes.clone());
        Ok(notes)
    }

    /// Ensure the by-id query is populated, fetching on miss.
    ///
    /// A missing id surfaces as `ClientError::NotFound`, which the
    /// detail view maps to its not-found presentation.
    pub async fn ensure_note<A: NotesApi + ?Sized>(
        &mut self,
        api: &A,
        id: NoteId,
    ) -> Result<NoteResponse, ClientError> {
        if let Some(note) = self.by_id.get(&id) {
            return Ok(note.clone());
        }
        let note = api.get_note(id).await?;
        self.by_id.insert(id, note.clone());
        Ok(note)
    }

    /// Apply a speculative note value, returning a guard that can restore
    /// the pre-mutation snapshot if the server call fails.
    pub fn begin_optimistic(&mut self, speculative: NoteResponse) -> OptimisticUpdate {
        let id = speculative.id;
        let previous = self.by_id.insert(id, speculative);
        OptimisticUpdate { id, previous }
    }
}

/// Snapshot guard for an optimistic cache write.
///
/// `commit` discards the snapshot once the server confirmed the
/// mutation; `roll_back` restores the prior state after a failure.
#[must_use = "an optimistic update must be committed or rolled back"]
#[derive(Debug)]
pub struct OptimisticUpdate {
    id: NoteId,
    previous: Option<NoteResponse>,
}

impl OptimisticUpdate {
    /// The mutation succeeded; keep the new state.
    pub fn commit(self) {}

    /// The mutation failed; re-apply the pre-mutation snapshot.
    pub fn roll_back(self, cache: &mut QueryCache) {
        match self.previous {
            Some(previous) => {
                cache.by_id.insert(self.id, previous);
            }
            None => {
                cache.by_id.remove(&self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample(id: NoteId, title: &str, favorite: bool) -> NoteResponse {
        NoteResponse {
            id,
            title: title.to_string(),
            content: None,
            favorite,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_set_and_invalidate() {
        let mut cache = QueryCache::new();
        cache.set_list(vec![sample(1, "a", false)]);
        cache.set_note(sample(1, "a", false));

        assert!(cache.cached_list().is_some());
        assert!(cache.cached_note(1).is_some());

        cache.invalidate(QueryKey::NotesList);
        assert!(cache.cached_list().is_none());
        assert!(cache.cached_note(1).is_some());

        cache.invalidate(QueryKey::Note(1));
        assert!(cache.cached_note(1).is_none());
    }

    #[test]
    fn test_optimistic_rollback_restores_snapshot() {
        let mut cache = QueryCache::new();
        cache.set_note(sample(1, "a", false));

        let guard = cache.begin_optimistic(sample(1, "a", true));
        assert!(cache.cached_note(1).is_some_and(|n| n.favorite));

        guard.roll_back(&mut cache);
        assert!(cache.cached_note(1).is_some_and(|n| !n.favorite));
    }

    #[test]
    fn test_optimistic_rollback_without_prior_entry() {
        let mut cache = QueryCache::new();

        let guard = cache.begin_optimistic(sample(2, "b", false));
        assert!(cache.cached_note(2).is_some());

        guard.roll_back(&mut cache);
        assert!(cache.cached_note(2).is_none());
    }

    #[test]
    fn test_optimistic_commit_keeps_new_state() {
        let mut cache = QueryCache::new();
        cache.set_note(sample(1, "a", false));

        let guard = cache.begin_optimistic(sample(1, "a", true));
        guard.commit();

        assert!(cache.cached_note(1).is_some_and(|n| n.favorite));
    }
}
