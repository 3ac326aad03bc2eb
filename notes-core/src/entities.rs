//! Core entity structures

use crate::{NoteId, Timestamp};
use serde::{Deserialize, Serialize};

/// Note - the sole persisted entity.
///
/// `id` and `created_at` are assigned by the store on insert and never
/// change afterwards. Title is guaranteed non-empty for every persisted
/// row; content is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: Option<String>,
    pub favorite: bool,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
}

/// Per-field update flag for partial patches.
///
/// Distinguishes "leave the field unchanged" from "set the field to this
/// value" without overloading `Option` (content is itself optional, so a
/// bare `Option<Option<String>>` would be ambiguous to read).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    /// Leave the current value untouched.
    #[default]
    Keep,
    /// Replace the current value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, FieldUpdate::Keep)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, FieldUpdate::Set(_))
    }

    /// The new value, if one is present.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            FieldUpdate::Keep => None,
            FieldUpdate::Set(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Keep,
        }
    }
}

/// Partial update for a note: the mutable subset of fields, each with an
/// explicit present/absent flag.
///
/// `id` and `created_at` are immutable and deliberately absent here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotePatch {
    pub title: FieldUpdate<String>,
    pub content: FieldUpdate<Option<String>>,
    pub favorite: FieldUpdate<bool>,
}

impl NotePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = FieldUpdate::Set(title.into());
        self
    }

    pub fn content(mut self, content: Option<String>) -> Self {
        self.content = FieldUpdate::Set(content);
        self
    }

    pub fn favorite(mut self, favorite: bool) -> Self {
        self.favorite = FieldUpdate::Set(favorite);
        self
    }

    /// True when no field carries an update.
    pub fn is_empty(&self) -> bool {
        self.title.is_keep() && self.content.is_keep() && self.favorite.is_keep()
    }

    /// Merge this patch into a note, touching only the present fields.
    pub fn apply_to(&self, note: &mut Note) {
        if let FieldUpdate::Set(title) = &self.title {
            note.title = title.clone();
        }
        if let FieldUpdate::Set(content) = &self.content {
            note.content = content.clone();
        }
        if let FieldUpdate::Set(favorite) = &self.favorite {
            note.favorite = *favorite;
        }
    }

    /// A copy of `note` with this patch applied. Used for speculative
    /// (optimistic) cache entries on the client side.
    pub fn applied(&self, note: &Note) -> Note {
        let mut next = note.clone();
        self.apply_to(&mut next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn sample_note() -> Note {
        Note {
            id: 1,
            title: "Groceries".to_string(),
            content: Some("Milk, eggs".to_string()),
            favorite: false,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut note = sample_note();
        let original = note.clone();
        let patch = NotePatch::new();

        assert!(patch.is_empty());
        patch.apply_to(&mut note);
        assert_eq!(note, original);
    }

    #[test]
    fn test_favorite_only_patch() {
        let mut note = sample_note();
        let patch = NotePatch::new().favorite(true);

        patch.apply_to(&mut note);

        assert!(note.favorite);
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content.as_deref(), Some("Milk, eggs"));
        assert_eq!(note.created_at, sample_note().created_at);
    }

    #[test]
    fn test_content_can_be_cleared() {
        let mut note = sample_note();
        let patch = NotePatch::new().content(None);

        patch.apply_to(&mut note);

        assert_eq!(note.content, None);
        assert_eq!(note.title, "Groceries");
    }

    #[test]
    fn test_field_update_from_option() {
        assert_eq!(FieldUpdate::from(Some(1)), FieldUpdate::Set(1));
        assert_eq!(FieldUpdate::<i32>::from(None), FieldUpdate::Keep);
    }

    #[test]
    fn test_applied_leaves_source_untouched() {
        let note = sample_note();
        let next = NotePatch::new().title("Errands").applied(&note);

        assert_eq!(note.title, "Groceries");
        assert_eq!(next.title, "Errands");
        assert_eq!(next.id, note.id);
    }

    proptest! {
        /// Immutable fields survive any patch; mutable fields end up
        /// either unchanged or equal to the patch value.
        #[test]
        fn prop_patch_touches_only_present_fields(
            title in proptest::option::of("[A-Za-z ]{1,40}"),
            content in proptest::option::of(proptest::option::of("[A-Za-z ]{0,80}")),
            favorite in proptest::option::of(any::<bool>()),
        ) {
            let note = sample_note();
            let patch = NotePatch {
                title: title.clone().into(),
                content: content.clone().into(),
                favorite: favorite.into(),
            };
            let next = patch.applied(&note);

            prop_assert_eq!(next.id, note.id);
            prop_assert_eq!(next.created_at, note.created_at);
            match &title {
                Some(t) => prop_assert_eq!(&next.title, t),
                None => prop_assert_eq!(&next.title, &note.title),
            }
            match &content {
                Some(c) => prop_assert_eq!(&next.content, c),
                None => prop_assert_eq!(&next.content, &note.content),
            }
            match favorite {
                Some(f) => prop_assert_eq!(next.favorite, f),
                None => prop_assert_eq!(next.favorite, note.favorite),
            }
        }
    }
}
