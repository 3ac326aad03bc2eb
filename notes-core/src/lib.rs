//! Notes Core - Entity Types
//!
//! Pure data structures with no behavior beyond field merging and
//! validation. All other crates depend on this.

use chrono::{DateTime, Utc};

pub mod entities;
pub mod error;

pub use entities::{FieldUpdate, Note, NotePatch};
pub use error::ValidationError;

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// Note identifier. Generated by the store on insert (SERIAL column).
pub type NoteId = i32;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Maximum title length in characters (VARCHAR(255) column).
pub const MAX_TITLE_LEN: usize = 255;

// ============================================================================
// VALIDATION HELPERS
// ============================================================================

/// Validate and normalize a note title.
///
/// Returns the trimmed title, or an error if it is empty after trimming
/// or exceeds [`MAX_TITLE_LEN`] characters.
pub fn validate_title(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::RequiredFieldMissing {
            field: "title".to_string(),
        });
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::InvalidValue {
            field: "title".to_string(),
            reason: format!("exceeds {} characters", MAX_TITLE_LEN),
        });
    }
    Ok(trimmed.to_string())
}

/// Normalize optional content: trim, mapping blank strings to `None`.
///
/// Mirrors the create form behavior where whitespace-only content is
/// treated as absent and stored as NULL.
pub fn normalize_content(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title_trims() -> Result<(), ValidationError> {
        assert_eq!(validate_title("  Groceries  ")?, "Groceries");
        Ok(())
    }

    #[test]
    fn test_validate_title_rejects_blank() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   \t\n").is_err());
    }

    #[test]
    fn test_validate_title_rejects_overlong() {
        let long = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(validate_title(&long).is_err());

        let max = "x".repeat(MAX_TITLE_LEN);
        assert!(validate_title(&max).is_ok());
    }

    #[test]
    fn test_normalize_content() {
        assert_eq!(normalize_content(None), None);
        assert_eq!(normalize_content(Some("")), None);
        assert_eq!(normalize_content(Some("   ")), None);
        assert_eq!(
            normalize_content(Some("  Milk, eggs  ")),
            Some("Milk, eggs".to_string())
        );
    }
}
