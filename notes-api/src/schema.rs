//! Persisted schema for the notes table.
//!
//! The table is bootstrapped at startup instead of through a separate
//! migration step; the DDL is idempotent.

/// DDL for the single `notes` table.
///
/// `id` and `created_at` are store-assigned; `favorite` defaults false.
pub const NOTES_TABLE_DDL: &str = "\
CREATE TABLE IF NOT EXISTS notes (
    id         SERIAL PRIMARY KEY,
    title      VARCHAR(255) NOT NULL,
    content    TEXT,
    favorite   BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

/// Column list shared by every SELECT against the notes table, keeping
/// row-to-entity mapping positionally stable.
pub const NOTE_COLUMNS: &str = "id, title, content, favorite, created_at";
