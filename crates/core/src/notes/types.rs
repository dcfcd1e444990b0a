use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage-assigned note identifier (SQLite rowid).
pub type NoteId = i64;

/// A persisted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Set once at creation, never changes afterward.
    pub created_at: DateTime<Utc>,
    /// Reset on every successful update. Always `>= created_at`.
    pub updated_at: DateTime<Utc>,
}

/// A validated note that has not been assigned an id yet.
///
/// Built from [`CreateNoteRequest::into_new_note`](super::CreateNoteRequest::into_new_note),
/// so title and content are already within bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    /// Used for both `created_at` and `updated_at`.
    pub created_at: DateTime<Utc>,
}
