//! Partial-update merge for notes.
//!
//! Pure function: combines the stored note with a validated patch. The
//! repository calls it between the read and the write of an update.

use chrono::{DateTime, Utc};

use super::requests::NotePatch;
use super::types::Note;

/// Applies `patch` over `current`, stamping `updated_at` with `now`.
///
/// Fields missing from the patch keep their current value. `id` and
/// `created_at` are never touched. If `now` is earlier than `created_at`
/// (clock moved backwards), `updated_at` is clamped to `created_at`.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use quicknotes_core::notes::{merge_note, Note, UpdateNoteRequest};
///
/// let t0 = Utc::now();
/// let current = Note {
///     id: 1,
///     title: "A".to_string(),
///     content: "B".to_string(),
///     created_at: t0,
///     updated_at: t0,
/// };
/// let patch = UpdateNoteRequest::new().with_content("C").into_patch().unwrap();
///
/// let merged = merge_note(&current, &patch, t0 + Duration::seconds(1));
/// assert_eq!(merged.title, "A");
/// assert_eq!(merged.content, "C");
/// assert!(merged.updated_at > merged.created_at);
/// ```
pub fn merge_note(current: &Note, patch: &NotePatch, now: DateTime<Utc>) -> Note {
    Note {
        id: current.id,
        title: patch
            .title
            .clone()
            .unwrap_or_else(|| current.title.clone()),
        content: patch
            .content
            .clone()
            .unwrap_or_else(|| current.content.clone()),
        created_at: current.created_at,
        updated_at: now.max(current.created_at),
    }
}
