use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::notes::{NewNote, Note, NoteId, NotePatch};

use super::Result;

/// Repository for note operations.
///
/// Implementations acquire their storage handle per call and release it
/// before returning, on success and on error alike.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Lists every note, most recently updated first. Ties on `updated_at`
    /// are broken by the larger id first.
    async fn list_notes(&self) -> Result<Vec<Note>>;

    /// Inserts a note and returns it with its assigned id.
    async fn create_note(&self, note: &NewNote) -> Result<Note>;

    /// Gets a note by its id.
    async fn get_note(&self, id: NoteId) -> Result<Option<Note>>;

    /// Applies a partial update stamped with `now`.
    ///
    /// The read, merge and write happen as one atomic unit. Returns
    /// `Ok(None)` when no note has this id.
    async fn update_note(
        &self,
        id: NoteId,
        patch: &NotePatch,
        now: DateTime<Utc>,
    ) -> Result<Option<Note>>;

    /// Deletes a note. Fails with `NotFound` when nothing was removed.
    async fn delete_note(&self, id: NoteId) -> Result<()>;
}
