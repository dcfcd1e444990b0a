//! SQLite repository implementation.
//!
//! Implements [`NoteRepository`] from `quicknotes_core::storage` using SQLite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::TransactionBehavior;

use quicknotes_core::notes::{merge_note, NewNote, Note, NoteId, NotePatch};
use quicknotes_core::storage::{NoteRepository, Result};

use super::connector::SqliteConnector;
use super::conversions::{format_datetime, row_to_note};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;
use crate::config::DatabaseConfig;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based note repository.
///
/// Holds no connection between calls: every method opens its own through
/// the [`SqliteConnector`] and drops it before returning.
#[derive(Debug, Clone)]
pub struct SqliteNoteRepository {
    connector: SqliteConnector,
}

impl SqliteNoteRepository {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            connector: SqliteConnector::new(config),
        }
    }

    /// Creates the `notes` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        let conn = self.connector.connect().await?;

        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "Note"))?;

        tracing::info!(path = %self.connector.path().display(), "Ensured notes schema");
        Ok(())
    }
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    async fn list_notes(&self) -> Result<Vec<Note>> {
        let conn = self.connector.connect().await?;

        conn.call(|conn| {
            let mut stmt = conn.prepare(schema::SELECT_NOTES).map_err(wrap_err)?;
            let rows = stmt.query_map([], row_to_note).map_err(wrap_err)?;

            let mut notes = Vec::new();
            for row_result in rows {
                notes.push(row_result.map_err(wrap_err)?);
            }
            Ok(notes)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "Note"))
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note> {
        let title = note.title.clone();
        let content = note.content.clone();
        let timestamp = format_datetime(&note.created_at);

        let conn = self.connector.connect().await?;

        conn.call(move |conn| {
            conn.execute(
                schema::INSERT_NOTE,
                rusqlite::params![title, content, timestamp, timestamp],
            )
            .map_err(wrap_err)?;

            let id = conn.last_insert_rowid();
            conn.query_row(schema::SELECT_NOTE_BY_ID, [id], row_to_note)
                .map_err(wrap_err)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "Note"))
    }

    async fn get_note(&self, id: NoteId) -> Result<Option<Note>> {
        let conn = self.connector.connect().await?;

        conn.call(move |conn| {
            let mut stmt = conn.prepare(schema::SELECT_NOTE_BY_ID).map_err(wrap_err)?;
            match stmt.query_row([id], row_to_note) {
                Ok(note) => Ok(Some(note)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(wrap_err(e)),
            }
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Note", id.to_string()))
    }

    async fn update_note(
        &self,
        id: NoteId,
        patch: &NotePatch,
        now: DateTime<Utc>,
    ) -> Result<Option<Note>> {
        let patch = patch.clone();

        let conn = self.connector.connect().await?;

        // BEGIN IMMEDIATE takes the write lock before the read, so a second
        // update cannot slip in between the read and the write.
        conn.call(move |conn| {
            let tx = conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(wrap_err)?;

            let current = match tx.query_row(schema::SELECT_NOTE_BY_ID, [id], row_to_note) {
                Ok(note) => note,
                Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
                Err(e) => return Err(wrap_err(e)),
            };

            let merged = merge_note(&current, &patch, now);
            tx.execute(
                schema::UPDATE_NOTE,
                rusqlite::params![
                    merged.id,
                    merged.title,
                    merged.content,
                    format_datetime(&merged.updated_at)
                ],
            )
            .map_err(wrap_err)?;

            // Read back so the result carries the stored timestamp precision.
            let stored = tx
                .query_row(schema::SELECT_NOTE_BY_ID, [id], row_to_note)
                .map_err(wrap_err)?;

            tx.commit().map_err(wrap_err)?;
            Ok(Some(stored))
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Note", id.to_string()))
    }

    async fn delete_note(&self, id: NoteId) -> Result<()> {
        let conn = self.connector.connect().await?;

        conn.call(move |conn| {
            let rows = conn.execute(schema::DELETE_NOTE, [id]).map_err(wrap_err)?;
            if rows == 0 {
                Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
            } else {
                Ok(())
            }
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Note", id.to_string()))
    }
}
