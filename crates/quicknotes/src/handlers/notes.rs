//! Note CRUD handlers.
//!
//! Inputs are validated before any storage access. Storage goes through the
//! repository trait object held in [`AppState`].

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use chrono::Utc;

use quicknotes_core::notes::{CreateNoteRequest, Note, NoteId, UpdateNoteRequest};
use quicknotes_core::storage::RepositoryError;

use crate::{
    handlers::{error::InvalidRequest, AppError},
    state::AppState,
};

fn note_id(path: Result<Path<NoteId>, PathRejection>) -> Result<NoteId, AppError> {
    let Path(id) = path.map_err(|e| InvalidRequest(e.body_text()))?;
    Ok(id)
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    let Json(payload) = body.map_err(|e| InvalidRequest(e.body_text()))?;
    Ok(payload)
}

/// List all notes, most recently updated first (GET /notes).
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, AppError> {
    let notes = state.notes.list_notes().await?;
    Ok(Json(notes))
}

/// Create a note (POST /notes).
pub async fn create_note(
    State(state): State<AppState>,
    body: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let payload = json_body(body)?;
    tracing::debug!(title = %payload.title, "Received create note request");

    let new_note = payload.into_new_note(Utc::now())?;
    let note = state.notes.create_note(&new_note).await?;

    tracing::info!(note_id = note.id, "Created note");

    Ok((StatusCode::CREATED, Json(note)))
}

/// Get a single note by ID (GET /notes/{id}).
pub async fn get_note(
    State(state): State<AppState>,
    path: Result<Path<NoteId>, PathRejection>,
) -> Result<Json<Note>, AppError> {
    let id = note_id(path)?;

    match state.notes.get_note(id).await? {
        Some(note) => Ok(Json(note)),
        None => Err(RepositoryError::note_not_found(id).into()),
    }
}

/// Partially update a note by ID (PUT /notes/{id}).
///
/// Omitted fields keep their stored value; at least one must be supplied.
pub async fn update_note(
    State(state): State<AppState>,
    path: Result<Path<NoteId>, PathRejection>,
    body: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<Json<Note>, AppError> {
    let id = note_id(path)?;
    let patch = json_body(body)?.into_patch()?;

    let note = state
        .notes
        .update_note(id, &patch, Utc::now())
        .await?
        .ok_or_else(|| RepositoryError::note_not_found(id))?;

    tracing::info!(note_id = id, "Updated note");

    Ok(Json(note))
}

/// Delete a note by ID (DELETE /notes/{id}).
pub async fn delete_note(
    State(state): State<AppState>,
    path: Result<Path<NoteId>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = note_id(path)?;

    state.notes.delete_note(id).await?;

    tracing::info!(note_id = id, "Deleted note");

    Ok(StatusCode::NO_CONTENT)
}
