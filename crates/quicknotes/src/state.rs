//! Shared application state.
//!
//! Cloned for each request handler. Storage is reached through a repository
//! trait object so handlers never see a connection directly.

use std::sync::Arc;

use quicknotes_core::storage::NoteRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Note repository backed by the configured SQLite file.
    pub notes: Arc<dyn NoteRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(notes: Arc<dyn NoteRepository>) -> Self {
        Self { notes }
    }
}
