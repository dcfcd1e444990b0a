//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `quicknotes_core::storage`. Notes live in a single SQLite file accessed
//! through `rusqlite`, wrapped for async use by `tokio-rusqlite`.

pub mod sqlite;

pub use sqlite::SqliteNoteRepository;
