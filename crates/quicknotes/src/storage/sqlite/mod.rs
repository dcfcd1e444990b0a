//! SQLite storage backend implementation.
//!
//! A fresh connection is opened for every repository call and dropped when
//! the call returns. There is no pooling.

mod connector;
mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteNoteRepository;
