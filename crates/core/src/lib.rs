//! Functional core for quicknotes.
//!
//! Pure types and functions shared by the server: the note model, request
//! payloads and their validation, the partial-update merge, the error
//! taxonomy with its HTTP status mapping, the repository trait, and the
//! connection-file parser. Nothing in this crate performs I/O.

pub mod connection_file;
pub mod http_mapping;
pub mod notes;
pub mod storage;
