mod error;
mod merge;
mod operations;
mod requests;
mod types;

pub use error::NoteError;
pub use merge::merge_note;
pub use operations::{validate_content, validate_title, CONTENT_MAX_CHARS, TITLE_MAX_CHARS};
pub use requests::{CreateNoteRequest, NotePatch, UpdateNoteRequest};
pub use types::{NewNote, Note, NoteId};
