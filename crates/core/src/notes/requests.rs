//! API request types for note operations.
//!
//! Following the Functional Core pattern, these are pure data types with no I/O.
//! Validation happens when a request is converted into its validated form.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::error::NoteError;
use super::operations::{validate_content, validate_title};
use super::types::NewNote;

/// Request payload for creating a note.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
}

impl CreateNoteRequest {
    /// Create a new request.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Validate and convert into a [`NewNote`] stamped with `now`.
    pub fn into_new_note(self, now: DateTime<Utc>) -> Result<NewNote, NoteError> {
        validate_title(&self.title)?;
        validate_content(&self.content)?;

        Ok(NewNote {
            title: self.title,
            content: self.content,
            created_at: now,
        })
    }
}

/// Request payload for a partial note update.
///
/// Omitted fields (or explicit `null`) keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl UpdateNoteRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the note title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the note content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Returns true if no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Validate and convert into a [`NotePatch`].
    ///
    /// Rejects a request with no fields, and checks every supplied field
    /// against the same bounds as creation.
    pub fn into_patch(self) -> Result<NotePatch, NoteError> {
        if self.is_empty() {
            return Err(NoteError::EmptyUpdate);
        }
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(content) = &self.content {
            validate_content(content)?;
        }

        Ok(NotePatch {
            title: self.title,
            content: self.content,
        })
    }
}

/// A validated partial update. At least one field is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePatch {
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
}

impl NotePatch {
    /// Replacement title, if one was supplied.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Replacement content, if any was supplied.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_into_new_note() {
        let now = Utc::now();
        let note = CreateNoteRequest::new("A", "B").into_new_note(now).unwrap();

        assert_eq!(note.title, "A");
        assert_eq!(note.content, "B");
        assert_eq!(note.created_at, now);
    }

    #[test]
    fn test_create_request_rejects_long_title() {
        let result = CreateNoteRequest::new("t".repeat(201), "body").into_new_note(Utc::now());
        assert_eq!(result, Err(NoteError::TitleTooLong));
    }

    #[test]
    fn test_create_request_rejects_empty_content() {
        let result = CreateNoteRequest::new("title", "").into_new_note(Utc::now());
        assert_eq!(result, Err(NoteError::EmptyContent));
    }

    #[test]
    fn test_create_request_requires_both_fields() {
        let missing_content = serde_json::from_str::<CreateNoteRequest>(r#"{"title":"A"}"#);
        assert!(missing_content.is_err());
    }

    #[test]
    fn test_update_request_without_fields_is_rejected() {
        assert_eq!(
            UpdateNoteRequest::new().into_patch(),
            Err(NoteError::EmptyUpdate)
        );
    }

    #[test]
    fn test_update_request_null_fields_count_as_omitted() {
        let request: UpdateNoteRequest =
            serde_json::from_str(r#"{"title":null,"content":null}"#).unwrap();
        assert!(request.is_empty());
        assert_eq!(request.into_patch(), Err(NoteError::EmptyUpdate));
    }

    #[test]
    fn test_update_request_validates_supplied_fields() {
        let result = UpdateNoteRequest::new()
            .with_content("c".repeat(20_001))
            .into_patch();
        assert_eq!(result, Err(NoteError::ContentTooLong));

        let result = UpdateNoteRequest::new().with_title("").into_patch();
        assert_eq!(result, Err(NoteError::EmptyTitle));
    }

    #[test]
    fn test_update_request_single_field_patch() {
        let patch = UpdateNoteRequest::new().with_content("C").into_patch().unwrap();
        assert_eq!(patch.title(), None);
        assert_eq!(patch.content(), Some("C"));
    }
}
