use thiserror::Error;

/// Errors raised while validating note payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoteError {
    #[error("Note title cannot be empty")]
    EmptyTitle,
    #[error("Note title too long (max 200 characters)")]
    TitleTooLong,
    #[error("Note content cannot be empty")]
    EmptyContent,
    #[error("Note content too long (max 20000 characters)")]
    ContentTooLong,
    #[error("At least one of 'title' or 'content' must be provided")]
    EmptyUpdate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_error_display() {
        assert_eq!(NoteError::EmptyTitle.to_string(), "Note title cannot be empty");
        assert_eq!(
            NoteError::ContentTooLong.to_string(),
            "Note content too long (max 20000 characters)"
        );
        assert_eq!(
            NoteError::EmptyUpdate.to_string(),
            "At least one of 'title' or 'content' must be provided"
        );
    }
}
