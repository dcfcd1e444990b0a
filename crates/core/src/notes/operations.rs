use super::error::NoteError;

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Maximum content length, in characters.
pub const CONTENT_MAX_CHARS: usize = 20_000;

/// Validates a note title.
///
/// Length is counted in characters, not bytes. Whitespace counts.
pub fn validate_title(title: &str) -> Result<(), NoteError> {
    if title.is_empty() {
        return Err(NoteError::EmptyTitle);
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(NoteError::TitleTooLong);
    }
    Ok(())
}

/// Validates a note body.
///
/// Length is counted in characters, not bytes. Whitespace counts.
pub fn validate_content(content: &str) -> Result<(), NoteError> {
    if content.is_empty() {
        return Err(NoteError::EmptyContent);
    }
    if content.chars().count() > CONTENT_MAX_CHARS {
        return Err(NoteError::ContentTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_boundaries() {
        assert_eq!(validate_title(""), Err(NoteError::EmptyTitle));
        assert_eq!(validate_title("a"), Ok(()));
        assert_eq!(validate_title(&"a".repeat(200)), Ok(()));
        assert_eq!(validate_title(&"a".repeat(201)), Err(NoteError::TitleTooLong));
    }

    #[test]
    fn test_title_counts_characters_not_bytes() {
        // 200 two-byte characters are 400 bytes but still within bounds.
        assert_eq!(validate_title(&"é".repeat(200)), Ok(()));
        assert_eq!(validate_title(&"é".repeat(201)), Err(NoteError::TitleTooLong));
    }

    #[test]
    fn test_content_counts_characters_not_bytes() {
        assert_eq!(validate_content(&"é".repeat(20_000)), Ok(()));
        assert_eq!(
            validate_content(&"é".repeat(20_001)),
            Err(NoteError::ContentTooLong)
        );
    }

    #[test]
    fn test_content_boundaries() {
        assert_eq!(validate_content(""), Err(NoteError::EmptyContent));
        assert_eq!(validate_content(&"b".repeat(20_000)), Ok(()));
        assert_eq!(
            validate_content(&"b".repeat(20_001)),
            Err(NoteError::ContentTooLong)
        );
    }

    #[test]
    fn test_whitespace_only_is_not_empty() {
        assert_eq!(validate_title(" "), Ok(()));
        assert_eq!(validate_content("\n"), Ok(()));
    }
}
