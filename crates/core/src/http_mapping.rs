//! Pure functions for mapping core errors to HTTP status codes.
//!
//! Following the Functional Core pattern - pure functions with no side effects.

use crate::notes::NoteError;
use crate::storage::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 500 (Internal Server Error)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// `InvalidData` only comes from rows the storage layer cannot decode, so it
/// is a server fault rather than a client one.
///
/// # Examples
///
/// ```
/// use quicknotes_core::http_mapping::repository_error_to_status_code;
/// use quicknotes_core::storage::RepositoryError;
///
/// let error = RepositoryError::note_not_found(3);
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 500,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}

/// Maps a [`NoteError`] to an HTTP status code.
///
/// Every validation failure is a 422 (Unprocessable Entity).
pub fn note_error_to_status_code(error: &NoteError) -> u16 {
    match error {
        NoteError::EmptyTitle
        | NoteError::TitleTooLong
        | NoteError::EmptyContent
        | NoteError::ContentTooLong
        | NoteError::EmptyUpdate => 422,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::note_not_found(1);
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_connection_failed_maps_to_500() {
        let error = RepositoryError::ConnectionFailed("cannot open".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_query_failed_maps_to_500() {
        let error = RepositoryError::QueryFailed("database is locked".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_invalid_data_maps_to_500() {
        let error = RepositoryError::InvalidData("unparseable timestamp".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_validation_errors_map_to_422() {
        assert_eq!(note_error_to_status_code(&NoteError::EmptyUpdate), 422);
        assert_eq!(note_error_to_status_code(&NoteError::TitleTooLong), 422);
    }
}
