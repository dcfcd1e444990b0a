use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use quicknotes_core::http_mapping::{note_error_to_status_code, repository_error_to_status_code};
use quicknotes_core::notes::NoteError;
use quicknotes_core::storage::RepositoryError;

/// A request the extractors could not decode (bad JSON, non-integer id).
#[derive(Debug, Error)]
#[error("{0}")]
pub struct InvalidRequest(pub String);

/// Application error type that wraps `anyhow::Error`.
///
/// The status code is picked by downcasting to the core error types;
/// anything unrecognized is a 500. The body is `{"detail": "<message>"}`.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(repo_error)
        } else if let Some(note_error) = self.0.downcast_ref::<NoteError>() {
            note_error_to_status_code(note_error)
        } else if self.0.is::<InvalidRequest>() {
            422
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self.0, "Request rejected");
        }

        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn detail(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        json["detail"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = AppError::from(RepositoryError::note_not_found(4)).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(detail(response).await, "Note not found: 4");
    }

    #[tokio::test]
    async fn test_validation_response() {
        let response = AppError::from(NoteError::EmptyUpdate).into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            detail(response).await,
            "At least one of 'title' or 'content' must be provided"
        );
    }

    #[tokio::test]
    async fn test_invalid_request_response() {
        let response = AppError::from(InvalidRequest("bad body".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_storage_failure_response() {
        let error = RepositoryError::QueryFailed("disk I/O error".to_string());
        let response = AppError::from(error).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail(response).await, "Query failed: disk I/O error");
    }

    #[tokio::test]
    async fn test_unknown_error_is_500() {
        let response = AppError::from(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
