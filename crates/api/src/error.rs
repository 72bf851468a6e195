use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use brinquedos_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for store
/// failures. Not-found outcomes render as a bare 404; everything else as a
/// sanitized JSON 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `brinquedos_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Resource not found");
                StatusCode::NOT_FOUND.into_response()
            }
            // An overwrite whose row vanished after the existence check.
            AppError::Database(sqlx::Error::RowNotFound) => {
                tracing::debug!("Row disappeared before write");
                StatusCode::NOT_FOUND.into_response()
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                let body = json!({
                    "error": "An internal error occurred",
                    "code": "INTERNAL_ERROR",
                });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
