use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use orgbot_core::error::CoreError;

use crate::response::StatusResponse;

/// Application-level error type for HTTP handlers.
///
/// Every failure leaves the server as a [`StatusResponse`] body whose
/// `statusCode` matches the HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `orgbot_core`. Its message is client-facing.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx. Logged, never shown to the client.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status and client-facing message for this error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(CoreError::NotFound { entity, .. }) => {
                (StatusCode::NOT_FOUND, format!("{entity} not found."))
            }
            AppError::Core(CoreError::Unauthorized(msg)) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Core(CoreError::Internal(msg)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Domain errors are logged where they are raised.
        if let AppError::Database(err) = &self {
            tracing::error!(error = %err, "Database error");
        }

        let (status, message) = self.status_and_message();
        (status, axum::Json(StatusResponse::error(status, message))).into_response()
    }
}
