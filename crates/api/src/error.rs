use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hbnb_core::error::CoreError;
use hbnb_db::StorageError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StorageError`] for backend
/// failures. Implements [`IntoResponse`] to produce `{"error": ...}` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `hbnb_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure inside the storage adapter.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        AppError::Core(CoreError::not_found(entity, id))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::Core(CoreError::BadRequest(message.into()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(%entity, %id, "Resource not found");
                    (StatusCode::NOT_FOUND, "Not found".to_string())
                }
                CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage error");
                internal()
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}
