/// Error types for Brand Service
///
/// Store failures keep their kind (validation, database, serialization) so the
/// HTTP layer could discriminate later; today only not-found is surfaced as a
/// distinct status.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for brand-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation failed (missing required field, malformed identifier)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Serializing a stored record failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        // Not-found is the only outcome clients can distinguish; every other
        // failure is a 500 with the underlying message.
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Database(_) | AppError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
