//! Unified error handling
//!
//! [`AppError`] is what handlers return; it renders as a JSON envelope
//! with a stable error code:
//!
//! ```json
//! {
//!   "code": "E0004",
//!   "message": "Guest with name Jon Snow already exists"
//! }
//! ```
//!
//! # Error codes
//!
//! | Code | Status | Meaning |
//! |------|--------|-------------------|
//! | E0002 | 400 | Validation failed |
//! | E0003 | 404 | Not found |
//! | E0004 | 409 | Conflict |
//! | E0005 | 400 | Capacity exceeded |
//! | E9001 | 500 | Internal error |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::admission::AdmissionError;

/// Unified API error envelope
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// Error code (E0000 means success)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    /// Malformed or invalid request (400)
    Validation(String),

    #[error("Resource not found: {0}")]
    /// Referenced table or guest does not exist (404)
    NotFound(String),

    #[error("Resource already exists: {0}")]
    /// Guest already booked or table id taken (409)
    Conflict(String),

    #[error("Capacity exceeded: {0}")]
    /// Admission would overflow a table (400)
    CapacityExceeded(String),

    #[error("Internal server error: {0}")]
    /// Unexpected failure (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.as_str()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.as_str()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E0004", msg.as_str()),
            AppError::CapacityExceeded(msg) => (StatusCode::BAD_REQUEST, "E0005", msg.as_str()),
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error",
                )
            }
        };

        let body = Json(AppResponse::<()> {
            code: code.to_string(),
            message: message.to_string(),
            data: None,
        });

        (status, body).into_response()
    }
}

impl From<AdmissionError> for AppError {
    fn from(err: AdmissionError) -> Self {
        let message = err.to_string();
        match err {
            AdmissionError::PartyTooLarge(_) => AppError::Validation(message),
            AdmissionError::AlreadyBooked(_) | AdmissionError::TableExists(_) => {
                AppError::Conflict(message)
            }
            AdmissionError::NoSuchTable(_)
            | AdmissionError::TableNotFound(_)
            | AdmissionError::NotBooked(_)
            | AdmissionError::NotArrived(_) => AppError::NotFound(message),
            AdmissionError::NoFreeSpace(_) | AdmissionError::NoAvailableSpace { .. } => {
                AppError::CapacityExceeded(message)
            }
            AdmissionError::Inconsistency(_) => AppError::Internal(message),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// Result type for API handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admission_errors_map_to_their_category() {
        let validation: AppError = AdmissionError::PartyTooLarge(u32::MAX).into();
        assert!(matches!(validation, AppError::Validation(_)));

        let conflict: AppError = AdmissionError::AlreadyBooked("Jon Snow".into()).into();
        assert!(matches!(conflict, AppError::Conflict(_)));

        let not_found: AppError = AdmissionError::NotBooked("Ghost".into()).into();
        assert!(matches!(not_found, AppError::NotFound(_)));

        let capacity: AppError = AdmissionError::NoFreeSpace(1).into();
        assert!(matches!(capacity, AppError::CapacityExceeded(_)));

        let internal: AppError = AdmissionError::Inconsistency("gone".into()).into();
        assert!(matches!(internal, AppError::Internal(_)));
    }
}
