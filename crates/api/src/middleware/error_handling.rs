//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint fails the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use qr_attendance_core::errors::AttendError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps `AttendError` and implements `IntoResponse`, so handlers
/// can return `Result<_, AppError>` and use `?` on domain results.
#[derive(Debug)]
pub struct AppError(pub AttendError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AttendError::Validation(_) => StatusCode::BAD_REQUEST,
            AttendError::Authorization(_) => StatusCode::FORBIDDEN,
            AttendError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AttendError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = ?self.0, "Request failed");
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl From<AttendError> for AppError {
    fn from(err: AttendError) -> Self {
        AppError(err)
    }
}

/// Wraps infrastructure failures as storage errors
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AttendError::Storage(err))
    }
}
