//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use corretor_core::GraderError;
use serde::Serialize;

/// Application-level errors with HTTP status code mapping.
///
/// Bad input is the caller's problem (400); anything else that surfaces
/// here is an unexpected failure of the run (500).
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Internal(String),
}

impl From<GraderError> for AppError {
    fn from(e: GraderError) -> Self {
        AppError::Internal(e.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
