//! Error handling module for the club backend.
//!
//! One error type for the whole stack, mapped to HTTP status codes and a
//! JSON `{message}` body at the response boundary. Failures surface to the
//! caller on the same request; nothing is retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing or invalid credentials/token
    Unauthorized(String),
    /// Authenticated but the role lacks the required capability
    Forbidden(String),
    /// Resource not found
    NotFound(String),
    /// Missing or malformed required field
    Validation(String),
    /// Uniqueness violation on membership applications
    Duplicate(String),
    /// Database error
    Database(String),
    /// Media storage error
    Media(String),
    /// Internal server error
    Internal(String),
    /// Bad request
    BadRequest(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Duplicate(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Media(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the client-facing error message. Internal failures are reduced
    /// to a generic message; details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::Duplicate(msg)
            | AppError::BadRequest(msg) => msg.clone(),
            AppError::Database(_) => "Database error".to_string(),
            AppError::Media(_) => "Media storage error".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "forbidden: {}", msg),
            AppError::NotFound(msg) => write!(f, "not found: {}", msg),
            AppError::Validation(msg) => write!(f, "validation: {}", msg),
            AppError::Duplicate(msg) => write!(f, "duplicate: {}", msg),
            AppError::Database(msg) => write!(f, "database: {}", msg),
            AppError::Media(msg) => write!(f, "media: {}", msg),
            AppError::Internal(msg) => write!(f, "internal: {}", msg),
            AppError::BadRequest(msg) => write!(f, "bad request: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Media storage request error: {:?}", err);
        AppError::Media(err.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}
