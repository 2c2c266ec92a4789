/// Error handling for the API server
///
/// Provides a unified error type that maps to HTTP responses. All
/// handlers return `Result<T, ApiError>`, which converts automatically
/// into the response envelope `{ "success": false, "error": "..." }`.
///
/// Internal errors are logged server-side and replaced with a generic
/// message; no storage detail ever reaches a client. Authentication
/// gate rejections (401/403 with empty bodies) are handled separately
/// by `tareas_shared::auth::middleware::AuthError` and never pass
/// through this type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed input (400)
    Validation(String),

    /// Invalid credentials at login (401)
    Unauthorized(String),

    /// Record absent or not owned by the caller (404)
    NotFound(String),

    /// Duplicate identity at registration (400, as the reference API
    /// reports conflicts)
    Conflict(String),

    /// Storage or other unexpected failure (500)
    Internal(String),
}

/// Failure response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false on the error path
    pub success: bool,

    /// Short human-readable error message
    pub error: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                // Log the cause, reply with a generic message
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error: message,
        });

        (status, body).into_response()
    }
}

/// Converts sqlx errors to API errors
///
/// A unique-constraint violation means two registrations raced past the
/// duplicate check; it maps to the same conflict response the check
/// itself produces. Everything else is an internal error.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Recurso no encontrado".to_string()),
            sqlx::Error::Database(db_err)
                if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                ApiError::Conflict("Usuario o email ya existe".to_string())
            }
            other => ApiError::Internal(format!("Database error: {}", other)),
        }
    }
}

/// Converts password hashing errors to API errors
impl From<tareas_shared::auth::password::PasswordError> for ApiError {
    fn from(err: tareas_shared::auth::password::PasswordError) -> Self {
        ApiError::Internal(format!("Password operation failed: {}", err))
    }
}

/// Converts token issuance errors to API errors
impl From<tareas_shared::auth::jwt::JwtError> for ApiError {
    fn from(err: tareas_shared::auth::jwt::JwtError) -> Self {
        ApiError::Internal(format!("Token operation failed: {}", err))
    }
}
