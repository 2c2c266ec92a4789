/// Auth context and rejection types for the request gate
///
/// The actual Axum middleware layer lives in the API crate (it needs the
/// application state for the signing secret); this module provides the
/// pieces it works with: the [`AuthUser`] context inserted into request
/// extensions after a token validates, and the [`AuthError`] rejection.
///
/// # Rejection contract
///
/// The gate is a pure identity boundary and runs before any handler
/// logic, so its rejections deliberately carry no JSON envelope:
///
/// - Missing or unparseable credential → `401 Unauthorized`, empty body
/// - Credential present but invalid or expired → `403 Forbidden`, empty body
///
/// # Example
///
/// ```
/// use axum::Extension;
/// use tareas_shared::auth::middleware::AuthUser;
///
/// async fn handler(Extension(auth): Extension<AuthUser>) -> String {
///     format!("Hola, {} ({})", auth.username, auth.id)
/// }
/// ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::jwt::Claims;

/// Authenticated caller identity, added to request extensions
///
/// Handlers on protected routes extract this with Axum's `Extension`
/// extractor. Its presence means the bearer token already validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// Authenticated user id
    pub id: i64,

    /// Username from the token claims
    pub username: String,

    /// Email from the token claims
    pub email: String,
}

impl AuthUser {
    /// Creates the auth context from validated token claims
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            id: claims.id,
            username: claims.username,
            email: claims.email,
        }
    }
}

/// Rejection produced by the authentication gate
#[derive(Debug)]
pub enum AuthError {
    /// No bearer credential in the Authorization header
    MissingCredentials,

    /// Credential present but signature, format, or expiry check failed
    InvalidToken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::MissingCredentials => StatusCode::UNAUTHORIZED.into_response(),
            AuthError::InvalidToken(msg) => {
                tracing::debug!("Rejected bearer token: {}", msg);
                StatusCode::FORBIDDEN.into_response()
            }
        }
    }
}
