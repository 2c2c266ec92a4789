/// Authentication routes
///
/// # Endpoints
///
/// ```text
/// POST /auth/register   # Create account, returns token + public user
/// POST /auth/login      # Verify credentials, returns token + public user
/// GET  /auth/profile    # Caller's user record (behind the auth gate)
/// ```
///
/// Login failure is deliberately uniform: an unknown email and a wrong
/// password produce byte-identical responses, so the endpoint cannot be
/// used to probe which addresses are registered.

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use tareas_shared::auth::middleware::AuthUser;
use tareas_shared::auth::{jwt, jwt::Claims, password};
use tareas_shared::models::user::{CreateUser, User};

/// Minimum accepted password length, in characters
const MIN_PASSWORD_CHARS: usize = 6;

/// Registration request body
///
/// Fields are optional at the deserialization layer so that a missing
/// field yields the envelope's 400, not a framework rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Desired unique username
    pub username: Option<String>,

    /// Desired unique email
    pub email: Option<String>,

    /// Plaintext password, hashed before storage
    pub password: Option<String>,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Account email
    pub email: Option<String>,

    /// Plaintext password
    pub password: Option<String>,
}

/// Successful register/login response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Always true on this path
    pub success: bool,

    /// Outcome message
    pub message: String,

    /// Signed bearer token
    pub token: String,

    /// Public user record (no password hash)
    pub user: User,
}

/// Profile response
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// Always true on this path
    pub success: bool,

    /// Public user record (no password hash)
    pub user: User,
}

/// Registers a new user account
///
/// Validates presence of all three fields and the password length,
/// rejects duplicate username or email, hashes the password, stores the
/// user, and returns a freshly signed token alongside the public user.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let (username, email, plain) = match (req.username, req.email, req.password) {
        (Some(u), Some(e), Some(p)) => (u, e, p),
        _ => {
            return Err(ApiError::Validation(
                "Todos los campos son requeridos".to_string(),
            ))
        }
    };

    if plain.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ApiError::Validation(
            "La contraseña debe tener al menos 6 caracteres".to_string(),
        ));
    }

    if User::find_by_email_or_username(&state.db, &email, &username)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Usuario o email ya existe".to_string()));
    }

    let password_hash = password::hash_password(&plain)?;

    // The UNIQUE constraints close the race left open by the check
    // above; a violation here maps to the same conflict response.
    let user = User::create(
        &state.db,
        CreateUser {
            username,
            email,
            password_hash,
        },
    )
    .await?;

    let claims = Claims::new(user.id, &user.username, &user.email);
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    tracing::info!(user_id = user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            message: "Usuario registrado exitosamente".to_string(),
            token,
            user,
        }),
    ))
}

/// Authenticates a user and issues a token
///
/// Both failure modes (unknown email, wrong password) return the same
/// 401 body.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let (email, plain) = match (req.email, req.password) {
        (Some(e), Some(p)) => (e, p),
        _ => {
            return Err(ApiError::Validation(
                "Email y contraseña son requeridos".to_string(),
            ))
        }
    };

    let user = User::find_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Credenciales inválidas".to_string()))?;

    if !password::verify_password(&plain, &user.password_hash)? {
        return Err(ApiError::Unauthorized("Credenciales inválidas".to_string()));
    }

    let claims = Claims::new(user.id, &user.username, &user.email);
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    tracing::info!(user_id = user.id, "user logged in");

    Ok(Json(AuthResponse {
        success: true,
        message: "Login exitoso".to_string(),
        token,
        user,
    }))
}

/// Returns the authenticated caller's user record
///
/// The id comes from the validated token, never from the request. If
/// the account was deleted after the token was issued, this is a 404.
pub async fn profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<ProfileResponse>> {
    let user = User::find_by_id(&state.db, auth.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Usuario no encontrado".to_string()))?;

    Ok(Json(ProfileResponse {
        success: true,
        user,
    }))
}
