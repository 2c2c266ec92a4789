/// Application state and router builder
///
/// Defines the shared application state and builds the Axum router with
/// all routes and middleware, including the authentication gate applied
/// to every protected route.
///
/// # Example
///
/// ```no_run
/// use tareas_api::{app::AppState, config::Config};
/// use tareas_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     max_connections: config.database.max_connections,
///     ..Default::default()
/// }).await?;
/// let state = AppState::new(pool, config);
/// let app = tareas_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use crate::error::ErrorResponse;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
    routing::get,
    routing::post,
    Json, Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tareas_shared::auth::{
    jwt,
    middleware::{AuthError, AuthUser},
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets the JWT signing secret
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router
///
/// # Routes
///
/// ```text
/// /
/// ├── GET  /                 # Health payload (public)
/// ├── /auth
/// │   ├── POST /register     # Create account (public)
/// │   ├── POST /login        # Obtain token (public)
/// │   └── GET  /profile      # Caller's user record (bearer token)
/// └── /tasks                 # All bearer token
///     ├── GET    /           # List with optional estado/prioridad filters
///     ├── POST   /           # Create
///     ├── GET    /:id        # Fetch one
///     ├── PUT    /:id        # Full-replace update
///     └── DELETE /:id        # Delete
/// ```
///
/// Unmatched routes fall through to a JSON 404. CORS is wide open, as
/// in the reference deployment.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Public auth routes
    let auth_public = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login));

    // Profile requires a validated token
    let auth_protected = Router::new()
        .route("/profile", get(routes::auth::profile))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_gate,
        ));

    // Task routes are owner-scoped and all protected
    let task_routes = Router::new()
        .route(
            "/",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/:id",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_gate,
        ));

    Router::new()
        .route("/", get(routes::health::index))
        .nest("/auth", auth_public.merge(auth_protected))
        .nest("/tasks", task_routes)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Authentication gate for protected routes
///
/// Runs before any handler logic, so an authentication failure always
/// wins over a body validation failure. Rules, in order:
///
/// 1. No parseable `Authorization: Bearer <token>` credential → 401
/// 2. Token invalid or expired → 403
/// 3. Otherwise the resolved [`AuthUser`] goes into request extensions
///    and the handler runs
async fn auth_gate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingCredentials)?;

    let claims = jwt::validate_token(token, state.jwt_secret())
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    req.extensions_mut().insert(AuthUser::from_claims(claims));

    Ok(next.run(req).await)
}

/// Fallback for unmatched routes
async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            error: "Ruta no encontrada".to_string(),
        }),
    )
}
