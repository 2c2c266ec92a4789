/// Health endpoint
///
/// # Endpoint
///
/// ```text
/// GET /
/// ```
///
/// Always answers 200 with a small status payload; the `database` field
/// reports connectivity without failing the request.

use crate::app::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Health response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always true
    pub success: bool,

    /// Service banner
    pub message: String,

    /// Application version
    pub version: String,

    /// Database status ("connected" / "disconnected")
    pub database: String,
}

/// Health handler
pub async fn index(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").fetch_one(&state.db).await {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };

    Json(HealthResponse {
        success: true,
        message: "API de Gestión de Tareas funcionando".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    })
}
