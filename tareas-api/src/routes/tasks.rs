/// Task routes
///
/// # Endpoints
///
/// ```text
/// GET    /tasks          # List caller's tasks (optional estado/prioridad)
/// POST   /tasks          # Create
/// GET    /tasks/:id      # Fetch one
/// PUT    /tasks/:id      # Full-replace update
/// DELETE /tasks/:id      # Delete
/// ```
///
/// Every handler reads the owner id from the [`AuthUser`] extension
/// placed there by the auth gate; a task id from another user's
/// collection behaves exactly like an id that does not exist.

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tareas_shared::auth::middleware::AuthUser;
use tareas_shared::models::task::{Estado, Prioridad, Task, TaskData, TaskFilter};

/// Task request body, shared by create and update
///
/// Everything is optional at the deserialization layer; create and
/// update apply their own presence rules on top.
#[derive(Debug, Deserialize)]
pub struct TaskInput {
    /// Title
    pub titulo: Option<String>,

    /// Description
    pub descripcion: Option<String>,

    /// Priority: alta, media, baja
    pub prioridad: Option<String>,

    /// Status: pendiente, en progreso, hecha
    pub estado: Option<String>,

    /// Optional due date
    #[serde(rename = "fechaLimite")]
    pub fecha_limite: Option<DateTime<Utc>>,
}

/// Task list response
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    /// Always true on this path
    pub success: bool,

    /// Caller's tasks, most recently created first
    pub tasks: Vec<Task>,

    /// Number of tasks returned
    pub total: usize,
}

/// Single-task response
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    /// Always true on this path
    pub success: bool,

    /// Outcome message, present on mutations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The task
    pub task: Task,
}

/// Deletion response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Always true on this path
    pub success: bool,

    /// Outcome message
    pub message: String,
}

/// Parses the task id from the request path
///
/// A non-numeric id can never match a stored task, so it behaves like
/// an id that does not exist rather than a framework-level rejection.
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse()
        .map_err(|_| ApiError::NotFound("Tarea no encontrada".to_string()))
}

/// Resolves the enum fields shared by create and update
///
/// An absent value falls back to the default; a present but unknown
/// value is a validation error, never a silent default.
fn resolve_fields(input: &TaskInput) -> ApiResult<(Prioridad, Estado)> {
    let prioridad = match &input.prioridad {
        Some(s) => {
            Prioridad::parse(s).ok_or_else(|| ApiError::Validation("Prioridad inválida".to_string()))?
        }
        None => Prioridad::default(),
    };

    let estado = match &input.estado {
        Some(s) => {
            Estado::parse(s).ok_or_else(|| ApiError::Validation("Estado inválido".to_string()))?
        }
        None => Estado::default(),
    };

    Ok((prioridad, estado))
}

/// Lists the caller's tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(filter): Query<TaskFilter>,
) -> ApiResult<Json<TaskListResponse>> {
    let tasks = Task::list_by_owner(&state.db, auth.id, &filter).await?;
    let total = tasks.len();

    Ok(Json(TaskListResponse {
        success: true,
        tasks,
        total,
    }))
}

/// Creates a task owned by the caller
///
/// The title must be non-empty after trimming; priority and status
/// default to media/pendiente when omitted.
pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(input): Json<TaskInput>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let titulo = input
        .titulo
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Validation("El título es requerido".to_string()))?
        .to_string();

    let (prioridad, estado) = resolve_fields(&input)?;

    let task = Task::create(
        &state.db,
        auth.id,
        TaskData {
            titulo,
            descripcion: input.descripcion.clone().unwrap_or_default(),
            prioridad,
            estado,
            fecha_limite: input.fecha_limite,
        },
    )
    .await?;

    tracing::debug!(user_id = auth.id, task_id = task.id, "task created");

    Ok((
        StatusCode::CREATED,
        Json(TaskResponse {
            success: true,
            message: Some("Tarea creada exitosamente".to_string()),
            task,
        }),
    ))
}

/// Fetches one of the caller's tasks
pub async fn get_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let id = parse_id(&id)?;

    let task = Task::find_by_id_and_owner(&state.db, id, auth.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tarea no encontrada".to_string()))?;

    Ok(Json(TaskResponse {
        success: true,
        message: None,
        task,
    }))
}

/// Replaces every mutable field of one of the caller's tasks
///
/// Omitted fields reset to the creation defaults rather than keeping
/// their stored values. Unlike create, an omitted or empty title is
/// accepted and stored as-is.
pub async fn update_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(input): Json<TaskInput>,
) -> ApiResult<Json<TaskResponse>> {
    let id = parse_id(&id)?;
    let (prioridad, estado) = resolve_fields(&input)?;

    let data = TaskData {
        titulo: input.titulo.clone().unwrap_or_default(),
        descripcion: input.descripcion.clone().unwrap_or_default(),
        prioridad,
        estado,
        fecha_limite: input.fecha_limite,
    };

    let task = Task::update(&state.db, auth.id, id, data)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tarea no encontrada".to_string()))?;

    tracing::debug!(user_id = auth.id, task_id = task.id, "task updated");

    Ok(Json(TaskResponse {
        success: true,
        message: Some("Tarea actualizada exitosamente".to_string()),
        task,
    }))
}

/// Deletes one of the caller's tasks
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_id(&id)?;
    let deleted = Task::delete(&state.db, auth.id, id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Tarea no encontrada".to_string()));
    }

    tracing::debug!(user_id = auth.id, task_id = id, "task deleted");

    Ok(Json(DeleteResponse {
        success: true,
        message: "Tarea eliminada exitosamente".to_string(),
    }))
}
