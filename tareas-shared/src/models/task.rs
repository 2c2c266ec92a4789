/// Task model and owner-scoped repository operations
///
/// Tasks always belong to exactly one user. Every read and write here
/// is scoped by `user_id`: a task that exists but belongs to someone
/// else is indistinguishable from a task that does not exist, which is
/// how the ownership boundary stays leak-free.
///
/// Updates are full-field replaces, not merges: the caller supplies
/// every mutable field and omitted fields carry the creation defaults.
/// `fecha_creacion` is immutable after insert.
///
/// # Example
///
/// ```no_run
/// use tareas_shared::models::task::{Task, TaskData, TaskFilter};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool, owner: i64) -> Result<(), sqlx::Error> {
/// let task = Task::create(&pool, owner, TaskData {
///     titulo: "Comprar leche".to_string(),
///     ..Default::default()
/// }).await?;
///
/// let mine = Task::list_by_owner(&pool, owner, &TaskFilter::default()).await?;
/// assert!(mine.iter().any(|t| t.id == task.id));
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Task priority
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Prioridad {
    /// High priority
    Alta,

    /// Medium priority (default)
    #[default]
    Media,

    /// Low priority
    Baja,
}

impl Prioridad {
    /// String form as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Prioridad::Alta => "alta",
            Prioridad::Media => "media",
            Prioridad::Baja => "baja",
        }
    }

    /// Parses the wire/database form, `None` for unknown values
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "alta" => Some(Prioridad::Alta),
            "media" => Some(Prioridad::Media),
            "baja" => Some(Prioridad::Baja),
            _ => None,
        }
    }
}

/// Task status
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Estado {
    /// Not started yet (default)
    #[default]
    Pendiente,

    /// In progress
    #[serde(rename = "en progreso")]
    #[sqlx(rename = "en progreso")]
    EnProgreso,

    /// Done
    Hecha,
}

impl Estado {
    /// String form as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Estado::Pendiente => "pendiente",
            Estado::EnProgreso => "en progreso",
            Estado::Hecha => "hecha",
        }
    }

    /// Parses the wire/database form, `None` for unknown values
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pendiente" => Some(Estado::Pendiente),
            "en progreso" => Some(Estado::EnProgreso),
            "hecha" => Some(Estado::Hecha),
            _ => None,
        }
    }
}

/// Task record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task id
    pub id: i64,

    /// Owning user id
    pub user_id: i64,

    /// Title, non-empty after trimming
    pub titulo: String,

    /// Description, empty by default
    pub descripcion: String,

    /// Priority
    pub prioridad: Prioridad,

    /// Status
    pub estado: Estado,

    /// When the task was created; never altered after insert
    #[serde(rename = "fechaCreacion")]
    pub fecha_creacion: DateTime<Utc>,

    /// Optional due date
    #[serde(rename = "fechaLimite")]
    pub fecha_limite: Option<DateTime<Utc>>,

    /// Completion flag
    pub completada: bool,

    /// When the task was completed, if it was
    #[serde(rename = "fechaCompletada")]
    pub fecha_completada: Option<DateTime<Utc>>,

    /// Free-form category, "general" by default
    pub categoria: String,

    /// Optional comma-separated tags
    pub etiquetas: Option<String>,

    /// Optional reminder timestamp
    pub recordatorio: Option<DateTime<Utc>>,

    /// When the task was last mutated
    pub updated_at: DateTime<Utc>,
}

/// Full set of mutable task fields
///
/// Used both for creation and for full-replace updates; defaults match
/// the creation defaults, so an update built from a partial request
/// resets omitted fields instead of preserving them.
#[derive(Debug, Clone, Default)]
pub struct TaskData {
    /// Title
    pub titulo: String,

    /// Description
    pub descripcion: String,

    /// Priority (defaults to media)
    pub prioridad: Prioridad,

    /// Status (defaults to pendiente)
    pub estado: Estado,

    /// Optional due date
    pub fecha_limite: Option<DateTime<Utc>>,
}

/// Optional list filters, combined with AND
///
/// Values are matched exactly against the stored strings; an unknown
/// value simply matches nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFilter {
    /// Filter by status
    pub estado: Option<String>,

    /// Filter by priority
    pub prioridad: Option<String>,
}

const TASK_COLUMNS: &str = "id, user_id, titulo, descripcion, prioridad, estado, \
     fecha_creacion, fecha_limite, completada, fecha_completada, categoria, \
     etiquetas, recordatorio, updated_at";

impl Task {
    /// Creates a task owned by `owner_id`
    ///
    /// Sets `fecha_creacion = updated_at = now` and leaves the
    /// completion fields, category, tags, and reminder at their schema
    /// defaults. Returns the row re-read from storage so the caller
    /// gets the generated id and materialized defaults.
    pub async fn create(
        pool: &SqlitePool,
        owner_id: i64,
        data: TaskData,
    ) -> Result<Self, sqlx::Error> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO tasks (user_id, titulo, descripcion, prioridad, estado,
                               fecha_creacion, fecha_limite, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(owner_id)
        .bind(&data.titulo)
        .bind(&data.descripcion)
        .bind(data.prioridad)
        .bind(data.estado)
        .bind(now)
        .bind(data.fecha_limite)
        .bind(now)
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();

        Self::find_by_id_and_owner(pool, id, owner_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Lists the owner's tasks, most recently created first
    ///
    /// Both filters are optional and combined with AND. An empty result
    /// is a normal outcome, not an error.
    pub async fn list_by_owner(
        pool: &SqlitePool,
        owner_id: i64,
        filter: &TaskFilter,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let mut sql = format!("SELECT {} FROM tasks WHERE user_id = ?", TASK_COLUMNS);

        if filter.estado.is_some() {
            sql.push_str(" AND estado = ?");
        }
        if filter.prioridad.is_some() {
            sql.push_str(" AND prioridad = ?");
        }
        sql.push_str(" ORDER BY fecha_creacion DESC");

        let mut query = sqlx::query_as::<_, Task>(&sql).bind(owner_id);

        if let Some(estado) = &filter.estado {
            query = query.bind(estado.as_str());
        }
        if let Some(prioridad) = &filter.prioridad {
            query = query.bind(prioridad.as_str());
        }

        query.fetch_all(pool).await
    }

    /// Finds a task by id, scoped to its owner
    ///
    /// Returns `None` both when the id does not exist and when it
    /// belongs to a different user.
    pub async fn find_by_id_and_owner(
        pool: &SqlitePool,
        id: i64,
        owner_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM tasks WHERE id = ? AND user_id = ?",
            TASK_COLUMNS
        );

        sqlx::query_as::<_, Task>(&sql)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Replaces every mutable field of a task
    ///
    /// Refreshes `updated_at`; `fecha_creacion` and the completion
    /// fields are untouched. Returns `None` when no row matched the
    /// id + owner pair, otherwise the updated row re-read from storage.
    pub async fn update(
        pool: &SqlitePool,
        owner_id: i64,
        id: i64,
        data: TaskData,
    ) -> Result<Option<Self>, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET titulo = ?, descripcion = ?, prioridad = ?, estado = ?,
                fecha_limite = ?, updated_at = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(&data.titulo)
        .bind(&data.descripcion)
        .bind(data.prioridad)
        .bind(data.estado)
        .bind(data.fecha_limite)
        .bind(Utc::now())
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Self::find_by_id_and_owner(pool, id, owner_id).await
    }

    /// Deletes a task by id, scoped to its owner
    ///
    /// Returns `false` when no row matched (absent or not owned).
    pub async fn delete(pool: &SqlitePool, owner_id: i64, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
