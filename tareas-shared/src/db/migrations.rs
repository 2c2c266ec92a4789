/// Schema initialization
///
/// The schema is created in place with idempotent `CREATE TABLE IF NOT
/// EXISTS` statements at startup, so a fresh database file (or an
/// in-memory test database) is usable immediately.
///
/// # Schema
///
/// Two tables: `users` and `tasks`, with a cascading foreign key from
/// tasks to their owning user. Deleting a user deletes all their tasks.
/// Timestamps are bound from the application as RFC 3339 text.
///
/// # Example
///
/// ```no_run
/// use tareas_shared::db::migrations::init_schema;
/// use tareas_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// init_schema(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::SqlitePool;
use tracing::info;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    email TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL,
    avatar_url TEXT NOT NULL DEFAULT '',
    created_at DATETIME NOT NULL,
    updated_at DATETIME NOT NULL
)
"#;

const CREATE_TASKS: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    titulo TEXT NOT NULL,
    descripcion TEXT NOT NULL DEFAULT '',
    prioridad TEXT CHECK(prioridad IN ('alta', 'media', 'baja')) NOT NULL DEFAULT 'media',
    estado TEXT CHECK(estado IN ('pendiente', 'en progreso', 'hecha')) NOT NULL DEFAULT 'pendiente',
    fecha_creacion DATETIME NOT NULL,
    fecha_limite DATETIME,
    completada INTEGER NOT NULL DEFAULT 0,
    fecha_completada DATETIME,
    categoria TEXT NOT NULL DEFAULT 'general',
    etiquetas TEXT,
    recordatorio DATETIME,
    updated_at DATETIME NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
)
"#;

const CREATE_INDEXES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS idx_tasks_user_id ON tasks(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_tasks_estado ON tasks(estado)",
    "CREATE INDEX IF NOT EXISTS idx_tasks_prioridad ON tasks(prioridad)",
];

/// Creates the tables and indexes if they do not exist yet
///
/// Safe to run on every startup.
///
/// # Errors
///
/// Returns an error if any DDL statement fails.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Initializing database schema");

    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_TASKS).execute(pool).await?;

    for stmt in CREATE_INDEXES {
        sqlx::query(stmt).execute(pool).await?;
    }

    info!("Database schema ready");
    Ok(())
}
