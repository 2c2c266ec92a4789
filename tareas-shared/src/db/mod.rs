/// Database layer
///
/// # Modules
///
/// - `pool`: SQLite connection pool with foreign keys enabled
/// - `migrations`: idempotent schema initialization
///
/// # Example
///
/// ```no_run
/// use tareas_shared::db::migrations::init_schema;
/// use tareas_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pool = create_pool(DatabaseConfig::default()).await?;
///     init_schema(&pool).await?;
///     Ok(())
/// }
/// ```

pub mod migrations;
pub mod pool;
