/// Database models
///
/// # Models
///
/// - `user`: user accounts and the credential store operations
/// - `task`: task records with owner-scoped CRUD and filtering
///
/// Every operation takes the pool explicitly; there is no global
/// database handle.
///
/// # Example
///
/// ```no_run
/// use tareas_shared::models::user::{CreateUser, User};
/// use tareas_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(&pool, CreateUser {
///     username: "ana".to_string(),
///     email: "ana@example.com".to_string(),
///     password_hash: "$argon2id$...".to_string(),
/// }).await?;
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
