/// User model and credential store operations
///
/// Users are identified by a numeric autoincrement id. Username and
/// email are both unique; email is the login key. The password hash is
/// excluded from serialization, so it can never leak into a response
/// body even when the full model is returned.
///
/// # Example
///
/// ```no_run
/// use tareas_shared::models::user::{CreateUser, User};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let user = User::create(&pool, CreateUser {
///     username: "ana".to_string(),
///     email: "ana@example.com".to_string(),
///     password_hash: "$argon2id$...".to_string(),
/// }).await?;
///
/// let found = User::find_by_email(&pool, "ana@example.com").await?;
/// assert!(found.is_some());
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user id
    pub id: i64,

    /// Unique username
    pub username: String,

    /// Unique email address, used as login key
    pub email: String,

    /// Argon2id password hash; never serialized into responses
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Avatar URL, empty by default
    pub avatar_url: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Unique username
    pub username: String,

    /// Unique email address
    pub email: String,

    /// Argon2id password hash (never the plaintext password)
    pub password_hash: String,
}

impl User {
    /// Creates a new user
    ///
    /// Timestamps are set to now; the avatar defaults to empty.
    ///
    /// # Errors
    ///
    /// Returns a database error on failure; a UNIQUE violation on
    /// username or email surfaces here when two registrations race past
    /// the existence check.
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash, avatar_url, created_at, updated_at)
            VALUES (?, ?, ?, '', ?, ?)
            "#,
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Finds a user by id
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, avatar_url, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Finds a user by email (login lookup)
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, avatar_url, created_at, updated_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Finds a user matching either the email or the username
    ///
    /// Used by registration to detect a duplicate identity before
    /// inserting. The check and the insert are separate statements, so
    /// the UNIQUE constraints remain the authoritative guard.
    pub async fn find_by_email_or_username(
        pool: &SqlitePool,
        email: &str,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, avatar_url, created_at, updated_at
            FROM users
            WHERE email = ? OR username = ?
            "#,
        )
        .bind(email)
        .bind(username)
        .fetch_optional(pool)
        .await
    }

    /// Deletes a user
    ///
    /// Owned tasks are removed by the cascading foreign key.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
