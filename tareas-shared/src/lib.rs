//! # Tareas Shared Library
//!
//! This crate contains shared types and business logic used by the tareas
//! API server: authentication primitives, the database layer, and the
//! persistence models.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their owner-scoped CRUD operations
//! - `auth`: Password hashing, JWT issuance/validation, auth context
//! - `db`: Connection pool and schema initialization

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the tareas shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
