/// API route handlers
///
/// Handlers are thin orchestration: validate input, call the model
/// operation scoped to the authenticated caller, and map the result
/// into the response envelope.
///
/// - `health`: root health payload
/// - `auth`: registration, login, profile
/// - `tasks`: owner-scoped task CRUD

pub mod auth;
pub mod health;
pub mod tasks;
