/// Authentication utilities
///
/// This module provides the authentication primitives for the tareas API:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: JWT token issuance and validation (HS256, 24 hour expiry)
/// - [`middleware`]: Auth context and rejection types for the request gate
///
/// # Example
///
/// ```no_run
/// use tareas_shared::auth::password::{hash_password, verify_password};
/// use tareas_shared::auth::jwt::{create_token, validate_token, Claims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// let claims = Claims::new(1, "ana", "ana@example.com");
/// let token = create_token(&claims, "secret-key")?;
/// let validated = validate_token(&token, "secret-key")?;
/// assert_eq!(validated.id, 1);
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod middleware;
pub mod password;
