/// JWT token issuance and validation
///
/// Tokens are signed with HS256 and embed the caller identity
/// (user id, username, email). Tokens expire 24 hours after issuance
/// and are stateless: there is no server-side revocation list, so a
/// compromised token is only bounded by the expiry window.
///
/// # Example
///
/// ```
/// use tareas_shared::auth::jwt::{create_token, validate_token, Claims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let claims = Claims::new(7, "ana", "ana@example.com");
/// let token = create_token(&claims, "secret-key")?;
///
/// let validated = validate_token(&token, "secret-key")?;
/// assert_eq!(validated.id, 7);
/// assert_eq!(validated.email, "ana@example.com");
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime: 24 hours from issuance
pub const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Error type for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Failed to validate token (bad signature, malformed, tampered)
    #[error("Failed to validate token: {0}")]
    ValidationError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,
}

/// JWT claims carried by every issued token
///
/// # Claims
///
/// - `id`: user id (the subject)
/// - `username`, `email`: caller identity, echoed so protected handlers
///   do not need a user lookup just to know who is calling
/// - `iat`: issued at (Unix timestamp)
/// - `exp`: expiration (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub id: i64,

    /// Username at issuance time
    pub username: String,

    /// Email at issuance time
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates claims expiring [`TOKEN_LIFETIME_HOURS`] from now
    pub fn new(id: i64, username: &str, email: &str) -> Self {
        Self::with_expiration(id, username, email, Duration::hours(TOKEN_LIFETIME_HOURS))
    }

    /// Creates claims with a custom expiration offset from now
    ///
    /// A negative duration produces an already-expired token, which is
    /// useful for exercising the expiry path in tests.
    pub fn with_expiration(id: i64, username: &str, email: &str, expires_in: Duration) -> Self {
        let now = Utc::now();

        Self {
            id,
            username: username.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Signs claims into a JWT token string
///
/// # Errors
///
/// Returns `JwtError::CreateError` if encoding fails.
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Validates a token and extracts its claims
///
/// Verifies the HS256 signature and the `exp` claim. Any tampering,
/// wrong signing key, or expired token is rejected.
///
/// # Errors
///
/// - `JwtError::Expired` when the token is past its expiry
/// - `JwtError::ValidationError` for every other invalid token
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        _ => JwtError::ValidationError(format!("Token validation failed: {}", e)),
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let claims = Claims::new(42, "test", "test@example.com");

        assert_eq!(claims.id, 42);
        assert_eq!(claims.username, "test");
        assert_eq!(claims.email, "test@example.com");
        assert!(!claims.is_expired());
        // 24h window
        assert!(claims.exp - claims.iat == TOKEN_LIFETIME_HOURS * 3600);
    }

    #[test]
    fn test_create_and_validate_token() {
        let secret = "test-secret-key-at-least-32-bytes-long";

        let claims = Claims::new(7, "ana", "ana@example.com");
        let token = create_token(&claims, secret).expect("Should create token");

        let validated = validate_token(&token, secret).expect("Should validate token");
        assert_eq!(validated.id, 7);
        assert_eq!(validated.username, "ana");
        assert_eq!(validated.email, "ana@example.com");
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let claims = Claims::new(1, "test", "test@example.com");
        let token = create_token(&claims, "secret1").expect("Should create token");

        let result = validate_token(&token, "wrong-secret");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_tampered_token() {
        let claims = Claims::new(1, "test", "test@example.com");
        let token = create_token(&claims, "secret").expect("Should create token");

        // Flip part of the payload segment
        let mut tampered = token.clone();
        tampered.replace_range(20..24, "AAAA");

        assert!(validate_token(&tampered, "secret").is_err());
    }

    #[test]
    fn test_validate_expired_token() {
        let secret = "test-secret";

        // Expired 1 hour ago, well past the default validation leeway
        let claims =
            Claims::with_expiration(1, "test", "test@example.com", Duration::seconds(-3600));

        assert!(claims.is_expired());

        let token = create_token(&claims, secret).expect("Should create token");
        let result = validate_token(&token, secret);

        assert!(matches!(result, Err(JwtError::Expired)));
    }

    #[test]
    fn test_garbage_token() {
        assert!(validate_token("not-a-token", "secret").is_err());
        assert!(validate_token("", "secret").is_err());
    }
}
