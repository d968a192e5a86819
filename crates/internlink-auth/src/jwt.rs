//! Session token service.
//!
//! Tokens are HS256 JWTs signed with the single secret held in
//! [`JwtConfig`]. They are never stored server-side: a token is valid as
//! long as its signature checks out and its `exp` (when present) lies in
//! the future. Logging out only clears the cookie.
//!
//! Expiry is checked here rather than by `jsonwebtoken`, against an
//! explicit `now`, so that tokens without `exp` are accepted and tests
//! can move the clock.
//!
//! # Example
//!
//! ```ignore
//! use internlink_auth::{Role, TokenExpiry, issue_token, verify_token_at};
//!
//! let token = issue_token("company@acme.io", Role::Company, TokenExpiry::After(60), &config, now)?;
//! let claims = verify_token_at(&token, &config, now + 30)?;
//! assert!(verify_token_at(&token, &config, now + 61).is_err());
//! ```

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use internlink_config::JwtConfig;
use internlink_core::AppError;

use crate::claims::Claims;
use crate::role::Role;

/// How long an issued token stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenExpiry {
    Never,
    After(i64),
}

impl TokenExpiry {
    /// Expiry configured for sessions of `role`.
    pub fn for_role(role: Role, config: &JwtConfig) -> Self {
        match role {
            Role::Student if !config.student_tokens_expire => TokenExpiry::Never,
            _ => TokenExpiry::After(config.session_ttl),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Session expired")]
    Expired,
    /// Malformed, forged or signed with another secret.
    #[error("Invalid session token")]
    Invalid,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::unauthorized(err)
    }
}

/// Issues a session token for `subject` at the Unix time `now`.
///
/// # Errors
///
/// Returns an internal [`AppError`] if encoding fails.
pub fn issue_token(
    subject: &str,
    role: Role,
    expiry: TokenExpiry,
    jwt_config: &JwtConfig,
    now: i64,
) -> Result<String, AppError> {
    let exp = match expiry {
        TokenExpiry::Never => None,
        TokenExpiry::After(secs) => Some(now.saturating_add(secs)),
    };

    let claims = Claims {
        sub: subject.to_string(),
        role,
        iat: now,
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Issues a token for a fresh login, with the expiry configured for `role`.
pub fn create_session_token(
    subject: &str,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    issue_token(
        subject,
        role,
        TokenExpiry::for_role(role, jwt_config),
        jwt_config,
        Utc::now().timestamp(),
    )
}

/// Verifies a token's signature and expiry at the Unix time `now`.
pub fn verify_token_at(token: &str, jwt_config: &JwtConfig, now: i64) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| TokenError::Invalid)?;

    match claims.exp {
        Some(exp) if exp <= now => Err(TokenError::Expired),
        _ => Ok(claims),
    }
}

pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    verify_token_at(token, jwt_config, Utc::now().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            session_ttl: 3600,
            student_tokens_expire: false,
        }
    }

    #[test]
    fn test_round_trip_for_every_role() {
        let config = config();
        for role in Role::ALL {
            let expiry = TokenExpiry::for_role(role, &config);
            let token = issue_token("someone@uni.edu", role, expiry, &config, NOW).unwrap();
            let claims = verify_token_at(&token, &config, NOW + 10).unwrap();
            assert_eq!(claims.sub, "someone@uni.edu");
            assert_eq!(claims.role, role);
            assert_eq!(claims.iat, NOW);
        }
    }

    #[test]
    fn test_non_student_tokens_expire_after_ttl() {
        let config = config();
        for role in [Role::Admin, Role::Supervisor, Role::Company] {
            let token =
                issue_token("x@uni.edu", role, TokenExpiry::for_role(role, &config), &config, NOW)
                    .unwrap();
            assert!(verify_token_at(&token, &config, NOW + 3599).is_ok());
            assert_eq!(
                verify_token_at(&token, &config, NOW + 3600),
                Err(TokenError::Expired)
            );
        }
    }

    #[test]
    fn test_student_tokens_never_expire_by_default() {
        let config = config();
        assert_eq!(TokenExpiry::for_role(Role::Student, &config), TokenExpiry::Never);

        let token = issue_token("s@uni.edu", Role::Student, TokenExpiry::Never, &config, NOW)
            .unwrap();
        let claims = verify_token_at(&token, &config, NOW + 10 * 365 * 24 * 3600).unwrap();
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn test_student_tokens_expire_when_configured() {
        let config = JwtConfig {
            student_tokens_expire: true,
            ..config()
        };
        assert_eq!(
            TokenExpiry::for_role(Role::Student, &config),
            TokenExpiry::After(3600)
        );
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = issue_token("a@uni.edu", Role::Admin, TokenExpiry::After(60), &config(), NOW)
            .unwrap();
        let other = JwtConfig {
            secret: "another-secret".to_string(),
            ..config()
        };
        assert_eq!(verify_token_at(&token, &other, NOW), Err(TokenError::Invalid));
    }

    #[test]
    fn test_malformed_tokens_are_invalid() {
        let config = config();
        for token in ["", "garbage", "a.b.c", "eyJhbGciOiJIUzI1NiJ9.e30.sig"] {
            assert_eq!(verify_token_at(token, &config, NOW), Err(TokenError::Invalid));
        }
    }

    #[test]
    fn test_tampered_payload_is_invalid() {
        let config = config();
        let token = issue_token("a@uni.edu", Role::Student, TokenExpiry::Never, &config, NOW)
            .unwrap();
        let admin = issue_token("a@uni.edu", Role::Admin, TokenExpiry::Never, &config, NOW)
            .unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        let admin_parts: Vec<&str> = admin.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], admin_parts[1], parts[2]);

        assert_eq!(verify_token_at(&forged, &config, NOW), Err(TokenError::Invalid));
    }

    #[test]
    fn test_create_session_token_uses_current_clock() {
        let config = config();
        let token = create_session_token("c@acme.io", Role::Company, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.exp, Some(claims.iat + 3600));
    }

    #[test]
    fn test_token_errors_become_unauthorized() {
        let err: AppError = TokenError::Expired.into();
        assert_eq!(err.kind, internlink_core::ErrorKind::Unauthorized);
        assert_eq!(err.message(), "Session expired");
    }
}
