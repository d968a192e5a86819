//! # InternLink Auth
//!
//! Roles, session token claims and the token service.
//!
//! - [`role`]: the four principal roles and their cookie names
//! - [`claims`]: the claims carried by a session token
//! - [`jwt`]: issuing and verifying HS256 session tokens
//!
//! # Example
//!
//! ```ignore
//! use internlink_auth::{Role, create_session_token, verify_token};
//! use internlink_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_session_token("student@uni.edu", Role::Student, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.sub, "student@uni.edu");
//! ```

pub mod claims;
pub mod jwt;
pub mod role;

pub use claims::Claims;
pub use jwt::{TokenError, TokenExpiry, create_session_token, issue_token, verify_token, verify_token_at};
pub use role::Role;
