use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Claims carried by a session token.
///
/// `exp` is absent for tokens that never expire (student sessions under
/// the default configuration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Email of the principal (subject claim)
    pub sub: String,
    pub role: Role,
    /// Issued-at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}
