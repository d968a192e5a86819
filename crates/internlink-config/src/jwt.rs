use crate::{env_lookup, parse_bool};

pub const DEFAULT_SESSION_TTL: i64 = 60 * 60 * 24 * 7;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime of admin, supervisor and company tokens, in seconds.
    pub session_ttl: i64,
    /// When false, student tokens carry no `exp` claim.
    pub student_tokens_expire: bool,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET is not set, using an insecure development secret");
            "internlink-dev-secret-change-me".to_string()
        });

        Self {
            secret,
            session_ttl: lookup("JWT_SESSION_TTL")
                .and_then(|s| s.parse().ok())
                .filter(|ttl: &i64| *ttl > 0)
                .unwrap_or(DEFAULT_SESSION_TTL),
            student_tokens_expire: lookup("JWT_STUDENT_TOKENS_EXPIRE")
                .and_then(|s| parse_bool(&s))
                .unwrap_or(false),
        }
    }
}
