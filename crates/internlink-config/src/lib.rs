//! # InternLink Config
//!
//! Configuration types for the InternLink API, loaded from environment
//! variables. Every type has a `from_env()` constructor and a `from_lookup()`
//! constructor taking any `Fn(&str) -> Option<String>`, which is what the
//! tests use instead of mutating the process environment.
//!
//! - [`jwt`]: session token signing and lifetimes
//! - [`cookie`]: session cookie attributes
//! - [`cors`]: allowed origins
//! - [`storage`]: object storage and signed download URLs
//! - [`review`]: internship review policy
//! - [`server`]: bind address and store backend
//! - [`telemetry`]: log directory and metrics toggle
//!
//! # Example
//!
//! ```ignore
//! use internlink_config::{CookieConfig, JwtConfig, ReviewPolicy};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cookie_config = CookieConfig::from_env();
//! let policy = ReviewPolicy::from_env();
//! ```

pub mod cookie;
pub mod cors;
pub mod jwt;
pub mod review;
pub mod server;
pub mod storage;
pub mod telemetry;

pub use cookie::CookieConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use review::ReviewPolicy;
pub use server::{ServerConfig, StoreBackend};
pub use storage::StorageConfig;
pub use telemetry::TelemetryConfig;

pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) fn lookup_from<'a>(
    pairs: &'a [(&'a str, &'a str)],
) -> impl Fn(&str) -> Option<String> + 'a {
    move |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" ON "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("nope"), None);
    }
}
