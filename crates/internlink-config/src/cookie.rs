use crate::{env_lookup, parse_bool};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieConfig {
    pub secure: bool,
    /// `Max-Age` of session cookies, in seconds.
    pub max_age: i64,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            secure: true,
            max_age: 60 * 60 * 24 * 7,
        }
    }
}

impl CookieConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            secure: lookup("COOKIE_SECURE")
                .and_then(|s| parse_bool(&s))
                .unwrap_or(defaults.secure),
            max_age: lookup("COOKIE_MAX_AGE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_age),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup_from;

    #[test]
    fn test_default_config() {
        let config = CookieConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, CookieConfig::default());
        assert!(config.secure);
        assert_eq!(config.max_age, 604800);
    }

    #[test]
    fn test_insecure_cookies_for_local_http() {
        let config = CookieConfig::from_lookup(lookup_from(&[("COOKIE_SECURE", "false")]));
        assert!(!config.secure);
    }
}
