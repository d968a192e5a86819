use std::str::FromStr;

use crate::{env_lookup, parse_bool};

/// Where principals, internships and postings are persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown store backend: {}", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub run_migrations: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store_backend = match lookup("STORE_BACKEND") {
            None => StoreBackend::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to the postgres store backend");
                StoreBackend::default()
            }),
        };

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:4000".to_string()),
            store_backend,
            database_url: lookup("DATABASE_URL"),
            run_migrations: lookup("RUN_MIGRATIONS")
                .and_then(|s| parse_bool(&s))
                .unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup_from;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.bind_addr, "0.0.0.0:4000");
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert!(config.database_url.is_none());
        assert!(config.run_migrations);
    }

    #[test]
    fn test_memory_backend() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("STORE_BACKEND", "memory"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("RUN_MIGRATIONS", "false"),
        ]));
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert!(!config.run_migrations);
    }
}
