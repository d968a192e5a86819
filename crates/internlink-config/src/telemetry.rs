use std::path::PathBuf;

use crate::{env_lookup, parse_bool};

#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    /// Directory for daily-rolling JSON log files; console only when unset.
    pub log_dir: Option<PathBuf>,
    pub metrics_enabled: bool,
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_dir: lookup("LOG_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            metrics_enabled: lookup("METRICS_ENABLED")
                .and_then(|s| parse_bool(&s))
                .unwrap_or(true),
        }
    }
}
