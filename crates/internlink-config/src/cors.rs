use crate::env_lookup;

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .filter(|s| {
                let wildcard = s.as_str() == "*";
                if wildcard {
                    tracing::warn!("Ignoring '*' in ALLOWED_ORIGINS; credentialed CORS needs explicit origins");
                }
                !wildcard
            })
            .collect();

        Self { allowed_origins }
    }
}
