use std::path::PathBuf;

use crate::env_lookup;

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub root_dir: PathBuf,
    /// Base of the download URLs handed to clients, e.g. `http://localhost:4000/files`.
    pub public_base_url: String,
    pub signing_secret: String,
    /// Lifetime of signed download URLs, in seconds.
    pub presign_ttl: u64,
    pub max_upload_bytes: usize,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            root_dir: lookup("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./storage")),
            public_base_url: lookup("STORAGE_PUBLIC_URL")
                .unwrap_or_else(|| "http://localhost:4000/files".to_string()),
            signing_secret: lookup("STORAGE_SIGNING_SECRET")
                .or_else(|| lookup("JWT_SECRET"))
                .unwrap_or_else(|| "internlink-dev-storage-secret".to_string()),
            presign_ttl: lookup("STORAGE_PRESIGN_TTL")
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600),
            max_upload_bytes: lookup("STORAGE_MAX_UPLOAD_BYTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10 * 1024 * 1024),
        }
    }
}
