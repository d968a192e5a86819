//! Object storage for uploaded files.
//!
//! Business logic only sees the [`ObjectStore`] trait, so the filesystem
//! backend used in development and tests can be swapped for a bucket-backed
//! one without touching the services. Downloads go through expiring URLs
//! signed with HMAC-SHA256 ([`UrlSigner`]).
//!
//! # Example
//!
//! ```ignore
//! use internlink_core::object_store::{LocalObjectStore, ObjectStore, UrlSigner};
//! use std::path::PathBuf;
//!
//! let signer = UrlSigner::new(b"signing-secret")?;
//! let store = LocalObjectStore::with_max_size(
//!     PathBuf::from("./storage"),
//!     "http://localhost:4000/files".to_string(),
//!     signer,
//!     10 * 1024 * 1024,
//! );
//!
//! store.put("progress-reports/progress-report-S1.pdf", &bytes).await?;
//! let url = store.presigned_url("progress-reports/progress-report-S1.pdf", 3600)?;
//! ```

use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tokio::fs;

type HmacSha256 = Hmac<Sha256>;

pub type StorageFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StorageError>> + Send + 'a>>;

/// Metadata of a stored object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMeta {
    pub key: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}

/// Abstract trait for object storage backends.
pub trait ObjectStore: Send + Sync + fmt::Debug {
    /// Store `content` under `key`, replacing any previous object.
    fn put<'a>(&'a self, key: &'a str, content: &'a [u8]) -> StorageFuture<'a, ObjectMeta>;

    /// Metadata for `key`, or `None` when nothing is stored there.
    fn head<'a>(&'a self, key: &'a str) -> StorageFuture<'a, Option<ObjectMeta>>;

    /// Read the object stored under `key`.
    fn get<'a>(&'a self, key: &'a str) -> StorageFuture<'a, Vec<u8>>;

    /// A download URL for `key` that stops working after `ttl_secs` seconds.
    fn presigned_url(&self, key: &str, ttl_secs: u64) -> Result<String, StorageError>;
}

/// Error type for object storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// File exceeds maximum allowed size.
    InvalidFileSize { max_bytes: usize },

    /// I/O error (file system or similar).
    IoError(std::io::Error),

    /// File not found.
    NotFound,

    /// Invalid storage key format.
    InvalidKey(String),

    /// The signing secret could not be used as an HMAC key.
    InvalidSigningKey,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFileSize { max_bytes } => {
                write!(f, "File exceeds maximum size of {} bytes", max_bytes)
            }
            Self::IoError(e) => write!(f, "I/O error: {}", e),
            Self::NotFound => write!(f, "File not found"),
            Self::InvalidKey(msg) => write!(f, "Invalid storage key: {}", msg),
            Self::InvalidSigningKey => write!(f, "Invalid URL signing secret"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound
        } else {
            Self::IoError(e)
        }
    }
}

/// Signs and checks `key:expires` pairs for download URLs.
#[derive(Clone)]
pub struct UrlSigner {
    mac: HmacSha256,
}

impl fmt::Debug for UrlSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlSigner").finish_non_exhaustive()
    }
}

impl UrlSigner {
    pub fn new(secret: &[u8]) -> Result<Self, StorageError> {
        let mac = HmacSha256::new_from_slice(secret).map_err(|_| StorageError::InvalidSigningKey)?;
        Ok(Self { mac })
    }

    fn payload(key: &str, expires: i64) -> String {
        format!("{}:{}", key, expires)
    }

    /// Hex-encoded signature for `key` valid until the unix time `expires`.
    pub fn sign(&self, key: &str, expires: i64) -> String {
        let mut mac = self.mac.clone();
        mac.update(Self::payload(key, expires).as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// True when `signature` matches and `expires` is still in the future.
    pub fn verify(&self, key: &str, expires: i64, signature: &str, now: i64) -> bool {
        if expires <= now {
            return false;
        }

        let Ok(bytes) = hex::decode(signature) else {
            return false;
        };

        let mut mac = self.mac.clone();
        mac.update(Self::payload(key, expires).as_bytes());
        mac.verify_slice(&bytes).is_ok()
    }
}

/// Local filesystem object store.
///
/// Objects live under `base_dir`; downloads are served by the API itself at
/// `base_url/<key>?expires=..&signature=..`.
#[derive(Clone, Debug)]
pub struct LocalObjectStore {
    base_dir: PathBuf,
    base_url: String,
    signer: UrlSigner,
    max_file_size: usize,
}

impl LocalObjectStore {
    pub fn with_max_size(
        base_dir: PathBuf,
        base_url: String,
        signer: UrlSigner,
        max_file_size: usize,
    ) -> Self {
        Self {
            base_dir,
            base_url,
            signer,
            max_file_size,
        }
    }

    /// Validate storage key format to prevent path traversal.
    pub fn validate_key(key: &str) -> Result<(), StorageError> {
        if key.is_empty() || key.contains("..") || key.starts_with('/') {
            return Err(StorageError::InvalidKey(
                "Key must not be empty, contain '..', or start with '/'".to_string(),
            ));
        }

        // Alphanumeric, hyphens, underscores, slashes, and dots only
        if !key
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '/' || c == '.')
        {
            return Err(StorageError::InvalidKey(
                "Key contains invalid characters".to_string(),
            ));
        }

        Ok(())
    }

    async fn meta(&self, key: &str) -> Result<ObjectMeta, StorageError> {
        let metadata = fs::metadata(self.base_dir.join(key)).await?;
        let last_modified = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        Ok(ObjectMeta {
            key: key.to_string(),
            size: metadata.len(),
            last_modified,
        })
    }
}

impl ObjectStore for LocalObjectStore {
    fn put<'a>(&'a self, key: &'a str, content: &'a [u8]) -> StorageFuture<'a, ObjectMeta> {
        Box::pin(async move {
            Self::validate_key(key)?;

            if content.len() > self.max_file_size {
                return Err(StorageError::InvalidFileSize {
                    max_bytes: self.max_file_size,
                });
            }

            let file_path = self.base_dir.join(key);
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent).await?;
            }
            fs::write(&file_path, content).await?;

            self.meta(key).await
        })
    }

    fn head<'a>(&'a self, key: &'a str) -> StorageFuture<'a, Option<ObjectMeta>> {
        Box::pin(async move {
            Self::validate_key(key)?;

            match self.meta(key).await {
                Ok(meta) => Ok(Some(meta)),
                Err(StorageError::NotFound) => Ok(None),
                Err(e) => Err(e),
            }
        })
    }

    fn get<'a>(&'a self, key: &'a str) -> StorageFuture<'a, Vec<u8>> {
        Box::pin(async move {
            Self::validate_key(key)?;
            Ok(fs::read(self.base_dir.join(key)).await?)
        })
    }

    fn presigned_url(&self, key: &str, ttl_secs: u64) -> Result<String, StorageError> {
        Self::validate_key(key)?;

        let ttl = i64::try_from(ttl_secs).unwrap_or(i64::MAX / 2);
        let expires = Utc::now().timestamp().saturating_add(ttl);
        let signature = self.signer.sign(key, expires);

        Ok(format!(
            "{}/{}?expires={}&signature={}",
            self.base_url.trim_end_matches('/'),
            key,
            expires,
            signature
        ))
    }
}
