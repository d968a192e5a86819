use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use internlink_config::{
    CookieConfig, CorsConfig, JwtConfig, ReviewPolicy, ServerConfig, StorageConfig, StoreBackend,
};
use internlink_core::{LocalObjectStore, ObjectStore, UrlSigner};
use internlink_db::{MemoryStore, PgStore, Store, init_db_pool, run_migrations};

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub objects: Arc<dyn ObjectStore>,
    /// Checks the links handed out by `objects.presigned_url`.
    pub url_signer: UrlSigner,
    pub jwt_config: JwtConfig,
    pub cookie_config: CookieConfig,
    pub cors_config: CorsConfig,
    pub storage_config: StorageConfig,
    pub review_policy: ReviewPolicy,
}

pub async fn init_app_state(server: &ServerConfig) -> anyhow::Result<AppState> {
    let store: Arc<dyn Store> = match server.store_backend {
        StoreBackend::Postgres => {
            let database_url = server
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set when STORE_BACKEND=postgres")?;
            let pool = init_db_pool(database_url).await?;
            if server.run_migrations {
                run_migrations(&pool).await?;
                info!("Database migrations applied");
            }
            Arc::new(PgStore::new(pool))
        }
        StoreBackend::Memory => {
            warn!("Using the in-memory store; all data is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    let storage_config = StorageConfig::from_env();
    let url_signer = UrlSigner::new(storage_config.signing_secret.as_bytes())?;
    let objects = Arc::new(LocalObjectStore::with_max_size(
        storage_config.root_dir.clone(),
        storage_config.public_base_url.clone(),
        url_signer.clone(),
        storage_config.max_upload_bytes,
    ));

    Ok(AppState {
        store,
        objects,
        url_signer,
        jwt_config: JwtConfig::from_env(),
        cookie_config: CookieConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        storage_config,
        review_policy: ReviewPolicy::from_env(),
    })
}
