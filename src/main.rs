use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use internlink::internlink_config::{ServerConfig, TelemetryConfig};
use internlink::internlink_observability::{init_metrics, init_tracing};
use internlink::router::init_router;
use internlink::state::init_app_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let telemetry = TelemetryConfig::from_env();
    init_tracing(telemetry.log_dir.as_deref())?;
    let metrics = init_metrics(telemetry.metrics_enabled)?;

    let server = ServerConfig::from_env();
    let state = init_app_state(&server).await?;
    let app = init_router(state, metrics);

    let listener = tokio::net::TcpListener::bind(&server.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", server.bind_addr))?;

    info!(addr = %server.bind_addr, backend = ?server.store_backend, "🚀 Server running");
    info!("📖 Scalar UI available at http://{}/scalar", server.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
