use axum::http::{HeaderValue, Method, header};
use axum::{Json, Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use internlink_core::MessageResponse;
use internlink_observability::{
    PrometheusHandle, logging_middleware, metrics_middleware, metrics_router,
};

use crate::docs::ApiDoc;
use crate::modules::admins::router::init_admins_router;
use crate::modules::announcements::router::init_announcements_router;
use crate::modules::companies::router::init_companies_router;
use crate::modules::files::router::init_files_router;
use crate::modules::jobs::router::init_jobs_router;
use crate::modules::students::router::init_students_router;
use crate::modules::supervisors::router::init_supervisors_router;
use crate::state::AppState;

async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::ok("The API server is running!"))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

/// Builds the application. `/metrics` is only mounted when a Prometheus
/// handle is given.
pub fn init_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let api = Router::new()
        .nest("/admins", init_admins_router())
        .nest("/students", init_students_router(state.storage_config.max_upload_bytes))
        .nest("/supervisors", init_supervisors_router())
        .nest("/companies", init_companies_router())
        .nest("/jobs", init_jobs_router())
        .nest("/announcements", init_announcements_router());

    let mut router = Router::new()
        .route("/", get(health))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/api", api)
        .nest("/files", init_files_router())
        .with_state(state.clone());

    if let Some(handle) = metrics {
        router = router.merge(metrics_router(handle));
    }

    router
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
