use axum::{Router, routing::get};

use crate::modules::files::controller::download;
use crate::state::AppState;

pub fn init_files_router() -> Router<AppState> {
    Router::new().route("/{*key}", get(download))
}
