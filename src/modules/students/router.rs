use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::modules::progress_reports::controller::{get_progress_report, upload_progress_report};
use crate::modules::students::controller::{
    list_students, login, logout, me, signup, submit_internship,
};
use crate::state::AppState;

/// Multipart framing on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn init_students_router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(list_students))
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/logout", post(logout))
        .route("/submit-internship", post(submit_internship))
        .route(
            "/progress-report",
            post(upload_progress_report)
                .layer(DefaultBodyLimit::max(max_upload_bytes + MULTIPART_OVERHEAD))
                .get(get_progress_report),
        )
}
