use axum::{Router, routing::get};

use crate::modules::jobs::controller::{create_job, delete_job, job_board, list_jobs, update_job};
use crate::state::AppState;

/// Public job board, nested at `/api/jobs`.
pub fn init_jobs_router() -> Router<AppState> {
    Router::new().route("/", get(job_board))
}

/// A company's own postings, merged into the companies router.
pub fn init_company_jobs_router() -> Router<AppState> {
    Router::new().route(
        "/jobs",
        get(list_jobs)
            .post(create_job)
            .put(update_job)
            .delete(delete_job),
    )
}
