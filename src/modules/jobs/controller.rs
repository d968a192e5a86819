use axum::{Json, extract::State};
use tracing::instrument;

use internlink_core::{ApiResponse, AppError, MessageResponse};
use internlink_models::Company;
use internlink_models::jobs::{DeleteJobRequest, Job, JobFields, UpdateJobRequest};

use crate::middleware::Authenticated;
use crate::modules::jobs::service::JobService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/jobs",
    responses(
        (status = 200, description = "Every job posting, newest first", body = ApiResponse<Vec<Job>>)
    ),
    tag = "Jobs"
)]
pub async fn job_board(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Job>>>, AppError> {
    let jobs = JobService::list_all(state.store.as_ref()).await?;
    Ok(Json(ApiResponse::ok("Jobs fetched successfully", jobs)))
}

#[utoipa::path(
    get,
    path = "/api/companies/jobs",
    responses(
        (status = 200, description = "The company's own postings", body = ApiResponse<Vec<Job>>),
        (status = 401, description = "Company session required", body = MessageResponse)
    ),
    tag = "Jobs"
)]
#[instrument(skip(state, company), fields(company = %company.email))]
pub async fn list_jobs(
    State(state): State<AppState>,
    Authenticated(company): Authenticated<Company>,
) -> Result<Json<ApiResponse<Vec<Job>>>, AppError> {
    let jobs = JobService::list_for_company(state.store.as_ref(), &company).await?;
    Ok(Json(ApiResponse::ok("Jobs fetched successfully", jobs)))
}

#[utoipa::path(
    post,
    path = "/api/companies/jobs",
    request_body = JobFields,
    responses(
        (status = 200, description = "Job posted", body = ApiResponse<Job>),
        (status = 401, description = "Company session required", body = MessageResponse)
    ),
    tag = "Jobs"
)]
#[instrument(skip(state, company, posting), fields(company = %company.email))]
pub async fn create_job(
    State(state): State<AppState>,
    Authenticated(company): Authenticated<Company>,
    ValidatedJson(posting): ValidatedJson<JobFields>,
) -> Result<Json<ApiResponse<Job>>, AppError> {
    let job = JobService::create(state.store.as_ref(), &company, posting).await?;
    Ok(Json(ApiResponse::ok("Job posted successfully", job)))
}

#[utoipa::path(
    put,
    path = "/api/companies/jobs",
    request_body = UpdateJobRequest,
    responses(
        (status = 200, description = "Job updated, or \"Job not found\"", body = ApiResponse<Job>),
        (status = 401, description = "Company session required", body = MessageResponse)
    ),
    tag = "Jobs"
)]
#[instrument(skip(state, company, request), fields(company = %company.email))]
pub async fn update_job(
    State(state): State<AppState>,
    Authenticated(company): Authenticated<Company>,
    ValidatedJson(request): ValidatedJson<UpdateJobRequest>,
) -> Result<Json<ApiResponse<Job>>, AppError> {
    let (job_id, posting) = request.into_parts();
    let job = JobService::update(state.store.as_ref(), &company, job_id, posting).await?;
    Ok(Json(ApiResponse::ok("Job updated successfully", job)))
}

#[utoipa::path(
    delete,
    path = "/api/companies/jobs",
    request_body = DeleteJobRequest,
    responses(
        (status = 200, description = "Job deleted, or \"Job not found\"", body = MessageResponse),
        (status = 401, description = "Company session required", body = MessageResponse)
    ),
    tag = "Jobs"
)]
#[instrument(skip(state, company), fields(company = %company.email))]
pub async fn delete_job(
    State(state): State<AppState>,
    Authenticated(company): Authenticated<Company>,
    ValidatedJson(request): ValidatedJson<DeleteJobRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    JobService::delete(state.store.as_ref(), &company, request.job_id).await?;
    Ok(Json(MessageResponse::ok("Job deleted successfully")))
}
