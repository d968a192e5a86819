use axum::{Json, extract::State};
use tracing::instrument;

use internlink_core::{ApiResponse, AppError, MessageResponse};
use internlink_models::approvals::ApproveAccountRequest;
use internlink_models::{Admin, Company, Supervisor};

use crate::middleware::Authenticated;
use crate::modules::approvals::service::ApprovalService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/supervisors/approve",
    request_body = ApproveAccountRequest,
    responses(
        (status = 200, description = "Supervisor approved, or a failure envelope", body = ApiResponse<Supervisor>),
        (status = 401, description = "Admin session required", body = MessageResponse)
    ),
    tag = "Approvals"
)]
#[instrument(skip(state, _admin))]
pub async fn approve_supervisor(
    State(state): State<AppState>,
    Authenticated(_admin): Authenticated<Admin>,
    ValidatedJson(request): ValidatedJson<ApproveAccountRequest>,
) -> Result<Json<ApiResponse<Supervisor>>, AppError> {
    let supervisor = ApprovalService::approve_supervisor(state.store.as_ref(), &request.email).await?;
    Ok(Json(ApiResponse::ok("Supervisor approved successfully", supervisor)))
}

#[utoipa::path(
    post,
    path = "/api/companies/approve",
    request_body = ApproveAccountRequest,
    responses(
        (status = 200, description = "Company approved, or a failure envelope", body = ApiResponse<Company>),
        (status = 401, description = "Admin session required", body = MessageResponse)
    ),
    tag = "Approvals"
)]
#[instrument(skip(state, _admin))]
pub async fn approve_company(
    State(state): State<AppState>,
    Authenticated(_admin): Authenticated<Admin>,
    ValidatedJson(request): ValidatedJson<ApproveAccountRequest>,
) -> Result<Json<ApiResponse<Company>>, AppError> {
    let company = ApprovalService::approve_company(state.store.as_ref(), &request.email).await?;
    Ok(Json(ApiResponse::ok("Company approved successfully", company)))
}
