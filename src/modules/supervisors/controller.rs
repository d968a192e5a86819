use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use tracing::instrument;

use internlink_auth::Role;
use internlink_core::{ApiResponse, AppError, LoginResponse, MessageResponse};
use internlink_models::auth::PasswordLoginRequest;
use internlink_models::students::AssignedStudent;
use internlink_models::supervisors::{AssignStudentRequest, SupervisorSignupRequest};
use internlink_models::{Admin, Student, Supervisor};

use crate::middleware::session::{clear_session_cookie, not_logged_in, session_cookie};
use crate::middleware::{Authenticated, CurrentSession};
use crate::modules::auth::service::AuthService;
use crate::modules::supervisors::service::SupervisorService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/supervisors/signup",
    request_body = SupervisorSignupRequest,
    responses(
        (status = 200, description = "Supervisor added, pending approval, or a failure envelope", body = ApiResponse<Supervisor>)
    ),
    tag = "Supervisors"
)]
#[instrument(skip(state, request))]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SupervisorSignupRequest>,
) -> Result<Json<ApiResponse<Supervisor>>, AppError> {
    let supervisor = SupervisorService::signup(state.store.as_ref(), request).await?;
    Ok(Json(ApiResponse::ok("Supervisor added successfully", supervisor)))
}

#[utoipa::path(
    post,
    path = "/api/supervisors/login",
    request_body = PasswordLoginRequest,
    responses(
        (status = 200, description = "Session cookie set, or \"Invalid email or password\"", body = LoginResponse<Supervisor>)
    ),
    tag = "Supervisors"
)]
#[instrument(skip(state, jar, request))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<PasswordLoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse<Supervisor>>), AppError> {
    let (token, supervisor) = AuthService::login_with_password::<Supervisor>(
        state.store.as_ref(),
        request,
        &state.jwt_config,
    )
    .await?;

    let jar = jar.add(session_cookie(Role::Supervisor, token.clone(), &state.cookie_config));
    Ok((
        jar,
        Json(LoginResponse::new(token, "Supervisor logged in successfully", supervisor)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/supervisors/me",
    responses(
        (status = 200, description = "The logged-in supervisor, or \"Supervisor is not logged in\"", body = ApiResponse<Supervisor>),
        (status = 401, description = "Session names an unknown supervisor", body = MessageResponse)
    ),
    tag = "Supervisors"
)]
pub async fn me(
    CurrentSession(supervisor): CurrentSession<Supervisor>,
) -> Result<Json<ApiResponse<Supervisor>>, AppError> {
    let supervisor = supervisor.ok_or_else(|| not_logged_in(Role::Supervisor))?;
    Ok(Json(ApiResponse::ok("Authorized supervisor", supervisor)))
}

#[utoipa::path(
    post,
    path = "/api/supervisors/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse)
    ),
    tag = "Supervisors"
)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(clear_session_cookie(Role::Supervisor, &state.cookie_config));
    (jar, Json(MessageResponse::ok("Supervisor logged out successfully")))
}

#[utoipa::path(
    get,
    path = "/api/supervisors",
    responses(
        (status = 200, description = "All supervisors with their approval flag", body = ApiResponse<Vec<Supervisor>>),
        (status = 401, description = "Admin session required", body = MessageResponse)
    ),
    tag = "Supervisors"
)]
#[instrument(skip(state, _admin))]
pub async fn list_supervisors(
    State(state): State<AppState>,
    Authenticated(_admin): Authenticated<Admin>,
) -> Result<Json<ApiResponse<Vec<Supervisor>>>, AppError> {
    let supervisors = state.store.list_supervisors().await?;
    Ok(Json(ApiResponse::ok("Supervisors fetched successfully", supervisors)))
}

#[utoipa::path(
    post,
    path = "/api/supervisors/assign-student",
    request_body = AssignStudentRequest,
    responses(
        (status = 200, description = "Student assigned, or \"Student already has a supervisor\"", body = ApiResponse<Student>),
        (status = 401, description = "Supervisor session required", body = MessageResponse)
    ),
    tag = "Supervisors"
)]
#[instrument(skip(state, supervisor))]
pub async fn assign_student(
    State(state): State<AppState>,
    Authenticated(supervisor): Authenticated<Supervisor>,
    ValidatedJson(request): ValidatedJson<AssignStudentRequest>,
) -> Result<Json<ApiResponse<Student>>, AppError> {
    let student =
        SupervisorService::assign_student(state.store.as_ref(), &supervisor, &request.student_id)
            .await?;
    Ok(Json(ApiResponse::ok("Student assigned successfully", student)))
}

#[utoipa::path(
    get,
    path = "/api/supervisors/my-students",
    responses(
        (status = 200, description = "Assigned students with internship and report link", body = ApiResponse<Vec<AssignedStudent>>),
        (status = 401, description = "Supervisor session required", body = MessageResponse)
    ),
    tag = "Supervisors"
)]
#[instrument(skip(state, supervisor))]
pub async fn my_students(
    State(state): State<AppState>,
    Authenticated(supervisor): Authenticated<Supervisor>,
) -> Result<Json<ApiResponse<Vec<AssignedStudent>>>, AppError> {
    let students = SupervisorService::my_students(
        state.store.as_ref(),
        state.objects.as_ref(),
        &supervisor,
        state.storage_config.presign_ttl,
    )
    .await?;
    Ok(Json(ApiResponse::ok("Students fetched successfully", students)))
}
