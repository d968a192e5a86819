use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use tracing::instrument;

use internlink_auth::Role;
use internlink_core::{ApiResponse, AppError, LoginResponse, MessageResponse};
use internlink_models::auth::PasswordLoginRequest;
use internlink_models::internships::{InternshipView, ReviewInternshipRequest};
use internlink_models::students::StudentProfile;
use internlink_models::{Admin, InternshipEvent};

use crate::middleware::session::{clear_session_cookie, not_logged_in, session_cookie};
use crate::middleware::{Authenticated, CurrentSession};
use crate::modules::auth::service::AuthService;
use crate::modules::internships::service::InternshipService;
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/admins/login",
    request_body = PasswordLoginRequest,
    responses(
        (status = 200, description = "Session cookie set, or \"Invalid email or password\"", body = LoginResponse<Admin>)
    ),
    tag = "Admins"
)]
#[instrument(skip(state, jar, request))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<PasswordLoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse<Admin>>), AppError> {
    let (token, admin) =
        AuthService::login_with_password::<Admin>(state.store.as_ref(), request, &state.jwt_config)
            .await?;

    let jar = jar.add(session_cookie(Role::Admin, token.clone(), &state.cookie_config));
    Ok((
        jar,
        Json(LoginResponse::new(token, "Admin logged in successfully", admin)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/admins/me",
    responses(
        (status = 200, description = "The logged-in admin, or \"Admin is not logged in\"", body = ApiResponse<Admin>),
        (status = 401, description = "Session names an unknown admin", body = MessageResponse)
    ),
    tag = "Admins"
)]
pub async fn me(
    CurrentSession(admin): CurrentSession<Admin>,
) -> Result<Json<ApiResponse<Admin>>, AppError> {
    let admin = admin.ok_or_else(|| not_logged_in(Role::Admin))?;
    Ok(Json(ApiResponse::ok("Authorized admin", admin)))
}

#[utoipa::path(
    post,
    path = "/api/admins/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse)
    ),
    tag = "Admins"
)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(clear_session_cookie(Role::Admin, &state.cookie_config));
    (jar, Json(MessageResponse::ok("Admin logged out successfully")))
}

#[utoipa::path(
    get,
    path = "/api/admins/students",
    responses(
        (status = 200, description = "Every student with supervisor and internship", body = ApiResponse<Vec<StudentProfile>>),
        (status = 401, description = "Admin session required", body = MessageResponse)
    ),
    tag = "Admins"
)]
#[instrument(skip(state, _admin))]
pub async fn list_students(
    State(state): State<AppState>,
    Authenticated(_admin): Authenticated<Admin>,
) -> Result<Json<ApiResponse<Vec<StudentProfile>>>, AppError> {
    let students = StudentService::list_profiles(state.store.as_ref()).await?;
    Ok(Json(ApiResponse::ok("Students fetched successfully", students)))
}

#[utoipa::path(
    post,
    path = "/api/admins/students/approve",
    request_body = ReviewInternshipRequest,
    responses(
        (status = 200, description = "Internship approved, or \"Internship not found\"", body = ApiResponse<InternshipView>),
        (status = 401, description = "Admin session required", body = MessageResponse)
    ),
    tag = "Internships"
)]
#[instrument(skip(state, _admin))]
pub async fn approve_internship(
    State(state): State<AppState>,
    Authenticated(_admin): Authenticated<Admin>,
    ValidatedJson(request): ValidatedJson<ReviewInternshipRequest>,
) -> Result<Json<ApiResponse<InternshipView>>, AppError> {
    let internship = InternshipService::review(
        state.store.as_ref(),
        request.internship_id,
        InternshipEvent::Approve,
        state.review_policy,
    )
    .await?;
    Ok(Json(ApiResponse::ok(
        "Internship approved successfully",
        internship,
    )))
}

#[utoipa::path(
    post,
    path = "/api/admins/students/reject",
    request_body = ReviewInternshipRequest,
    responses(
        (status = 200, description = "Internship rejected, or \"Internship not found\"", body = ApiResponse<InternshipView>),
        (status = 401, description = "Admin session required", body = MessageResponse)
    ),
    tag = "Internships"
)]
#[instrument(skip(state, _admin))]
pub async fn reject_internship(
    State(state): State<AppState>,
    Authenticated(_admin): Authenticated<Admin>,
    ValidatedJson(request): ValidatedJson<ReviewInternshipRequest>,
) -> Result<Json<ApiResponse<InternshipView>>, AppError> {
    let internship = InternshipService::review(
        state.store.as_ref(),
        request.internship_id,
        InternshipEvent::Reject,
        state.review_policy,
    )
    .await?;
    Ok(Json(ApiResponse::ok(
        "Internship rejected successfully",
        internship,
    )))
}
