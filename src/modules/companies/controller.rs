use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use tracing::instrument;

use internlink_auth::Role;
use internlink_core::{ApiResponse, AppError, LoginResponse, MessageResponse};
use internlink_models::auth::PasswordLoginRequest;
use internlink_models::companies::CompanySignupRequest;
use internlink_models::{Company, Student};

use crate::middleware::session::{clear_session_cookie, not_logged_in, session_cookie};
use crate::middleware::{Authenticated, CurrentSession};
use crate::modules::auth::service::AuthService;
use crate::modules::companies::service::CompanyService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/companies/signup",
    request_body = CompanySignupRequest,
    responses(
        (status = 200, description = "Company added, pending approval, or a failure envelope", body = ApiResponse<Company>)
    ),
    tag = "Companies"
)]
#[instrument(skip(state, request))]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CompanySignupRequest>,
) -> Result<Json<ApiResponse<Company>>, AppError> {
    let company = CompanyService::signup(state.store.as_ref(), request).await?;
    Ok(Json(ApiResponse::ok("Company added successfully", company)))
}

#[utoipa::path(
    post,
    path = "/api/companies/login",
    request_body = PasswordLoginRequest,
    responses(
        (status = 200, description = "Session cookie set, or \"Invalid email or password\"", body = LoginResponse<Company>)
    ),
    tag = "Companies"
)]
#[instrument(skip(state, jar, request))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<PasswordLoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse<Company>>), AppError> {
    let (token, company) = AuthService::login_with_password::<Company>(
        state.store.as_ref(),
        request,
        &state.jwt_config,
    )
    .await?;

    let jar = jar.add(session_cookie(Role::Company, token.clone(), &state.cookie_config));
    Ok((
        jar,
        Json(LoginResponse::new(token, "Company logged in successfully", company)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/companies/me",
    responses(
        (status = 200, description = "The logged-in company, or \"Company is not logged in\"", body = ApiResponse<Company>),
        (status = 401, description = "Session names an unknown company", body = MessageResponse)
    ),
    tag = "Companies"
)]
pub async fn me(
    CurrentSession(company): CurrentSession<Company>,
) -> Result<Json<ApiResponse<Company>>, AppError> {
    let company = company.ok_or_else(|| not_logged_in(Role::Company))?;
    Ok(Json(ApiResponse::ok("Authorized company", company)))
}

#[utoipa::path(
    post,
    path = "/api/companies/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse)
    ),
    tag = "Companies"
)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(clear_session_cookie(Role::Company, &state.cookie_config));
    (jar, Json(MessageResponse::ok("Company logged out successfully")))
}

/// Companies a student can pick when submitting an internship.
#[utoipa::path(
    get,
    path = "/api/companies",
    responses(
        (status = 200, description = "All companies", body = ApiResponse<Vec<Company>>),
        (status = 401, description = "Student session required", body = MessageResponse)
    ),
    tag = "Companies"
)]
#[instrument(skip(state, _student))]
pub async fn list_companies(
    State(state): State<AppState>,
    Authenticated(_student): Authenticated<Student>,
) -> Result<Json<ApiResponse<Vec<Company>>>, AppError> {
    let companies = state.store.list_companies().await?;
    Ok(Json(ApiResponse::ok("Companies fetched successfully", companies)))
}
