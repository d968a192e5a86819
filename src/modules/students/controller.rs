use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use tracing::instrument;

use internlink_auth::Role;
use internlink_core::{ApiResponse, AppError, LoginResponse, MessageResponse};
use internlink_models::internships::{InternshipView, SubmitInternshipRequest};
use internlink_models::students::{StudentLoginRequest, StudentProfile, StudentSignupRequest};
use internlink_models::{Student, Supervisor};

use crate::middleware::session::{clear_session_cookie, not_logged_in, session_cookie};
use crate::middleware::{Authenticated, CurrentSession};
use crate::modules::auth::service::AuthService;
use crate::modules::internships::service::InternshipService;
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/students/signup",
    request_body = StudentSignupRequest,
    responses(
        (status = 200, description = "Student added, or a failure envelope such as a duplicate id or email", body = ApiResponse<Student>)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<StudentSignupRequest>,
) -> Result<Json<ApiResponse<Student>>, AppError> {
    let student = StudentService::signup(state.store.as_ref(), request.into()).await?;
    Ok(Json(ApiResponse::ok("Student added successfully", student)))
}

#[utoipa::path(
    post,
    path = "/api/students/login",
    request_body = StudentLoginRequest,
    responses(
        (status = 200, description = "Session cookie set, or a failure envelope", body = LoginResponse<StudentProfile>)
    ),
    tag = "Students"
)]
#[instrument(skip(state, jar))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<StudentLoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse<StudentProfile>>), AppError> {
    let (token, student) =
        AuthService::login_student(state.store.as_ref(), request, &state.jwt_config).await?;
    let profile = StudentService::profile(state.store.as_ref(), student).await?;

    let jar = jar.add(session_cookie(
        Role::Student,
        token.clone(),
        &state.cookie_config,
    ));
    Ok((
        jar,
        Json(LoginResponse::new(token, "Student logged in successfully", profile)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/students/me",
    responses(
        (status = 200, description = "Profile of the logged-in student, or \"Student is not logged in\"", body = ApiResponse<StudentProfile>),
        (status = 401, description = "Session names an unknown student", body = MessageResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, session))]
pub async fn me(
    State(state): State<AppState>,
    session: CurrentSession<Student>,
) -> Result<Json<ApiResponse<StudentProfile>>, AppError> {
    let CurrentSession(Some(student)) = session else {
        return Err(not_logged_in(Role::Student));
    };
    let profile = StudentService::profile(state.store.as_ref(), student).await?;
    Ok(Json(ApiResponse::ok("Authorized student", profile)))
}

#[utoipa::path(
    post,
    path = "/api/students/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse)
    ),
    tag = "Students"
)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(clear_session_cookie(Role::Student, &state.cookie_config));
    (jar, Json(MessageResponse::ok("Student logged out successfully")))
}

#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students", body = ApiResponse<Vec<Student>>),
        (status = 401, description = "Supervisor session required", body = MessageResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, _supervisor))]
pub async fn list_students(
    State(state): State<AppState>,
    Authenticated(_supervisor): Authenticated<Supervisor>,
) -> Result<Json<ApiResponse<Vec<Student>>>, AppError> {
    let students = state.store.list_students().await?;
    Ok(Json(ApiResponse::ok("Students fetched successfully", students)))
}

#[utoipa::path(
    post,
    path = "/api/students/submit-internship",
    request_body = SubmitInternshipRequest,
    responses(
        (status = 200, description = "Internship submitted for review, or a failure envelope", body = ApiResponse<InternshipView>),
        (status = 401, description = "Student session required", body = MessageResponse)
    ),
    tag = "Internships"
)]
#[instrument(skip(state, student, request))]
pub async fn submit_internship(
    State(state): State<AppState>,
    Authenticated(student): Authenticated<Student>,
    ValidatedJson(request): ValidatedJson<SubmitInternshipRequest>,
) -> Result<Json<ApiResponse<InternshipView>>, AppError> {
    let internship =
        InternshipService::submit(state.store.as_ref(), &student, request, state.review_policy)
            .await?;
    Ok(Json(ApiResponse::ok(
        "Internship submitted successfully",
        internship,
    )))
}
