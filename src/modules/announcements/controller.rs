use axum::{Json, extract::State};
use tracing::instrument;

use internlink_core::{ApiResponse, AppError, MessageResponse};
use internlink_models::Admin;
use internlink_models::announcements::{
    Announcement, AnnouncementFields, DeleteAnnouncementRequest, UpdateAnnouncementRequest,
};

use crate::middleware::Authenticated;
use crate::modules::announcements::service::AnnouncementService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/announcements",
    responses(
        (status = 200, description = "All announcements, newest first", body = ApiResponse<Vec<Announcement>>)
    ),
    tag = "Announcements"
)]
pub async fn list_announcements(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Announcement>>>, AppError> {
    let announcements = AnnouncementService::list(state.store.as_ref()).await?;
    Ok(Json(ApiResponse::ok(
        "Announcements fetched successfully",
        announcements,
    )))
}

#[utoipa::path(
    get,
    path = "/api/admins/announcements",
    responses(
        (status = 200, description = "All announcements, newest first", body = ApiResponse<Vec<Announcement>>),
        (status = 401, description = "Admin session required", body = MessageResponse)
    ),
    tag = "Announcements"
)]
pub async fn admin_list_announcements(
    state: State<AppState>,
    Authenticated(_admin): Authenticated<Admin>,
) -> Result<Json<ApiResponse<Vec<Announcement>>>, AppError> {
    list_announcements(state).await
}

#[utoipa::path(
    post,
    path = "/api/admins/announcements",
    request_body = AnnouncementFields,
    responses(
        (status = 200, description = "Announcement posted", body = ApiResponse<Announcement>),
        (status = 401, description = "Admin session required", body = MessageResponse)
    ),
    tag = "Announcements"
)]
#[instrument(skip(state, _admin, announcement))]
pub async fn create_announcement(
    State(state): State<AppState>,
    Authenticated(_admin): Authenticated<Admin>,
    ValidatedJson(announcement): ValidatedJson<AnnouncementFields>,
) -> Result<Json<ApiResponse<Announcement>>, AppError> {
    let announcement = AnnouncementService::create(state.store.as_ref(), announcement).await?;
    Ok(Json(ApiResponse::ok(
        "Announcement created successfully",
        announcement,
    )))
}

#[utoipa::path(
    put,
    path = "/api/admins/announcements",
    request_body = UpdateAnnouncementRequest,
    responses(
        (status = 200, description = "Announcement updated, or \"Announcement not found\"", body = ApiResponse<Announcement>),
        (status = 401, description = "Admin session required", body = MessageResponse)
    ),
    tag = "Announcements"
)]
#[instrument(skip(state, _admin, request))]
pub async fn update_announcement(
    State(state): State<AppState>,
    Authenticated(_admin): Authenticated<Admin>,
    ValidatedJson(request): ValidatedJson<UpdateAnnouncementRequest>,
) -> Result<Json<ApiResponse<Announcement>>, AppError> {
    let (id, announcement) = request.into_parts();
    let announcement = AnnouncementService::update(state.store.as_ref(), id, announcement).await?;
    Ok(Json(ApiResponse::ok(
        "Announcement updated successfully",
        announcement,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admins/announcements",
    request_body = DeleteAnnouncementRequest,
    responses(
        (status = 200, description = "Announcement deleted, or \"Announcement not found\"", body = MessageResponse),
        (status = 401, description = "Admin session required", body = MessageResponse)
    ),
    tag = "Announcements"
)]
#[instrument(skip(state, _admin))]
pub async fn delete_announcement(
    State(state): State<AppState>,
    Authenticated(_admin): Authenticated<Admin>,
    ValidatedJson(request): ValidatedJson<DeleteAnnouncementRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    AnnouncementService::delete(state.store.as_ref(), request.id).await?;
    Ok(Json(MessageResponse::ok("Announcement deleted successfully")))
}
