use anyhow::anyhow;
use axum::{
    Json,
    extract::{Multipart, State},
};
use tracing::instrument;

use internlink_core::{ApiResponse, AppError, MessageResponse};
use internlink_models::Student;
use internlink_models::progress_reports::{ProgressReport, UPLOAD_FIELD};

use crate::middleware::Authenticated;
use crate::modules::progress_reports::service::ProgressReportService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/students/progress-report",
    request_body(content_type = "multipart/form-data", description = "PDF file in the `progressReportFile` field"),
    responses(
        (status = 200, description = "Report stored, with a signed download link", body = ApiResponse<ProgressReport>),
        (status = 401, description = "Student session required", body = MessageResponse)
    ),
    tag = "Progress reports"
)]
#[instrument(skip(state, student, multipart), fields(student_id = %student.student_id))]
pub async fn upload_progress_report(
    State(state): State<AppState>,
    Authenticated(student): Authenticated<Student>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ProgressReport>>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(anyhow!(e.body_text())))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(anyhow!(e.body_text())))?;
        upload = Some((file_name, content));
    }

    let Some((file_name, content)) = upload.filter(|(_, content)| !content.is_empty()) else {
        return Err(AppError::validation(anyhow!("Please select a file")));
    };

    let report = ProgressReportService::upload(
        state.objects.as_ref(),
        &student,
        &file_name,
        &content,
        state.storage_config.presign_ttl,
    )
    .await?;

    Ok(Json(ApiResponse::ok(
        "Progress report uploaded successfully",
        report,
    )))
}

#[utoipa::path(
    get,
    path = "/api/students/progress-report",
    responses(
        (status = 200, description = "Signed link to the latest report; both fields are null when none was uploaded. Fails with success false before an internship is submitted", body = ApiResponse<ProgressReport>),
        (status = 401, description = "Student session required", body = MessageResponse)
    ),
    tag = "Progress reports"
)]
#[instrument(skip(state, student), fields(student_id = %student.student_id))]
pub async fn get_progress_report(
    State(state): State<AppState>,
    Authenticated(student): Authenticated<Student>,
) -> Result<Json<ApiResponse<ProgressReport>>, AppError> {
    let report = ProgressReportService::for_student(
        state.store.as_ref(),
        state.objects.as_ref(),
        &student,
        state.storage_config.presign_ttl,
    )
    .await?;

    Ok(Json(match report {
        Some(report) => ApiResponse::ok("Progress report fetched successfully", report),
        None => ApiResponse::ok("Progress report not found", ProgressReport::missing()),
    }))
}
