use anyhow::anyhow;
use tracing::{info, instrument};

use internlink_core::{AppError, ObjectStore};
use internlink_db::Store;
use internlink_models::Student;
use internlink_models::progress_reports::{ProgressReport, is_pdf_filename, object_key};

pub struct ProgressReportService;

impl ProgressReportService {
    /// Stores a student's progress report, replacing the previous one.
    #[instrument(skip(objects, student, content), fields(student_id = %student.student_id, size = content.len()))]
    pub async fn upload(
        objects: &dyn ObjectStore,
        student: &Student,
        file_name: &str,
        content: &[u8],
        ttl_secs: u64,
    ) -> Result<ProgressReport, AppError> {
        if !is_pdf_filename(file_name) {
            return Err(AppError::validation(anyhow!("Only PDF files are allowed")));
        }

        let key = object_key(&student.student_id);
        let meta = objects.put(&key, content).await?;
        let download_url = objects.presigned_url(&key, ttl_secs)?;
        info!(key = %key, "Progress report stored");

        Ok(ProgressReport {
            download_url: Some(download_url),
            uploaded_at: Some(meta.last_modified),
        })
    }

    /// The student's own latest report. Requires a submitted internship.
    #[instrument(skip(store, objects, student), fields(student_id = %student.student_id))]
    pub async fn for_student(
        store: &dyn Store,
        objects: &dyn ObjectStore,
        student: &Student,
        ttl_secs: u64,
    ) -> Result<Option<ProgressReport>, AppError> {
        if store
            .find_internship_by_student(&student.student_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(anyhow!(
                "Student has not submitted internship"
            )));
        }

        Self::latest(objects, &student.student_id, ttl_secs).await
    }

    /// The latest report of `student_id`, `None` if nothing was uploaded.
    pub async fn latest(
        objects: &dyn ObjectStore,
        student_id: &str,
        ttl_secs: u64,
    ) -> Result<Option<ProgressReport>, AppError> {
        let key = object_key(student_id);
        let Some(meta) = objects.head(&key).await? else {
            return Ok(None);
        };

        Ok(Some(ProgressReport {
            download_url: Some(objects.presigned_url(&key, ttl_secs)?),
            uploaded_at: Some(meta.last_modified),
        }))
    }
}
