use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "progressReportFile";

/// Storage key of a student's progress report. Each upload replaces the
/// previous one.
///
/// Bytes of the student id outside `[A-Za-z0-9-]` are written as `_XX`
/// (upper-case hex), so every id maps to its own valid key.
pub fn object_key(student_id: &str) -> String {
    let mut encoded = String::with_capacity(student_id.len());
    for byte in student_id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("_{:02X}", byte));
        }
    }
    format!("progress-reports/progress-report-{}.pdf", encoded)
}

pub fn is_pdf_filename(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("pdf"))
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub download_url: Option<String>,
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl ProgressReport {
    pub fn missing() -> Self {
        Self {
            download_url: None,
            uploaded_at: None,
        }
    }
}
