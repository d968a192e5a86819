//! Student accounts and the views built around them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::internships::InternshipView;
use crate::supervisors::Supervisor;

/// A student. Logs in with email and identity-card number.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: String,
    pub email: String,
    pub full_name: String,
    pub ic_number: String,
    #[serde(skip_serializing)]
    pub supervisor_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentSignupRequest {
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub student_id: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub ic_number: String,
}

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub student_id: String,
    pub email: String,
    pub full_name: String,
    pub ic_number: String,
}

impl From<StudentSignupRequest> for NewStudent {
    fn from(request: StudentSignupRequest) -> Self {
        Self {
            student_id: request.student_id,
            email: request.email,
            full_name: request.full_name,
            ic_number: request.ic_number,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentLoginRequest {
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub email: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub ic_number: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorContact {
    pub email: String,
    pub full_name: String,
}

impl From<Supervisor> for SupervisorContact {
    fn from(supervisor: Supervisor) -> Self {
        Self {
            email: supervisor.email,
            full_name: supervisor.full_name,
        }
    }
}

/// Student together with their supervisor and internship.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub student_id: String,
    pub full_name: String,
    pub email: String,
    pub ic_number: String,
    pub supervisor: Option<SupervisorContact>,
    pub created_at: DateTime<Utc>,
    pub internship: Option<InternshipView>,
}

impl StudentProfile {
    pub fn new(
        student: Student,
        supervisor: Option<SupervisorContact>,
        internship: Option<InternshipView>,
    ) -> Self {
        Self {
            student_id: student.student_id,
            full_name: student.full_name,
            email: student.email,
            ic_number: student.ic_number,
            supervisor,
            created_at: student.created_at,
            internship,
        }
    }
}

/// A supervisor's view of one of their students.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignedStudent {
    pub student_id: String,
    pub full_name: String,
    pub email: String,
    pub internship: Option<InternshipView>,
    /// Signed link to the latest progress report, if one was uploaded.
    pub download_url: Option<String>,
}

/// Result of trying to claim a student for a supervisor.
#[derive(Debug, Clone)]
pub enum AssignOutcome {
    Assigned(Student),
    AlreadyAssigned,
    StudentNotFound,
}
