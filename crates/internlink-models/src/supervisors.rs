use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::approvals::ApprovalStatus;

/// Academic supervisor. Created by signup, approved by an admin.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supervisor {
    pub email: String,
    pub full_name: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Supervisor {
    pub fn approval_status(&self) -> ApprovalStatus {
        self.is_approved.into()
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorSignupRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub password: String,
}

/// Row to insert for a new supervisor.
#[derive(Debug, Clone)]
pub struct NewSupervisor {
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
}

/// Body of `POST /api/supervisors/assign-student`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignStudentRequest {
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub student_id: String,
}
