use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::approvals::ApprovalStatus;

/// Host company. Created by signup, approved by an admin.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub email: String,
    pub company_name: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Company {
    pub fn approval_status(&self) -> ApprovalStatus {
        self.is_approved.into()
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanySignupRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct NewCompany {
    pub email: String,
    pub company_name: String,
    pub password_hash: String,
}
