//! Onboarding approval of supervisor and company accounts.
//!
//! Accounts start unapproved; an admin may approve them, and approval is
//! never revoked. The flag is informational: it does not gate login.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    Pending,
    Approved,
}

impl From<bool> for ApprovalStatus {
    fn from(is_approved: bool) -> Self {
        if is_approved {
            ApprovalStatus::Approved
        } else {
            ApprovalStatus::Pending
        }
    }
}

/// Body of `POST /api/supervisors/approve` and `POST /api/companies/approve`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ApproveAccountRequest {
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub email: String,
}
