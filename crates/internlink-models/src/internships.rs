//! Internship records and their lifecycle.
//!
//! A student has at most one internship. Its status follows
//!
//! ```text
//!   (none) --Submit--> SUBMITTED --Approve--> APPROVED
//!                          |
//!                          +-----Reject----> REJECTED
//! ```
//!
//! `Submit` is accepted from every state and resets the record to
//! `SUBMITTED`, replacing all submitted details. Whether an already reviewed
//! internship may be reviewed again is decided by [`ReviewPolicy`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use internlink_core::serde::deserialize_amount;

pub use internlink_config::ReviewPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "internship_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InternshipStatus {
    Submitted,
    Approved,
    Rejected,
}

impl InternshipStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InternshipStatus::Submitted => "SUBMITTED",
            InternshipStatus::Approved => "APPROVED",
            InternshipStatus::Rejected => "REJECTED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternshipEvent {
    Submit,
    Approve,
    Reject,
}

impl InternshipEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            InternshipEvent::Submit => "submit",
            InternshipEvent::Approve => "approve",
            InternshipEvent::Reject => "reject",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Internship not found")]
    NotFound,
    #[error("Internship has already been {}", .0.as_str().to_lowercase())]
    AlreadyReviewed(InternshipStatus),
}

/// Computes the status an internship moves to when `event` is applied.
///
/// `current` is `None` when the student has not submitted anything yet.
pub fn transition(
    current: Option<InternshipStatus>,
    event: InternshipEvent,
    policy: ReviewPolicy,
) -> Result<InternshipStatus, TransitionError> {
    let target = match event {
        InternshipEvent::Submit => return Ok(InternshipStatus::Submitted),
        InternshipEvent::Approve => InternshipStatus::Approved,
        InternshipEvent::Reject => InternshipStatus::Rejected,
    };

    match (current, policy) {
        (None, _) => Err(TransitionError::NotFound),
        (Some(InternshipStatus::Submitted), _) => Ok(target),
        (Some(_), ReviewPolicy::Permissive) => Ok(target),
        (Some(reviewed), ReviewPolicy::Strict) => Err(TransitionError::AlreadyReviewed(reviewed)),
    }
}

/// Status the stored row must still have when a review is written under
/// `policy`. `None` means any status.
pub fn review_precondition(policy: ReviewPolicy) -> Option<InternshipStatus> {
    match policy {
        ReviewPolicy::Strict => Some(InternshipStatus::Submitted),
        ReviewPolicy::Permissive => None,
    }
}

/// Stored internship row.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Internship {
    pub id: Uuid,
    pub student_id: String,
    pub company_email: String,
    pub status: InternshipStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub allowance: f64,
    pub com_supervisor_name: String,
    pub com_supervisor_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Company summary embedded in internship views.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyContact {
    pub company_name: String,
    pub email: String,
}

/// Internship as shown to students, supervisors and admins.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InternshipView {
    pub id: Uuid,
    pub status: InternshipStatus,
    pub company: CompanyContact,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub allowance: f64,
    pub created_at: DateTime<Utc>,
    pub com_supervisor_name: String,
    pub com_supervisor_email: String,
}

impl InternshipView {
    pub fn new(internship: Internship, company: CompanyContact) -> Self {
        Self {
            id: internship.id,
            status: internship.status,
            company,
            start_date: internship.start_date,
            end_date: internship.end_date,
            allowance: internship.allowance,
            created_at: internship.created_at,
            com_supervisor_name: internship.com_supervisor_name,
            com_supervisor_email: internship.com_supervisor_email,
        }
    }
}

fn validate_period(request: &SubmitInternshipRequest) -> Result<(), ValidationError> {
    if request.end_date < request.start_date {
        return Err(ValidationError::new("period")
            .with_message("End date must not be before start date".into()));
    }
    Ok(())
}

/// Body of `POST /api/students/submit-internship`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_period"))]
pub struct SubmitInternshipRequest {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub company_email: String,
    #[serde(deserialize_with = "deserialize_amount")]
    #[validate(range(min = 0.0, message = "Allowance must not be negative"))]
    pub allowance: f64,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub com_supervisor_name: String,
    #[validate(email(message = "Invalid company supervisor email"))]
    pub com_supervisor_email: String,
}

/// Full set of submitted details; saving one replaces the previous record.
#[derive(Debug, Clone)]
pub struct InternshipSubmission {
    pub student_id: String,
    pub company_email: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub allowance: f64,
    pub com_supervisor_name: String,
    pub com_supervisor_email: String,
}

impl InternshipSubmission {
    pub fn new(student_id: String, request: SubmitInternshipRequest) -> Self {
        Self {
            student_id,
            company_email: request.company_email,
            start_date: request.start_date,
            end_date: request.end_date,
            allowance: request.allowance,
            com_supervisor_name: request.com_supervisor_name,
            com_supervisor_email: request.com_supervisor_email,
        }
    }
}

/// Body of `POST /api/admins/students/approve` and `.../reject`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInternshipRequest {
    pub internship_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use InternshipEvent::*;
    use InternshipStatus::*;

    const ALL: [Option<InternshipStatus>; 4] = [None, Some(Submitted), Some(Approved), Some(Rejected)];

    #[test]
    fn test_submit_is_accepted_from_every_state() {
        for policy in [ReviewPolicy::Permissive, ReviewPolicy::Strict] {
            for current in ALL {
                assert_eq!(transition(current, Submit, policy), Ok(Submitted));
            }
        }
    }

    #[test]
    fn test_review_without_record_is_not_found() {
        for policy in [ReviewPolicy::Permissive, ReviewPolicy::Strict] {
            assert_eq!(transition(None, Approve, policy), Err(TransitionError::NotFound));
            assert_eq!(transition(None, Reject, policy), Err(TransitionError::NotFound));
        }
    }

    #[test]
    fn test_permissive_review_from_any_existing_state() {
        for current in [Submitted, Approved, Rejected] {
            assert_eq!(
                transition(Some(current), Approve, ReviewPolicy::Permissive),
                Ok(Approved)
            );
            assert_eq!(
                transition(Some(current), Reject, ReviewPolicy::Permissive),
                Ok(Rejected)
            );
        }
    }

    #[test]
    fn test_strict_review_only_from_submitted() {
        assert_eq!(
            transition(Some(Submitted), Approve, ReviewPolicy::Strict),
            Ok(Approved)
        );
        assert_eq!(
            transition(Some(Submitted), Reject, ReviewPolicy::Strict),
            Ok(Rejected)
        );
        assert_eq!(
            transition(Some(Approved), Reject, ReviewPolicy::Strict),
            Err(TransitionError::AlreadyReviewed(Approved))
        );
        assert_eq!(
            transition(Some(Rejected), Approve, ReviewPolicy::Strict),
            Err(TransitionError::AlreadyReviewed(Rejected))
        );
    }

    #[test]
    fn test_review_precondition_per_policy() {
        assert_eq!(review_precondition(ReviewPolicy::Strict), Some(Submitted));
        assert_eq!(review_precondition(ReviewPolicy::Permissive), None);
    }

    #[test]
    fn test_already_reviewed_message() {
        assert_eq!(
            TransitionError::AlreadyReviewed(Approved).to_string(),
            "Internship has already been approved"
        );
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&Submitted).unwrap(), r#""SUBMITTED""#);
        assert_eq!(serde_json::to_string(&Approved).unwrap(), r#""APPROVED""#);
        assert_eq!(serde_json::to_string(&Rejected).unwrap(), r#""REJECTED""#);
    }

    fn request(body: serde_json::Value) -> SubmitInternshipRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_submit_request_validation() {
        let ok = request(serde_json::json!({
            "startDate": "2024-03-01T00:00:00.000Z",
            "endDate": "2024-08-31T00:00:00.000Z",
            "companyEmail": "hr@acme.io",
            "allowance": "800",
            "comSupervisorName": "Jane",
            "comSupervisorEmail": "jane@acme.io",
        }));
        assert!(ok.validate().is_ok());
        assert_eq!(ok.allowance, 800.0);

        let reversed = request(serde_json::json!({
            "startDate": "2024-08-31T00:00:00Z",
            "endDate": "2024-03-01T00:00:00Z",
            "companyEmail": "hr@acme.io",
            "allowance": 800,
            "comSupervisorName": "Jane",
            "comSupervisorEmail": "jane@acme.io",
        }));
        assert!(reversed.validate().is_err());

        let negative = request(serde_json::json!({
            "startDate": "2024-03-01T00:00:00Z",
            "endDate": "2024-08-31T00:00:00Z",
            "companyEmail": "hr@acme.io",
            "allowance": -1,
            "comSupervisorName": "Jane",
            "comSupervisorEmail": "jane@acme.io",
        }));
        assert!(negative.validate().is_err());
    }
}
