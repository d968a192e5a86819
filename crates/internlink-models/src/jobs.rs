use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use internlink_core::serde::deserialize_string_or_number;

/// A job posting, joined with the posting company's name.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub job_id: Uuid,
    pub title: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub posted_at: DateTime<Utc>,
    /// Company name
    pub company: String,
    pub company_email: String,
}

/// Editable fields of a posting.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct JobFields {
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub title: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub location: String,
    #[serde(deserialize_with = "deserialize_string_or_number")]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub salary: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    pub job_id: Uuid,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub title: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub location: String,
    #[serde(deserialize_with = "deserialize_string_or_number")]
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub salary: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub description: String,
}

impl UpdateJobRequest {
    pub fn into_parts(self) -> (Uuid, JobFields) {
        (
            self.job_id,
            JobFields {
                title: self.title,
                location: self.location,
                salary: self.salary,
                description: self.description,
            },
        )
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteJobRequest {
    pub job_id: Uuid,
}
