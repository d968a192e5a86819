use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub posted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AnnouncementFields {
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub title: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAnnouncementRequest {
    pub id: Uuid,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub title: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub content: String,
}

impl UpdateAnnouncementRequest {
    pub fn into_parts(self) -> (Uuid, AnnouncementFields) {
        (
            self.id,
            AnnouncementFields {
                title: self.title,
                content: self.content,
            },
        )
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteAnnouncementRequest {
    pub id: Uuid,
}
