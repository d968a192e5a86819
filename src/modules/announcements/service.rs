use anyhow::anyhow;
use tracing::{info, instrument};
use uuid::Uuid;

use internlink_core::AppError;
use internlink_db::Store;
use internlink_models::announcements::{Announcement, AnnouncementFields};

fn announcement_not_found() -> AppError {
    AppError::not_found(anyhow!("Announcement not found"))
}

pub struct AnnouncementService;

impl AnnouncementService {
    #[instrument(skip(store, announcement), fields(title = %announcement.title))]
    pub async fn create(
        store: &dyn Store,
        announcement: AnnouncementFields,
    ) -> Result<Announcement, AppError> {
        let announcement = store.create_announcement(announcement).await?;
        info!(id = %announcement.id, "Announcement posted");
        Ok(announcement)
    }

    pub async fn list(store: &dyn Store) -> Result<Vec<Announcement>, AppError> {
        Ok(store.list_announcements().await?)
    }

    #[instrument(skip(store, announcement))]
    pub async fn update(
        store: &dyn Store,
        id: Uuid,
        announcement: AnnouncementFields,
    ) -> Result<Announcement, AppError> {
        store
            .update_announcement(id, announcement)
            .await?
            .ok_or_else(announcement_not_found)
    }

    #[instrument(skip(store))]
    pub async fn delete(store: &dyn Store, id: Uuid) -> Result<(), AppError> {
        if !store.delete_announcement(id).await? {
            return Err(announcement_not_found());
        }
        Ok(())
    }
}
