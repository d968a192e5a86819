use axum::{Router, routing::get};

use crate::modules::announcements::controller::{
    admin_list_announcements, create_announcement, delete_announcement, list_announcements,
    update_announcement,
};
use crate::state::AppState;

pub fn init_announcements_router() -> Router<AppState> {
    Router::new().route("/", get(list_announcements))
}

/// Admin management, nested under `/api/admins/announcements`.
pub fn init_admin_announcements_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(admin_list_announcements)
            .post(create_announcement)
            .put(update_announcement)
            .delete(delete_announcement),
    )
}
