use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::admins::controller::{
    approve_internship, list_students, login, logout, me, reject_internship,
};
use crate::modules::announcements::router::init_admin_announcements_router;
use crate::state::AppState;

pub fn init_admins_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/logout", post(logout))
        .route("/students", get(list_students))
        .route("/students/approve", post(approve_internship))
        .route("/students/reject", post(reject_internship))
        .nest("/announcements", init_admin_announcements_router())
}
