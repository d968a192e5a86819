use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::approvals::controller::approve_supervisor;
use crate::modules::supervisors::controller::{
    assign_student, list_supervisors, login, logout, me, my_students, signup,
};
use crate::state::AppState;

pub fn init_supervisors_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_supervisors))
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/me", get(me).post(me))
        .route("/logout", post(logout))
        .route("/approve", post(approve_supervisor))
        .route("/assign-student", post(assign_student))
        .route("/my-students", get(my_students))
}
