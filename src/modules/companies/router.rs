use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::approvals::controller::approve_company;
use crate::modules::companies::controller::{list_companies, login, logout, me, signup};
use crate::modules::jobs::router::init_company_jobs_router;
use crate::state::AppState;

pub fn init_companies_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_companies))
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/me", get(me).post(me))
        .route("/logout", post(logout))
        .route("/approve", post(approve_company))
        .merge(init_company_jobs_router())
}
