use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::jobs;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(jobs::get_jobs))
        .route("/", post(jobs::create_job))
}
