use axum::{routing::get, Router};

use crate::handlers::welfare;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(welfare::get_welfare_schemes))
}
