use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::profile;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::get_profile))
        .route("/", put(profile::update_profile))
        .route("/trusted-contacts", post(profile::add_trusted_contact))
}
