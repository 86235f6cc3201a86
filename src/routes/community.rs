use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::community;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(community::get_community_posts))
        .route("/posts", post(community::create_community_post))
}
