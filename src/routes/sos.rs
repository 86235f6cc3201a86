use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::sos;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/activate", post(sos::activate_sos))
        .route("/deactivate/:alert_id", post(sos::deactivate_sos))
        .route("/alerts", get(sos::get_sos_alerts))
}
