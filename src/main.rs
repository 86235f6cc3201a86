use axum::extract::State;
use axum::{http::Method, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod config;
mod database;
mod dtos;
mod errors;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;

use config::AppConfig;
use database::connection::{ensure_indexes, get_db_client};
use state::AppState;

const OTP_REAP_INTERVAL_SECS: u64 = 60;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env();

    let db = get_db_client(&config).await;
    if let Err(e) = ensure_indexes(&db).await {
        tracing::error!("❌ Failed to create database indexes: {}", e);
    }

    let app_state = AppState::new(db, &config);

    // expired-OTP sweep runs for the life of the process
    app_state
        .otp_service
        .clone()
        .spawn_reaper(OTP_REAP_INTERVAL_SECS);

    let app = build_router(app_state);
    start_server(app, &config).await;
}

fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .allow_credentials(false);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .nest("/api", api_routes(app_state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

fn api_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(api_health_check))
        .nest("/auth", routes::auth::routes())
        .merge(protected_routes(app_state))
}

/// Everything behind the bearer-token gate.
fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/sos", routes::sos::routes())
        .nest("/profile", routes::profile::routes())
        .nest("/jobs", routes::jobs::routes())
        .nest("/community", routes::community::routes())
        .nest("/welfare-schemes", routes::welfare::routes())
        .route_layer(axum::middleware::from_fn_with_state(
            app_state,
            middleware::auth::auth_middleware,
        ))
}

async fn start_server(app: Router, config: &AppConfig) {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("invalid HOST/PORT");

    tracing::info!("🚀 aai Saheb API starting on {}", addr);

    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            axum::serve(listener, app).await.unwrap();
        }
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    }
}

async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "aai Saheb API - Women Empowerment Platform" }))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn api_health_check(State(state): State<AppState>) -> Json<Value> {
    use mongodb::bson::doc;

    let db_status = match state.db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };

    Json(json!({
        "status": "healthy",
        "database": db_status,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
