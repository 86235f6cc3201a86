use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime, Document},
    Collection,
};
use serde::{Deserialize, Serialize};

use crate::dtos::StatusResponse;
use crate::errors::{AppError, Result};
use crate::models::sos::SosAlert;
use crate::models::user::User;
use crate::state::AppState;

/// Listing cap: the newest 50 alerts, nothing older.
const ALERT_HISTORY_LIMIT: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct ActivateSosRequest {
    pub location: Document,
    #[serde(default)]
    pub is_stealth: bool,
    #[serde(default)]
    pub media_files: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ActivateSosResponse {
    pub success: bool,
    pub message: String,
    pub alert_id: String,
}

#[derive(Debug, Serialize)]
pub struct SosAlertsResponse {
    pub success: bool,
    pub alerts: Vec<SosAlert>,
}

pub async fn activate_sos(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(req): Json<ActivateSosRequest>,
) -> Result<Json<ActivateSosResponse>> {
    let alert = SosAlert::new(
        user.id.clone(),
        req.location,
        req.is_stealth,
        req.media_files,
    );

    let alerts: Collection<SosAlert> = state.db.collection("sos_alerts");
    alerts.insert_one(&alert).await?;

    // Fan out after the response. The task owns clones only, so nothing
    // request-scoped can be torn down underneath it. Delivery failures
    // are logged by the dispatcher and never reach the caller.
    let notifier = state.notifier.clone();
    let db = state.db.clone();
    let alert_id = alert.id.clone();
    let user_name = user.name.clone();
    let address = alert
        .location
        .get_str("address")
        .unwrap_or("Unknown")
        .to_string();
    let contacts = user.trusted_contacts.clone();

    tokio::spawn(async move {
        let notified = notifier
            .send_emergency_alert(&user_name, &address, &contacts)
            .await;

        let alerts: Collection<SosAlert> = db.collection("sos_alerts");
        let update = doc! { "$set": { "contacts_notified": notified } };
        if let Err(e) = alerts.update_one(doc! { "id": &alert_id }, update).await {
            tracing::error!(
                "failed to record notified contacts for alert {}: {}",
                alert_id,
                e
            );
        }
    });

    Ok(Json(ActivateSosResponse {
        success: true,
        message: "SOS activated successfully".to_string(),
        alert_id: alert.id,
    }))
}

pub async fn deactivate_sos(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(alert_id): Path<String>,
) -> Result<Json<StatusResponse>> {
    let alerts: Collection<SosAlert> = state.db.collection("sos_alerts");

    // Filtering on status=active makes resolved and foreign alerts
    // indistinguishable from absent ones, and keeps the transition one-way.
    let filter = doc! {
        "id": &alert_id,
        "user_id": &user.id,
        "status": "active",
    };
    let update = doc! {
        "$set": {
            "status": "resolved",
            "resolved_at": DateTime::now(),
        }
    };

    let result = alerts.update_one(filter, update).await?;
    if result.matched_count == 0 {
        return Err(AppError::AlertNotFound);
    }

    Ok(Json(StatusResponse::ok("SOS deactivated successfully")))
}

pub async fn get_sos_alerts(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<SosAlertsResponse>> {
    let alerts: Collection<SosAlert> = state.db.collection("sos_alerts");

    let cursor = alerts
        .find(doc! { "user_id": &user.id })
        .sort(doc! { "timestamp": -1 })
        .limit(ALERT_HISTORY_LIMIT)
        .await?;
    let list: Vec<SosAlert> = cursor.try_collect().await?;

    Ok(Json(SosAlertsResponse {
        success: true,
        alerts: list,
    }))
}
