use axum::{extract::State, response::Json, Extension};
use chrono::Utc;
use mongodb::{
    bson::{self, doc, Document},
    Collection,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::dtos::StatusResponse;
use crate::errors::{AppError, Result};
use crate::models::user::{TrustedContact, User, UserRole};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub role: Option<UserRole>,
    pub language: Option<String>,
    pub location: Option<Document>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddTrustedContactRequest {
    #[validate(length(min = 1, message = "Contact name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Contact phone is required"))]
    pub phone: String,
    pub relationship: String,
    #[serde(default)]
    pub is_primary: bool,
}

pub async fn get_profile(Extension(user): Extension<User>) -> Result<Json<Value>> {
    Ok(Json(json!({
        "success": true,
        "user": {
            "id": user.id,
            "name": user.name,
            "phone": user.phone,
            "email": user.email,
            "role": user.role,
            "language": user.language,
            "location": user.location,
            "trusted_contacts": user.trusted_contacts,
        }
    })))
}

/// Partial update: absent fields keep their current values.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<StatusResponse>> {
    let mut update = doc! {};

    if let Some(role) = req.role {
        let role = bson::to_bson(&role)
            .map_err(|e| AppError::service(format!("BSON conversion failed: {}", e)))?;
        update.insert("role", role);
    }
    if let Some(language) = req.language {
        update.insert("language", language);
    }
    if let Some(location) = req.location {
        update.insert("location", location);
    }

    if update.is_empty() {
        return Ok(Json(StatusResponse::ok("Nothing to update")));
    }

    let users: Collection<User> = state.db.collection("users");
    users
        .update_one(doc! { "id": &user.id }, doc! { "$set": update })
        .await?;

    Ok(Json(StatusResponse::ok("Profile updated successfully")))
}

pub async fn add_trusted_contact(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(req): Json<AddTrustedContactRequest>,
) -> Result<Json<StatusResponse>> {
    req.validate()
        .map_err(|e| AppError::invalid_data(e.to_string()))?;

    let contact = TrustedContact {
        id: Uuid::new_v4().to_string(),
        name: req.name,
        phone: req.phone,
        relationship: req.relationship,
        is_primary: req.is_primary,
        added_at: Utc::now(),
    };

    let contact = bson::to_bson(&contact)
        .map_err(|e| AppError::service(format!("BSON conversion failed: {}", e)))?;

    // $push is the store's atomic list append; no read-modify-write
    let users: Collection<User> = state.db.collection("users");
    users
        .update_one(
            doc! { "id": &user.id },
            doc! { "$push": { "trusted_contacts": contact } },
        )
        .await?;

    Ok(Json(StatusResponse::ok("Trusted contact added successfully")))
}
