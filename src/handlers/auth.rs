use axum::{extract::State, response::Json};
use mongodb::{
    bson::{doc, DateTime},
    Collection,
};
use validator::Validate;

use crate::dtos::auth_dtos::{AuthResponse, LoginRequest, RegisterRequest, VerifyOtpRequest};
use crate::dtos::StatusResponse;
use crate::errors::{AppError, Result};
use crate::models::otp::{ContactMethod, OtpPurpose};
use crate::models::user::{User, UserResponse};
use crate::state::AppState;

/// The contact field named by `method` must actually be present.
fn subject_for(
    method: ContactMethod,
    phone: &Option<String>,
    email: &Option<String>,
) -> Result<String> {
    match method {
        ContactMethod::Phone => phone
            .clone()
            .ok_or_else(|| AppError::invalid_data("phone is required when method is phone")),
        ContactMethod::Email => email
            .clone()
            .ok_or_else(|| AppError::invalid_data("email is required when method is email")),
    }
}

fn lookup_field(method: ContactMethod) -> &'static str {
    match method {
        ContactMethod::Phone => "phone",
        ContactMethod::Email => "email",
    }
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<StatusResponse>> {
    req.validate()
        .map_err(|e| AppError::invalid_data(e.to_string()))?;
    let subject = subject_for(req.method, &req.phone, &req.email)?;

    let users: Collection<User> = state.db.collection("users");
    let mut filter = doc! {};
    filter.insert(lookup_field(req.method), subject.as_str());
    let existing = users.find_one(filter).await?;
    if existing.is_some() {
        return Err(AppError::already_exists("User already exists"));
    }

    // Pending registrations do not reserve the contact; earlier codes for
    // the same subject stay valid until they expire on their own.
    let code = state
        .otp_service
        .issue(
            req.method,
            &subject,
            OtpPurpose::Register { name: req.name },
        )
        .await?;

    if let Err(e) = state.notifier.send_otp(req.method, &subject, &code).await {
        tracing::error!("failed to deliver OTP to {}: {}", subject, e);
    }

    Ok(Json(StatusResponse::ok("OTP sent successfully")))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<StatusResponse>> {
    let subject = subject_for(req.method, &req.phone, &req.email)?;

    let users: Collection<User> = state.db.collection("users");
    let mut filter = doc! {};
    filter.insert(lookup_field(req.method), subject.as_str());
    let user = users
        .find_one(filter)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let code = state
        .otp_service
        .issue(
            req.method,
            &subject,
            OtpPurpose::Login { user_id: user.id },
        )
        .await?;

    if let Err(e) = state.notifier.send_otp(req.method, &subject, &code).await {
        tracing::error!("failed to deliver OTP to {}: {}", subject, e);
    }

    Ok(Json(StatusResponse::ok("OTP sent successfully")))
}

pub async fn verify_otp(
    State(state): State<AppState>,
    Json(req): Json<VerifyOtpRequest>,
) -> Result<Json<AuthResponse>> {
    req.validate()
        .map_err(|e| AppError::invalid_data(e.to_string()))?;
    let subject = subject_for(req.method, &req.phone, &req.email)?;

    let record = state
        .otp_service
        .verify(req.method, &subject, &req.otp)
        .await?
        .ok_or(AppError::InvalidOrExpiredOtp)?;

    let users: Collection<User> = state.db.collection("users");

    let user = match record.purpose {
        OtpPurpose::Login { user_id } => {
            let user = users
                .find_one(doc! { "id": &user_id })
                .await?
                .ok_or_else(|| AppError::not_found("User not found"))?;

            users
                .update_one(
                    doc! { "id": &user_id },
                    doc! { "$set": { "last_login": DateTime::now() } },
                )
                .await?;

            user
        }
        OtpPurpose::Register { name } => {
            let (phone, email) = match req.method {
                ContactMethod::Phone => (Some(subject.clone()), None),
                ContactMethod::Email => (None, Some(subject.clone())),
            };

            let user = User::new(name, phone, email);
            users.insert_one(&user).await?;
            user
        }
    };

    let token = state.token_service.create_token(&user.id)?;

    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        token: Some(token),
        user: Some(UserResponse::from(&user)),
    }))
}
