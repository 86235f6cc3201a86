use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::otp::ContactMethod;
use crate::models::user::UserResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    pub method: ContactMethod,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub method: ContactMethod,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    pub method: ContactMethod,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[validate(length(min = 6, max = 6, message = "OTP must be 6 digits"))]
    pub otp: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_accepts_phone_method() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"name":"Asha","method":"phone","phone":"+919876543210"}"#,
        )
        .unwrap();
        assert_eq!(req.method, ContactMethod::Phone);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn short_otp_fails_validation() {
        let req: VerifyOtpRequest = serde_json::from_str(
            r#"{"method":"email","email":"a@b.c","otp":"123"}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }
}
