pub mod notification_service;
pub mod otp_service;
pub mod token_service;
