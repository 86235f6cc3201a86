use mongodb::Database;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::notification_service::NotificationService;
use crate::services::otp_service::OTPService;
use crate::services::token_service::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub otp_service: OTPService,
    pub token_service: TokenService,
    pub notifier: Arc<NotificationService>,
}

impl AppState {
    pub fn new(db: Database, config: &AppConfig) -> Self {
        AppState {
            otp_service: OTPService::new(db.clone()),
            token_service: TokenService::new(&config.jwt_secret),
            notifier: Arc::new(NotificationService::new(
                config.sms_api_key.clone(),
                config.sms_username.clone(),
                config.sms_from.clone(),
            )),
            db,
        }
    }
}
