// config.rs
use std::env;

/// Process configuration. Loaded once in `main`, immutable afterwards,
/// handed to services through `AppState`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub database_url: String,
    pub db_name: String,
    pub port: u16,
    pub host: String,
    pub sms_api_key: String,
    pub sms_username: String,
    pub sms_from: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        AppConfig {
            jwt_secret: env::var("JWT_SECRET")
                .expect("JWT_SECRET must be set"),
            database_url: env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set"),
            db_name: env::var("DB_NAME")
                .unwrap_or_else(|_| "aai_saheb".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8001".to_string())
                .parse()
                .expect("PORT must be a number"),
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            sms_api_key: env::var("SMS_API_KEY").unwrap_or_default(),
            sms_username: env::var("SMS_USERNAME")
                .unwrap_or_else(|_| "sandbox".to_string()),
            sms_from: env::var("SMS_FROM")
                .unwrap_or_else(|_| "AaiSaheb".to_string()),
        }
    }
}
