pub mod auth_dtos;

use serde::Serialize;

/// Uniform `{success, message}` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        StatusResponse {
            success: true,
            message: message.into(),
        }
    }
}
