use reqwest::Client;

use crate::errors::{AppError, Result};
use crate::models::otp::ContactMethod;
use crate::models::user::TrustedContact;

/// Outbound delivery channels: SMS over the provider API, email as a
/// logged stub. Used for OTP delivery and SOS fan-out.
#[derive(Clone)]
pub struct NotificationService {
    api_key: String,
    username: String,
    from: String,
    client: Client,
}

impl NotificationService {
    pub fn new(api_key: String, username: String, from: String) -> Self {
        Self {
            api_key,
            username,
            from,
            client: Client::new(),
        }
    }

    pub async fn send_sms(&self, phone: &str, message: &str) -> Result<()> {
        // Africa's Talking API (example - replace with your provider)
        let url = "https://api.africastalking.com/version1/messaging";

        let response = self
            .client
            .post(url)
            .header("apiKey", &self.api_key)
            .header("Accept", "application/json")
            .form(&[
                ("username", self.username.as_str()),
                ("to", phone),
                ("message", message),
                ("from", self.from.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("SMS API error: {}", e)))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AppError::ExternalApi(format!(
                "SMS sending failed with status: {}",
                response.status()
            )))
        }
    }

    pub async fn send_email(&self, email: &str, message: &str) -> Result<()> {
        // TODO: wire a real email provider; only the SMS channel has an upstream today
        tracing::info!("email to {}: {}", email, message);
        Ok(())
    }

    pub async fn send_otp(
        &self,
        method: ContactMethod,
        destination: &str,
        otp: &str,
    ) -> Result<()> {
        let message = format!(
            "Your aai Saheb verification code is: {}. Valid for 10 minutes.",
            otp
        );

        match method {
            ContactMethod::Phone => self.send_sms(destination, &message).await,
            ContactMethod::Email => self.send_email(destination, &message).await,
        }
    }

    /// SOS fan-out to the trusted-contact list, one SMS per contact.
    /// Best effort: per-contact failures are logged and skipped, nothing
    /// is retried. Returns the phone numbers that were reached.
    pub async fn send_emergency_alert(
        &self,
        user_name: &str,
        address: &str,
        contacts: &[TrustedContact],
    ) -> Vec<String> {
        let message = format!(
            "EMERGENCY ALERT: {} has activated SOS. Location: {}. Please check immediately.",
            user_name, address
        );

        let mut notified = Vec::new();
        for contact in contacts {
            match self.send_sms(&contact.phone, &message).await {
                Ok(()) => {
                    tracing::info!(
                        "emergency alert sent to {} at {}",
                        contact.name,
                        contact.phone
                    );
                    notified.push(contact.phone.clone());
                }
                Err(e) => {
                    tracing::error!("failed to send alert to {}: {}", contact.phone, e);
                }
            }
        }
        notified
    }
}
