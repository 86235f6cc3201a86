use chrono::{DateTime, Duration, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};

/// How long an issued code stays verifiable.
pub const OTP_TTL_MINUTES: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Phone,
    Email,
}

impl std::fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactMethod::Phone => write!(f, "phone"),
            ContactMethod::Email => write!(f, "email"),
        }
    }
}

/// What a verified code unlocks. Registration codes carry the name the
/// user signed up with (no user row exists yet); login codes carry the
/// existing user's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OtpPurpose {
    Register { name: String },
    Login { user_id: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpRecord {
    pub code: String,
    pub method: ContactMethod,
    /// Phone number or email address the code was sent to.
    pub subject: String,
    pub purpose: OtpPurpose,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    pub fn new(code: String, method: ContactMethod, subject: String, purpose: OtpPurpose) -> Self {
        let now = Utc::now();
        OtpRecord {
            code,
            method,
            subject,
            purpose,
            created_at: now,
            expires_at: now + Duration::minutes(OTP_TTL_MINUTES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purpose_round_trips_through_bson() {
        let record = OtpRecord::new(
            "493021".to_string(),
            ContactMethod::Phone,
            "+919876543210".to_string(),
            OtpPurpose::Register {
                name: "Asha".to_string(),
            },
        );

        let doc = bson::to_document(&record).unwrap();
        assert_eq!(doc.get_str("code").unwrap(), "493021");
        assert_eq!(doc.get_str("method").unwrap(), "phone");

        let back: OtpRecord = bson::from_document(doc).unwrap();
        assert_eq!(back.purpose, record.purpose);
        assert_eq!(back.subject, record.subject);
    }

    #[test]
    fn login_purpose_is_tagged() {
        let purpose = OtpPurpose::Login {
            user_id: "abc-123".to_string(),
        };
        let value = serde_json::to_value(&purpose).unwrap();
        assert_eq!(value["kind"], "login");
        assert_eq!(value["user_id"], "abc-123");
    }

    #[test]
    fn record_expires_ten_minutes_out() {
        let record = OtpRecord::new(
            "000000".to_string(),
            ContactMethod::Email,
            "a@b.c".to_string(),
            OtpPurpose::Login {
                user_id: "u1".to_string(),
            },
        );
        let ttl = record.expires_at - record.created_at;
        assert_eq!(ttl, Duration::minutes(OTP_TTL_MINUTES));
    }
}
