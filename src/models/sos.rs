use chrono::{DateTime, Utc};
use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SosStatus {
    Active,
    Resolved,
    FalseAlarm,
}

impl SosStatus {
    // resolved and false_alarm never go back to active
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SosStatus::Active)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SosAlert {
    pub id: String,
    pub user_id: String,
    /// Coordinates/address snapshot exactly as the client supplied it.
    pub location: Document,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
    pub status: SosStatus,
    #[serde(default)]
    pub media_files: Vec<String>,
    #[serde(default)]
    pub contacts_notified: Vec<String>,
    #[serde(default)]
    pub is_stealth: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<bson::DateTime>,
}

impl SosAlert {
    pub fn new(
        user_id: String,
        location: Document,
        is_stealth: bool,
        media_files: Vec<String>,
    ) -> Self {
        SosAlert {
            id: Uuid::new_v4().to_string(),
            user_id,
            location,
            timestamp: Utc::now(),
            status: SosStatus::Active,
            media_files,
            contacts_notified: Vec::new(),
            is_stealth,
            resolved_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn new_alert_starts_active() {
        let alert = SosAlert::new(
            "user-1".to_string(),
            doc! { "lat": 18.52, "lng": 73.85 },
            false,
            Vec::new(),
        );
        assert_eq!(alert.status, SosStatus::Active);
        assert!(!alert.status.is_terminal());
        assert!(alert.contacts_notified.is_empty());
        assert!(alert.resolved_at.is_none());
    }

    #[test]
    fn terminal_states() {
        assert!(SosStatus::Resolved.is_terminal());
        assert!(SosStatus::FalseAlarm.is_terminal());
        assert!(!SosStatus::Active.is_terminal());
    }

    #[test]
    fn status_wire_names_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&SosStatus::FalseAlarm).unwrap(),
            "\"false_alarm\""
        );
        assert_eq!(
            serde_json::to_string(&SosStatus::Active).unwrap(),
            "\"active\""
        );
    }
}
