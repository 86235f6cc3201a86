use chrono::{DateTime, Utc};
use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    Voter,
    Admin,
    NgoPartner,
    Candidate,
}

impl UserRole {
    // Job postings are restricted to organisational roles
    pub fn can_post_jobs(&self) -> bool {
        matches!(
            self,
            UserRole::Admin | UserRole::NgoPartner | UserRole::Candidate
        )
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Voter
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustedContact {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub relationship: String,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Document>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<bson::DateTime>,
    #[serde(default)]
    pub trusted_contacts: Vec<TrustedContact>,
}

fn default_language() -> String {
    "mr".to_string()
}

impl User {
    /// Fresh record for a contact that just passed OTP verification.
    pub fn new(name: String, phone: Option<String>, email: Option<String>) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            name,
            phone,
            email,
            role: UserRole::default(),
            language: default_language(),
            location: None,
            is_verified: true,
            created_at: Utc::now(),
            last_login: None,
            trusted_contacts: Vec::new(),
        }
    }
}

/// What the API hands back about a user. Store-internal fields
/// (trusted contacts, verification flag, timestamps) stay out.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub role: UserRole,
    pub language: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.id.clone(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            email: user.email.clone(),
            role: user.role,
            language: user.language.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_names_are_camel_case() {
        assert_eq!(
            serde_json::to_string(&UserRole::NgoPartner).unwrap(),
            "\"ngoPartner\""
        );
        assert_eq!(serde_json::to_string(&UserRole::Voter).unwrap(), "\"voter\"");

        let role: UserRole = serde_json::from_str("\"ngoPartner\"").unwrap();
        assert_eq!(role, UserRole::NgoPartner);
    }

    #[test]
    fn job_posting_gate() {
        assert!(UserRole::Admin.can_post_jobs());
        assert!(UserRole::NgoPartner.can_post_jobs());
        assert!(UserRole::Candidate.can_post_jobs());
        assert!(!UserRole::Voter.can_post_jobs());
    }

    #[test]
    fn new_user_is_verified_voter() {
        let user = User::new("Asha".to_string(), Some("+919876543210".to_string()), None);
        assert!(user.is_verified);
        assert_eq!(user.role, UserRole::Voter);
        assert_eq!(user.language, "mr");
        assert!(user.trusted_contacts.is_empty());
        assert!(user.last_login.is_none());
    }

    #[test]
    fn sanitized_response_drops_store_fields() {
        let user = User::new("Asha".to_string(), None, Some("asha@example.com".to_string()));
        let resp = UserResponse::from(&user);
        let value = serde_json::to_value(&resp).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("role"));
        assert!(!obj.contains_key("trusted_contacts"));
        assert!(!obj.contains_key("is_verified"));
        assert!(!obj.contains_key("created_at"));
    }
}
