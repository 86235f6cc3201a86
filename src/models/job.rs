use chrono::{DateTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(default = "default_women_friendly")]
    pub is_women_friendly: bool,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<bson::DateTime>,
    pub created_by: String,
}

fn default_women_friendly() -> bool {
    true
}

impl JobPosting {
    pub fn new(
        title: String,
        company: String,
        location: String,
        description: String,
        requirements: Vec<String>,
        salary_range: Option<String>,
        created_by: String,
    ) -> Self {
        JobPosting {
            id: Uuid::new_v4().to_string(),
            title,
            company,
            location,
            description,
            requirements,
            salary_range,
            is_women_friendly: true,
            created_at: Utc::now(),
            application_deadline: None,
            created_by,
        }
    }
}
