use axum::{
    extract::{Query, State},
    response::Json,
    Extension,
};
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dtos::StatusResponse;
use crate::errors::{AppError, Result};
use crate::models::job::JobPosting;
use crate::models::user::User;
use crate::state::AppState;

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize)]
pub struct JobsQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub salary_range: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub success: bool,
    pub jobs: Vec<JobPosting>,
}

pub async fn get_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobsQuery>,
) -> Result<Json<JobsResponse>> {
    let jobs: Collection<JobPosting> = state.db.collection("job_postings");

    let mut filter = doc! { "is_women_friendly": true };
    if let Some(location) = &query.location {
        filter.insert("location", doc! { "$regex": location, "$options": "i" });
    }

    let cursor = jobs
        .find(filter)
        .skip(query.skip)
        .limit(query.limit)
        .await?;
    let list: Vec<JobPosting> = cursor.try_collect().await?;

    Ok(Json(JobsResponse {
        success: true,
        jobs: list,
    }))
}

pub async fn create_job(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(req): Json<CreateJobRequest>,
) -> Result<Json<StatusResponse>> {
    if !user.role.can_post_jobs() {
        return Err(AppError::Forbidden);
    }

    req.validate()
        .map_err(|e| AppError::invalid_data(e.to_string()))?;

    let job = JobPosting::new(
        req.title,
        req.company,
        req.location,
        req.description,
        req.requirements,
        req.salary_range,
        user.id,
    );

    let jobs: Collection<JobPosting> = state.db.collection("job_postings");
    jobs.insert_one(&job).await?;

    Ok(Json(StatusResponse::ok("Job posting created successfully")))
}
