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
use crate::models::community::{CommunityPost, CommunityPostView};
use crate::models::user::User;
use crate::state::AppState;

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[serde(default)]
    pub media_files: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_anonymous: bool,
}

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub success: bool,
    pub posts: Vec<CommunityPostView>,
}

pub async fn get_community_posts(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<FeedResponse>> {
    let posts: Collection<CommunityPost> = state.db.collection("community_posts");

    let cursor = posts
        .find(doc! {})
        .sort(doc! { "created_at": -1 })
        .skip(query.skip)
        .limit(query.limit)
        .await?;
    let list: Vec<CommunityPost> = cursor.try_collect().await?;

    // anonymity is presentation-only; the stored record keeps the author
    let views = list.into_iter().map(CommunityPostView::from).collect();

    Ok(Json(FeedResponse {
        success: true,
        posts: views,
    }))
}

pub async fn create_community_post(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(req): Json<CreatePostRequest>,
) -> Result<Json<StatusResponse>> {
    req.validate()
        .map_err(|e| AppError::invalid_data(e.to_string()))?;

    let post = CommunityPost::new(
        user.id,
        req.content,
        req.media_files,
        req.tags,
        req.is_anonymous,
    );

    let posts: Collection<CommunityPost> = state.db.collection("community_posts");
    posts.insert_one(&post).await?;

    Ok(Json(StatusResponse::ok("Post created successfully")))
}
