use chrono::{DateTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: String,
    pub user_id: String,
    pub content: String,
    #[serde(default)]
    pub media_files: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes_count: i32,
    #[serde(default)]
    pub comments_count: i32,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl CommunityPost {
    pub fn new(
        user_id: String,
        content: String,
        media_files: Vec<String>,
        tags: Vec<String>,
        is_anonymous: bool,
    ) -> Self {
        CommunityPost {
            id: Uuid::new_v4().to_string(),
            user_id,
            content,
            media_files,
            tags,
            likes_count: 0,
            comments_count: 0,
            is_anonymous,
            created_at: Utc::now(),
        }
    }
}

/// Feed projection. The stored record always keeps the author id;
/// anonymity only hides it from readers.
#[derive(Debug, Serialize)]
pub struct CommunityPostView {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub content: String,
    pub media_files: Vec<String>,
    pub tags: Vec<String>,
    pub likes_count: i32,
    pub comments_count: i32,
    pub is_anonymous: bool,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl From<CommunityPost> for CommunityPostView {
    fn from(post: CommunityPost) -> Self {
        let user_id = if post.is_anonymous {
            None
        } else {
            Some(post.user_id)
        };
        CommunityPostView {
            id: post.id,
            user_id,
            content: post.content,
            media_files: post.media_files,
            tags: post.tags,
            likes_count: post.likes_count,
            comments_count: post.comments_count,
            is_anonymous: post.is_anonymous,
            created_at: post.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_posts_hide_author_in_view() {
        let post = CommunityPost::new(
            "user-9".to_string(),
            "stay safe out there".to_string(),
            Vec::new(),
            vec!["safety".to_string()],
            true,
        );
        // record keeps the author either way
        assert_eq!(post.user_id, "user-9");

        let view = CommunityPostView::from(post);
        assert!(view.user_id.is_none());
        assert!(view.is_anonymous);
    }

    #[test]
    fn attributed_posts_keep_author_in_view() {
        let post = CommunityPost::new(
            "user-9".to_string(),
            "hello".to_string(),
            Vec::new(),
            Vec::new(),
            false,
        );
        let view = CommunityPostView::from(post);
        assert_eq!(view.user_id.as_deref(), Some("user-9"));
    }
}
