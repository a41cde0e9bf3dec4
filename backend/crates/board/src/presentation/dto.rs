//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Comment, Post};

// ============================================================================
// Requests
// ============================================================================

/// Create / update post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Create / update comment request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    #[serde(default)]
    pub comment: String,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Entry in the post list (no content)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub post_id: String,
    pub user_id: String,
    pub nickname: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostSummary {
    fn from(post: Post) -> Self {
        Self {
            post_id: post.post_id.to_string(),
            user_id: post.user_id.to_string(),
            nickname: post.nickname,
            title: post.title.to_string(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub post_id: String,
    pub user_id: String,
    pub nickname: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDetail {
    fn from(post: Post) -> Self {
        Self {
            post_id: post.post_id.to_string(),
            user_id: post.user_id.to_string(),
            nickname: post.nickname,
            title: post.title.to_string(),
            content: post.content.to_string(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub post: PostDetail,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub comment_id: String,
    pub post_id: String,
    pub user_id: String,
    pub nickname: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentView {
    fn from(comment: Comment) -> Self {
        Self {
            comment_id: comment.comment_id.to_string(),
            post_id: comment.post_id.to_string(),
            user_id: comment.user_id.to_string(),
            nickname: comment.nickname,
            comment: comment.comment.to_string(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Author, PostContent, PostTitle};
    use kernel::id::UserId;

    #[test]
    fn test_post_summary_is_camel_case_without_content() {
        let author = Author {
            user_id: UserId::new(),
            nickname: "abc1".to_string(),
        };
        let post = Post::new(
            &author,
            PostTitle::new("t").unwrap(),
            PostContent::new("c").unwrap(),
        );

        let value = serde_json::to_value(PostSummary::from(post)).unwrap();
        assert!(value.get("postId").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("content").is_none());
    }

    #[test]
    fn test_post_request_missing_fields_are_empty() {
        let req: PostRequest = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert_eq!(req.content, "");
    }
}
