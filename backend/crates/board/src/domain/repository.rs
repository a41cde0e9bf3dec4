//! Repository Traits
//!
//! Listing methods return newest first.

use kernel::id::{CommentId, PostId};

use crate::domain::entities::{Comment, Post};
use crate::error::BoardResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    async fn create_post(&self, post: &Post) -> BoardResult<()>;

    async fn list_posts(&self) -> BoardResult<Vec<Post>>;

    async fn find_post(&self, post_id: &PostId) -> BoardResult<Option<Post>>;

    /// Overwrite title, content and `updated_at`
    async fn update_post(&self, post: &Post) -> BoardResult<()>;

    /// Delete the post together with all of its comments
    async fn delete_post(&self, post_id: &PostId) -> BoardResult<()>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Fails with [`BoardError::PostNotFound`](crate::error::BoardError::PostNotFound)
    /// if the parent post no longer exists at insert time
    async fn create_comment(&self, comment: &Comment) -> BoardResult<()>;

    async fn list_comments(&self, post_id: &PostId) -> BoardResult<Vec<Comment>>;

    async fn find_comment(&self, comment_id: &CommentId) -> BoardResult<Option<Comment>>;

    /// Overwrite comment text and `updated_at`
    async fn update_comment(&self, comment: &Comment) -> BoardResult<()>;

    async fn delete_comment(&self, comment_id: &CommentId) -> BoardResult<()>;
}
