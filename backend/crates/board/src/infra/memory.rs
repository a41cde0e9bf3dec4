//! In-memory Board Store
//!
//! Lock order is always posts, then comments.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{CommentId, PostId};
use tokio::sync::RwLock;

use crate::domain::entities::{Comment, Post};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{BoardError, BoardResult};

#[derive(Clone, Default)]
pub struct InMemoryBoardRepository {
    posts: Arc<RwLock<HashMap<PostId, Post>>>,
    comments: Arc<RwLock<HashMap<CommentId, Comment>>>,
}

impl InMemoryBoardRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostRepository for InMemoryBoardRepository {
    async fn create_post(&self, post: &Post) -> BoardResult<()> {
        self.posts.write().await.insert(post.post_id, post.clone());
        Ok(())
    }

    async fn list_posts(&self) -> BoardResult<Vec<Post>> {
        let mut posts: Vec<Post> = self.posts.read().await.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn find_post(&self, post_id: &PostId) -> BoardResult<Option<Post>> {
        Ok(self.posts.read().await.get(post_id).cloned())
    }

    async fn update_post(&self, post: &Post) -> BoardResult<()> {
        if let Some(stored) = self.posts.write().await.get_mut(&post.post_id) {
            stored.title = post.title.clone();
            stored.content = post.content.clone();
            stored.updated_at = post.updated_at;
        }
        Ok(())
    }

    async fn delete_post(&self, post_id: &PostId) -> BoardResult<()> {
        let mut posts = self.posts.write().await;
        let mut comments = self.comments.write().await;

        posts.remove(post_id);
        comments.retain(|_, comment| comment.post_id != *post_id);
        Ok(())
    }
}

impl CommentRepository for InMemoryBoardRepository {
    async fn create_comment(&self, comment: &Comment) -> BoardResult<()> {
        // Holding the posts lock keeps a concurrent delete_post out
        let posts = self.posts.read().await;
        if !posts.contains_key(&comment.post_id) {
            return Err(BoardError::PostNotFound);
        }

        self.comments
            .write()
            .await
            .insert(comment.comment_id, comment.clone());
        Ok(())
    }

    async fn list_comments(&self, post_id: &PostId) -> BoardResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .read()
            .await
            .values()
            .filter(|comment| comment.post_id == *post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    async fn find_comment(&self, comment_id: &CommentId) -> BoardResult<Option<Comment>> {
        Ok(self.comments.read().await.get(comment_id).cloned())
    }

    async fn update_comment(&self, comment: &Comment) -> BoardResult<()> {
        if let Some(stored) = self.comments.write().await.get_mut(&comment.comment_id) {
            stored.comment = comment.comment.clone();
            stored.updated_at = comment.updated_at;
        }
        Ok(())
    }

    async fn delete_comment(&self, comment_id: &CommentId) -> BoardResult<()> {
        self.comments.write().await.remove(comment_id);
        Ok(())
    }
}
