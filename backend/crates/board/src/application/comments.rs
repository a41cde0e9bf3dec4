//! Comment Use Case
//!
//! Every operation first resolves the parent post, so a comment is only
//! reachable through the post it belongs to.

use std::sync::Arc;

use kernel::id::{CommentId, PostId};

use crate::domain::entities::Comment;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_objects::{Author, CommentText};
use crate::error::{BoardError, BoardResult};

/// Comment use case
pub struct CommentUseCase<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    post_repo: Arc<P>,
    comment_repo: Arc<C>,
}

impl<P, C> CommentUseCase<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    pub fn new(post_repo: Arc<P>, comment_repo: Arc<C>) -> Self {
        Self {
            post_repo,
            comment_repo,
        }
    }

    pub async fn create(
        &self,
        author: &Author,
        post_id: &PostId,
        comment: String,
    ) -> BoardResult<Comment> {
        let comment = CommentText::new(comment).map_err(|_| BoardError::EmptyComment)?;
        self.ensure_post(post_id).await?;

        let comment = Comment::new(author, *post_id, comment);
        self.comment_repo.create_comment(&comment).await?;

        tracing::info!(
            comment_id = %comment.comment_id,
            post_id = %post_id,
            user_id = %author.user_id,
            "Comment created"
        );

        Ok(comment)
    }

    pub async fn list(&self, post_id: &PostId) -> BoardResult<Vec<Comment>> {
        self.ensure_post(post_id).await?;
        self.comment_repo.list_comments(post_id).await
    }

    pub async fn update(
        &self,
        author: &Author,
        post_id: &PostId,
        comment_id: &CommentId,
        comment: String,
    ) -> BoardResult<Comment> {
        let text = CommentText::new(comment).map_err(|_| BoardError::EmptyComment)?;

        let mut comment = self.owned_comment(author, post_id, comment_id).await?;
        comment.edit(text);
        self.comment_repo.update_comment(&comment).await?;

        tracing::info!(comment_id = %comment.comment_id, "Comment updated");

        Ok(comment)
    }

    pub async fn delete(
        &self,
        author: &Author,
        post_id: &PostId,
        comment_id: &CommentId,
    ) -> BoardResult<()> {
        let comment = self.owned_comment(author, post_id, comment_id).await?;
        self.comment_repo.delete_comment(&comment.comment_id).await?;

        tracing::info!(comment_id = %comment.comment_id, "Comment deleted");

        Ok(())
    }

    async fn ensure_post(&self, post_id: &PostId) -> BoardResult<()> {
        match self.post_repo.find_post(post_id).await? {
            Some(_) => Ok(()),
            None => Err(BoardError::PostNotFound),
        }
    }

    async fn owned_comment(
        &self,
        author: &Author,
        post_id: &PostId,
        comment_id: &CommentId,
    ) -> BoardResult<Comment> {
        self.ensure_post(post_id).await?;

        let comment = self
            .comment_repo
            .find_comment(comment_id)
            .await?
            .filter(|comment| comment.post_id == *post_id)
            .ok_or(BoardError::CommentNotFound)?;

        if !comment.is_written_by(author) {
            return Err(BoardError::NotAuthor);
        }
        Ok(comment)
    }
}
