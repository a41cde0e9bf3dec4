//! Post Use Case

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::{Author, PostContent, PostTitle};
use crate::error::{BoardError, BoardResult};

/// Post use case
pub struct PostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> PostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn create(&self, author: &Author, title: String, content: String) -> BoardResult<Post> {
        let (title, content) = validate(title, content)?;

        let post = Post::new(author, title, content);
        self.post_repo.create_post(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            user_id = %author.user_id,
            "Post created"
        );

        Ok(post)
    }

    pub async fn list(&self) -> BoardResult<Vec<Post>> {
        self.post_repo.list_posts().await
    }

    pub async fn get(&self, post_id: &PostId) -> BoardResult<Post> {
        self.post_repo
            .find_post(post_id)
            .await?
            .ok_or(BoardError::PostNotFound)
    }

    /// Checks run in order: payload, existence, authorship
    pub async fn update(
        &self,
        author: &Author,
        post_id: &PostId,
        title: String,
        content: String,
    ) -> BoardResult<Post> {
        let (title, content) = validate(title, content)?;

        let mut post = self.owned_post(author, post_id).await?;
        post.edit(title, content);
        self.post_repo.update_post(&post).await?;

        tracing::info!(post_id = %post.post_id, "Post updated");

        Ok(post)
    }

    pub async fn delete(&self, author: &Author, post_id: &PostId) -> BoardResult<()> {
        let post = self.owned_post(author, post_id).await?;
        self.post_repo.delete_post(&post.post_id).await?;

        tracing::info!(post_id = %post.post_id, "Post deleted");

        Ok(())
    }

    async fn owned_post(&self, author: &Author, post_id: &PostId) -> BoardResult<Post> {
        let post = self.get(post_id).await?;
        if !post.is_written_by(author) {
            return Err(BoardError::NotAuthor);
        }
        Ok(post)
    }
}

fn validate(title: String, content: String) -> BoardResult<(PostTitle, PostContent)> {
    let title = PostTitle::new(title).map_err(|_| BoardError::InvalidPayload)?;
    let content = PostContent::new(content).map_err(|_| BoardError::InvalidPayload)?;
    Ok((title, content))
}
