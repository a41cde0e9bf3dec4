//! PostgreSQL Repository Implementation
//!
//! `comments.post_id` references `posts` with `ON DELETE CASCADE`
//! (see `database/migrations`), so deleting a post removes its comments.

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Comment, Post};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_objects::{CommentText, PostContent, PostTitle};
use crate::error::{BoardError, BoardResult};

/// PostgreSQL-backed board repository
#[derive(Clone)]
pub struct PgBoardRepository {
    pool: PgPool,
}

impl PgBoardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgBoardRepository {
    async fn create_post(&self, post: &Post) -> BoardResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                user_id,
                nickname,
                title,
                content,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.user_id.as_uuid())
        .bind(&post.nickname)
        .bind(post.title.as_str())
        .bind(post.content.as_str())
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_posts(&self) -> BoardResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, user_id, nickname, title, content, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn find_post(&self, post_id: &PostId) -> BoardResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, user_id, nickname, title, content, created_at, updated_at
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn update_post(&self, post: &Post) -> BoardResult<()> {
        sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, content = $3, updated_at = $4
            WHERE post_id = $1
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.title.as_str())
        .bind(post.content.as_str())
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_post(&self, post_id: &PostId) -> BoardResult<()> {
        sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

impl CommentRepository for PgBoardRepository {
    async fn create_comment(&self, comment: &Comment) -> BoardResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (
                comment_id,
                post_id,
                user_id,
                nickname,
                comment,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.post_id.as_uuid())
        .bind(comment.user_id.as_uuid())
        .bind(&comment.nickname)
        .bind(comment.comment.as_str())
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            // Post deleted after the use case checked it
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                BoardError::PostNotFound
            }
            other => BoardError::Database(other),
        })?;

        Ok(())
    }

    async fn list_comments(&self, post_id: &PostId) -> BoardResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, post_id, user_id, nickname, comment, created_at, updated_at
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }

    async fn find_comment(&self, comment_id: &CommentId) -> BoardResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, post_id, user_id, nickname, comment, created_at, updated_at
            FROM comments
            WHERE comment_id = $1
            "#,
        )
        .bind(comment_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CommentRow::into_comment))
    }

    async fn update_comment(&self, comment: &Comment) -> BoardResult<()> {
        sqlx::query(
            r#"
            UPDATE comments
            SET comment = $2, updated_at = $3
            WHERE comment_id = $1
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.comment.as_str())
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_comment(&self, comment_id: &CommentId) -> BoardResult<()> {
        sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    user_id: Uuid,
    nickname: String,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            user_id: UserId::from_uuid(self.user_id),
            nickname: self.nickname,
            title: PostTitle::from_db(self.title),
            content: PostContent::from_db(self.content),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: Uuid,
    post_id: Uuid,
    user_id: Uuid,
    nickname: String,
    comment: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: CommentId::from_uuid(self.comment_id),
            post_id: PostId::from_uuid(self.post_id),
            user_id: UserId::from_uuid(self.user_id),
            nickname: self.nickname,
            comment: CommentText::from_db(self.comment),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
