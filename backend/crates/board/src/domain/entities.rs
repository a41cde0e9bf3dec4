//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};

use crate::domain::value_objects::{Author, CommentText, PostContent, PostTitle};

/// A board post
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub user_id: UserId,
    /// Author nickname at the time of writing
    pub nickname: String,
    pub title: PostTitle,
    pub content: PostContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(author: &Author, title: PostTitle, content: PostContent) -> Self {
        let now = Utc::now();
        Self {
            post_id: PostId::new(),
            user_id: author.user_id,
            nickname: author.nickname.clone(),
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_written_by(&self, author: &Author) -> bool {
        self.user_id == author.user_id
    }

    pub fn edit(&mut self, title: PostTitle, content: PostContent) {
        self.title = title;
        self.content = content;
        self.updated_at = Utc::now();
    }
}

/// A comment under a post
#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub nickname: String,
    pub comment: CommentText,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &Author, post_id: PostId, comment: CommentText) -> Self {
        let now = Utc::now();
        Self {
            comment_id: CommentId::new(),
            post_id,
            user_id: author.user_id,
            nickname: author.nickname.clone(),
            comment,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_written_by(&self, author: &Author) -> bool {
        self.user_id == author.user_id
    }

    pub fn edit(&mut self, comment: CommentText) {
        self.comment = comment;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(nickname: &str) -> Author {
        Author {
            user_id: UserId::new(),
            nickname: nickname.to_string(),
        }
    }

    #[test]
    fn test_post_authorship() {
        let alice = author("alice");
        let bob = author("bob");
        let post = Post::new(
            &alice,
            PostTitle::new("t").unwrap(),
            PostContent::new("c").unwrap(),
        );

        assert!(post.is_written_by(&alice));
        assert!(!post.is_written_by(&bob));
        assert_eq!(post.nickname, "alice");
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_edit_touches_updated_at() {
        let alice = author("alice");
        let mut comment = Comment::new(&alice, PostId::new(), CommentText::new("first").unwrap());
        let created_at = comment.created_at;

        comment.edit(CommentText::new("second").unwrap());

        assert_eq!(comment.comment.as_str(), "second");
        assert_eq!(comment.created_at, created_at);
        assert!(comment.updated_at >= created_at);
    }
}
