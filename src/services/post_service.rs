//! Post service - Handles post-related use cases.
//!
//! Posts reference their author by email at the API boundary; this
//! service resolves the email to a user ID before touching the posts
//! repository, failing with not-found when no such user exists.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Post, PostWithAuthor};
use crate::errors::{AppResult, OptionExt};
use crate::infra::{PostRepository, UserRepository};

/// Post service trait for dependency injection.
#[async_trait]
pub trait PostService: Send + Sync {
    /// Create a new post, resolving the author by email
    async fn create_post(
        &self,
        title: String,
        content: String,
        author_email: String,
    ) -> AppResult<Post>;

    /// Get post by ID with author name and email attached
    async fn get_post(&self, id: i32) -> AppResult<PostWithAuthor>;

    /// List all posts with author names attached
    async fn list_posts(&self) -> AppResult<Vec<PostWithAuthor>>;

    /// Update post details; a present `author_email` reassigns the author
    async fn update_post(
        &self,
        id: i32,
        title: Option<String>,
        content: Option<String>,
        author_email: Option<String>,
    ) -> AppResult<Post>;

    /// Delete post by ID
    async fn delete_post(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of PostService.
pub struct PostManager {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostManager {
    /// Create new post service instance
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    /// Resolve an author email to a user ID, not-found on miss
    async fn resolve_author(&self, email: &str) -> AppResult<i32> {
        let user = self.users.find_by_email(email).await?.ok_or_not_found("Author")?;
        Ok(user.id)
    }
}

#[async_trait]
impl PostService for PostManager {
    async fn create_post(
        &self,
        title: String,
        content: String,
        author_email: String,
    ) -> AppResult<Post> {
        let author_id = self.resolve_author(&author_email).await?;
        self.posts.create(title, content, author_id).await
    }

    async fn get_post(&self, id: i32) -> AppResult<PostWithAuthor> {
        self.posts.find_with_author(id).await?.ok_or_not_found("Post")
    }

    async fn list_posts(&self) -> AppResult<Vec<PostWithAuthor>> {
        self.posts.list_with_authors().await
    }

    async fn update_post(
        &self,
        id: i32,
        title: Option<String>,
        content: Option<String>,
        author_email: Option<String>,
    ) -> AppResult<Post> {
        let author_id = match author_email {
            Some(email) => Some(self.resolve_author(&email).await?),
            None => None,
        };

        self.posts.update(id, title, content, author_id).await
    }

    async fn delete_post(&self, id: i32) -> AppResult<()> {
        self.posts.delete(id).await
    }
}
