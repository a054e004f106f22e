//! Post repository implementation with author eager-loading.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use super::entities::post::{ActiveModel, Entity as PostEntity, Model as PostModel};
use super::entities::user::{Entity as UserEntity, Model as UserModel};
use crate::domain::{Post, PostAuthor, PostWithAuthor};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Post repository trait for dependency injection.
///
/// Author resolution by email lives in the service layer; repositories
/// only deal in already-resolved `author_id` values.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post for an existing author
    async fn create(&self, title: String, content: String, author_id: i32) -> AppResult<Post>;

    /// Find post by ID with its author attached (name and email)
    async fn find_with_author(&self, id: i32) -> AppResult<Option<PostWithAuthor>>;

    /// List all posts with author names attached
    async fn list_with_authors(&self) -> AppResult<Vec<PostWithAuthor>>;

    /// Update post fields; `None` leaves a field untouched
    async fn update(
        &self,
        id: i32,
        title: Option<String>,
        content: Option<String>,
        author_id: Option<i32>,
    ) -> AppResult<Post>;

    /// Delete post by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of PostRepository over SeaORM
pub struct PostStore {
    db: DatabaseConnection,
}

impl PostStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Join a post row with its author row into the combined view.
///
/// The FK guarantees an author exists; a missing row here means the
/// database is inconsistent.
fn with_author(
    post: PostModel,
    author: Option<UserModel>,
    include_email: bool,
) -> AppResult<PostWithAuthor> {
    let author = author.ok_or_else(|| AppError::internal("post row without author"))?;

    Ok(PostWithAuthor {
        post: Post::from(post),
        author: PostAuthor {
            name: author.name,
            email: include_email.then_some(author.email),
        },
    })
}

#[async_trait]
impl PostRepository for PostStore {
    async fn create(&self, title: String, content: String, author_id: i32) -> AppResult<Post> {
        let active_model = ActiveModel {
            title: Set(title),
            content: Set(content),
            created_at: Set(Utc::now()),
            author_id: Set(author_id),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Post::from(model))
    }

    async fn find_with_author(&self, id: i32) -> AppResult<Option<PostWithAuthor>> {
        let result = PostEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        match result {
            Some((post, author)) => Ok(Some(with_author(post, author, true)?)),
            None => Ok(None),
        }
    }

    async fn list_with_authors(&self) -> AppResult<Vec<PostWithAuthor>> {
        let rows = PostEntity::find()
            .find_also_related(UserEntity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        rows.into_iter()
            .map(|(post, author)| with_author(post, author, false))
            .collect()
    }

    async fn update(
        &self,
        id: i32,
        title: Option<String>,
        content: Option<String>,
        author_id: Option<i32>,
    ) -> AppResult<Post> {
        let post = PostEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("Post"))?;

        let mut active: ActiveModel = post.into();

        if let Some(title) = title {
            active.title = Set(title);
        }
        if let Some(content) = content {
            active.content = Set(content);
        }
        if let Some(author_id) = author_id {
            active.author_id = Set(author_id);
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Post::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Post"));
        }

        Ok(())
    }
}
