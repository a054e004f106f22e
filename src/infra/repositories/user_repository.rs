//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::post::Entity as PostEntity;
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{PostSummary, User, UserWithPosts};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user
    async fn create(&self, email: String, name: String, admin: bool) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users with their post summaries eager-loaded
    async fn list_with_posts(&self) -> AppResult<Vec<UserWithPosts>>;

    /// Update user fields; `None` leaves a field untouched
    async fn update(
        &self,
        id: i32,
        email: Option<String>,
        name: Option<String>,
        admin: Option<bool>,
    ) -> AppResult<User>;

    /// Delete user by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserRepository over SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, email: String, name: String, admin: bool) -> AppResult<User> {
        let active_model = ActiveModel {
            email: Set(email),
            name: Set(name),
            admin: Set(admin),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list_with_posts(&self) -> AppResult<Vec<UserWithPosts>> {
        let rows = UserEntity::find()
            .find_with_related(PostEntity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows
            .into_iter()
            .map(|(user, posts)| UserWithPosts {
                user: User::from(user),
                posts: posts.into_iter().map(PostSummary::from).collect(),
            })
            .collect())
    }

    async fn update(
        &self,
        id: i32,
        email: Option<String>,
        name: Option<String>,
        admin: Option<bool>,
    ) -> AppResult<User> {
        let user = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        let mut active: ActiveModel = user.into();

        if let Some(email) = email {
            active.email = Set(email);
        }
        if let Some(name) = name {
            active.name = Set(name);
        }
        if let Some(admin) = admin {
            active.admin = Set(admin);
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("User"));
        }

        Ok(())
    }
}
