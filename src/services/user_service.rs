//! User service - Handles user-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{User, UserWithPosts};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user
    async fn create_user(&self, email: String, name: String, admin: bool) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// List all users with their post summaries
    async fn list_users(&self) -> AppResult<Vec<UserWithPosts>>;

    /// Update user details; `None` leaves a field untouched
    async fn update_user(
        &self,
        id: i32,
        email: Option<String>,
        name: Option<String>,
        admin: Option<bool>,
    ) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, email: String, name: String, admin: bool) -> AppResult<User> {
        self.users.create(email, name, admin).await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or_not_found("User")
    }

    async fn list_users(&self) -> AppResult<Vec<UserWithPosts>> {
        self.users.list_with_posts().await
    }

    async fn update_user(
        &self,
        id: i32,
        email: Option<String>,
        name: Option<String>,
        admin: Option<bool>,
    ) -> AppResult<User> {
        self.users.update(id, email, name, admin).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.users.delete(id).await
    }
}
