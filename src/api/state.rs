//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::{Database, PostStore, UserStore};
use crate::services::{PostManager, PostService, UserManager, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Post service
    pub post_service: Arc<dyn PostService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state wired to the database.
    ///
    /// This is the recommended way to create AppState: repositories are
    /// built over the connection and injected into the services.
    pub fn from_database(database: Arc<Database>) -> Self {
        let users: Arc<dyn crate::infra::UserRepository> =
            Arc::new(UserStore::new(database.get_connection()));
        let posts = Arc::new(PostStore::new(database.get_connection()));

        Self {
            user_service: Arc::new(UserManager::new(users.clone())),
            post_service: Arc::new(PostManager::new(posts, users)),
            database,
        }
    }

    /// Create new application state with manually injected services.
    ///
    /// Intended for tests that substitute mock services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        post_service: Arc<dyn PostService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            user_service,
            post_service,
            database,
        }
    }
}
