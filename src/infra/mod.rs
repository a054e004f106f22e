//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection management
//! - SeaORM entities and repositories
//! - Schema migrations

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{PostRepository, PostStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockPostRepository, MockUserRepository};
