//! User domain entity and related view types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::post::PostSummary;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    /// Defines if the user is an administrator
    pub admin: bool,
}

/// User with eager-loaded post summaries, returned by the list view
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserWithPosts {
    #[serde(flatten)]
    pub user: User,
    pub posts: Vec<PostSummary>,
}
