//! Post domain entity and related view types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Post domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Foreign key to the authoring user
    pub author_id: i32,
}

/// Condensed post row, eager-loaded onto user list responses
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostSummary {
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Author fields attached to post views.
///
/// The list view carries only the name; the detail view also exposes
/// the author's email.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Post with its author resolved, returned by list and detail views
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostWithAuthor {
    #[serde(flatten)]
    pub post: Post,
    pub author: PostAuthor,
}
