//! Domain layer - Core business entities
//!
//! Plain business structs that represent users and posts independent
//! of infrastructure concerns. Repositories convert database rows into
//! these types; handlers serialize them back out.

pub mod post;
pub mod user;

pub use post::{Post, PostAuthor, PostSummary, PostWithAuthor};
pub use user::{User, UserWithPosts};
