//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{post_handler, user_handler};
use crate::domain::{Post, PostAuthor, PostSummary, PostWithAuthor, User, UserWithPosts};

/// OpenAPI documentation for the Blog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        version = "0.1.0",
        description = "Users and posts CRUD API with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Post endpoints
        post_handler::create_post,
        post_handler::list_posts,
        post_handler::get_post,
        post_handler::update_post,
        post_handler::delete_post,
    ),
    components(
        schemas(
            // Domain types
            User,
            UserWithPosts,
            Post,
            PostSummary,
            PostAuthor,
            PostWithAuthor,
            // Request types
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
            post_handler::CreatePostRequest,
            post_handler::UpdatePostRequest,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Posts", description = "Post management operations")
    )
)]
pub struct ApiDoc;
