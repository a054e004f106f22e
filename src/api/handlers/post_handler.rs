//! Post handlers.
//!
//! Posts are authored by reference to an existing user's email; the
//! service layer resolves it to a user ID and responds 404 when the
//! email does not match any user.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Post, PostWithAuthor};
use crate::errors::AppResult;

use crate::api::extractors::ValidatedJson;
use crate::api::state::AppState;

/// Post creation request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    /// Post title
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    #[schema(example = "Hello world")]
    pub title: String,
    /// Post body
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
    /// Email of the authoring user
    #[validate(email(message = "Invalid author email address"))]
    #[schema(example = "jane@example.com")]
    pub author_email: String,
}

/// Post update request; a present `author_email` reassigns the author
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePostRequest {
    /// New title
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    /// New body
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: Option<String>,
    /// Email of the new authoring user
    #[validate(email(message = "Invalid author email address"))]
    pub author_email: Option<String>,
}

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/:id", get(get_post).patch(update_post).delete(delete_post))
}

/// Create a new post
#[utoipa::path(
    post,
    path = "/posts",
    tag = "Posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created successfully", body = Post),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePostRequest>,
) -> AppResult<(StatusCode, Json<Post>)> {
    let post = state
        .post_service
        .create_post(payload.title, payload.content, payload.author_email)
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// List all posts with author names
#[utoipa::path(
    get,
    path = "/posts",
    tag = "Posts",
    responses(
        (status = 200, description = "List of all posts with authors", body = Vec<PostWithAuthor>)
    )
)]
pub async fn list_posts(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PostWithAuthor>>> {
    let posts = state.post_service.list_posts().await?;
    Ok(Json(posts))
}

/// Get post by ID with author name and email
#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "Posts",
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post with author details", body = PostWithAuthor),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PostWithAuthor>> {
    let post = state.post_service.get_post(id).await?;
    Ok(Json(post))
}

/// Update post
#[utoipa::path(
    patch,
    path = "/posts/{id}",
    tag = "Posts",
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated successfully", body = Post),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Post or author not found")
    )
)]
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdatePostRequest>,
) -> AppResult<Json<Post>> {
    let post = state
        .post_service
        .update_post(id, payload.title, payload.content, payload.author_email)
        .await?;

    Ok(Json(post))
}

/// Delete post
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "Posts",
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Post deleted successfully"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.post_service.delete_post(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
