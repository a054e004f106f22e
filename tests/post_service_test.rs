//! Post service unit tests.
//!
//! Exercises author resolution by email: creation and reassignment go
//! through the users repository before the posts repository is touched.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;

use blog_api::domain::{Post, PostAuthor, PostWithAuthor, User};
use blog_api::errors::AppError;
use blog_api::infra::{MockPostRepository, MockUserRepository};
use blog_api::services::{PostManager, PostService};

fn test_author(id: i32) -> User {
    User {
        id,
        email: "author@example.com".to_string(),
        name: "Author".to_string(),
        admin: false,
    }
}

fn test_post(id: i32, author_id: i32) -> Post {
    Post {
        id,
        title: "Title".to_string(),
        content: "Content".to_string(),
        created_at: Utc::now(),
        author_id,
    }
}

#[tokio::test]
async fn test_create_post_resolves_author_by_email() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .withf(|email| email == "author@example.com")
        .returning(|_| Ok(Some(test_author(5))));

    let mut posts = MockPostRepository::new();
    posts
        .expect_create()
        .withf(|title, _, author_id| title == "Hello" && *author_id == 5)
        .returning(|title, content, author_id| {
            Ok(Post {
                id: 1,
                title,
                content,
                created_at: Utc::now(),
                author_id,
            })
        });

    let service = PostManager::new(Arc::new(posts), Arc::new(users));
    let result = service
        .create_post(
            "Hello".to_string(),
            "World".to_string(),
            "author@example.com".to_string(),
        )
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().author_id, 5);
}

#[tokio::test]
async fn test_create_post_with_unknown_author_fails() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));

    // Posts repository must never be reached
    let posts = MockPostRepository::new();

    let service = PostManager::new(Arc::new(posts), Arc::new(users));
    let result = service
        .create_post(
            "Hello".to_string(),
            "World".to_string(),
            "ghost@example.com".to_string(),
        )
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::NotFound(entity) => assert_eq!(entity, "Author"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_post_attaches_author_name_and_email() {
    let mut posts = MockPostRepository::new();
    posts.expect_find_with_author().with(eq(1)).returning(|id| {
        Ok(Some(PostWithAuthor {
            post: test_post(id, 5),
            author: PostAuthor {
                name: "Author".to_string(),
                email: Some("author@example.com".to_string()),
            },
        }))
    });

    let users = MockUserRepository::new();
    let service = PostManager::new(Arc::new(posts), Arc::new(users));
    let result = service.get_post(1).await;

    assert!(result.is_ok());
    let post = result.unwrap();
    assert_eq!(post.author.name, "Author");
    assert_eq!(post.author.email.as_deref(), Some("author@example.com"));
}

#[tokio::test]
async fn test_get_post_not_found() {
    let mut posts = MockPostRepository::new();
    posts.expect_find_with_author().returning(|_| Ok(None));

    let users = MockUserRepository::new();
    let service = PostManager::new(Arc::new(posts), Arc::new(users));
    let result = service.get_post(99).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::NotFound(entity) => assert_eq!(entity, "Post"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_posts_attaches_author_names_only() {
    let mut posts = MockPostRepository::new();
    posts.expect_list_with_authors().returning(|| {
        Ok(vec![PostWithAuthor {
            post: test_post(1, 5),
            author: PostAuthor {
                name: "Author".to_string(),
                email: None,
            },
        }])
    });

    let users = MockUserRepository::new();
    let service = PostManager::new(Arc::new(posts), Arc::new(users));
    let result = service.list_posts().await;

    assert!(result.is_ok());
    let list = result.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].author.name, "Author");
    assert!(list[0].author.email.is_none());
}

#[tokio::test]
async fn test_update_post_reassigns_author_when_email_present() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .withf(|email| email == "new@example.com")
        .returning(|_| Ok(Some(test_author(9))));

    let mut posts = MockPostRepository::new();
    posts
        .expect_update()
        .withf(|id, title, content, author_id| {
            *id == 1 && title.is_none() && content.is_none() && *author_id == Some(9)
        })
        .returning(|id, _, _, author_id| Ok(test_post(id, author_id.unwrap())));

    let service = PostManager::new(Arc::new(posts), Arc::new(users));
    let result = service
        .update_post(1, None, None, Some("new@example.com".to_string()))
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().author_id, 9);
}

#[tokio::test]
async fn test_update_post_without_email_leaves_author_untouched() {
    // Users repository must never be consulted
    let users = MockUserRepository::new();

    let mut posts = MockPostRepository::new();
    posts
        .expect_update()
        .withf(|id, title, _, author_id| {
            *id == 1 && title.as_deref() == Some("New title") && author_id.is_none()
        })
        .returning(|id, _, _, _| Ok(test_post(id, 5)));

    let service = PostManager::new(Arc::new(posts), Arc::new(users));
    let result = service
        .update_post(1, Some("New title".to_string()), None, None)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().author_id, 5);
}

#[tokio::test]
async fn test_update_post_with_unknown_author_fails() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(|_| Ok(None));

    let posts = MockPostRepository::new();

    let service = PostManager::new(Arc::new(posts), Arc::new(users));
    let result = service
        .update_post(1, None, None, Some("ghost@example.com".to_string()))
        .await;

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_post_success() {
    let mut posts = MockPostRepository::new();
    posts.expect_delete().with(eq(1)).returning(|_| Ok(()));

    let users = MockUserRepository::new();
    let service = PostManager::new(Arc::new(posts), Arc::new(users));
    let result = service.delete_post(1).await;

    assert!(result.is_ok());
}
