//! User service unit tests.

use std::sync::Arc;

use mockall::predicate::eq;

use blog_api::domain::{PostSummary, User, UserWithPosts};
use blog_api::errors::AppError;
use blog_api::infra::MockUserRepository;
use blog_api::services::{UserManager, UserService};

fn create_test_user(id: i32) -> User {
    User {
        id,
        email: "test@example.com".to_string(),
        name: "Test User".to_string(),
        admin: false,
    }
}

#[tokio::test]
async fn test_create_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .with(
            eq("new@example.com".to_string()),
            eq("New User".to_string()),
            eq(false),
        )
        .returning(|email, name, admin| {
            Ok(User {
                id: 1,
                email,
                name,
                admin,
            })
        });

    let service = UserManager::new(Arc::new(repo));
    let result = service
        .create_user("new@example.com".to_string(), "New User".to_string(), false)
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.email, "new@example.com");
    assert!(!user.admin);
}

#[tokio::test]
async fn test_get_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(42))
        .returning(|id| Ok(Some(create_test_user(id))));

    let service = UserManager::new(Arc::new(repo));
    let result = service.get_user(42).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, 42);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = UserManager::new(Arc::new(repo));
    let result = service.get_user(42).await;

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
}

#[tokio::test]
async fn test_list_users_includes_post_summaries() {
    let mut repo = MockUserRepository::new();
    repo.expect_list_with_posts().returning(|| {
        Ok(vec![
            UserWithPosts {
                user: create_test_user(1),
                posts: vec![PostSummary {
                    title: "First post".to_string(),
                    created_at: chrono::Utc::now(),
                }],
            },
            UserWithPosts {
                user: create_test_user(2),
                posts: vec![],
            },
        ])
    });

    let service = UserManager::new(Arc::new(repo));
    let result = service.list_users().await;

    assert!(result.is_ok());
    let users = result.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].posts.len(), 1);
    assert_eq!(users[0].posts[0].title, "First post");
    assert!(users[1].posts.is_empty());
}

#[tokio::test]
async fn test_update_user_passes_partial_fields() {
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .withf(|id, email, name, admin| {
            *id == 7 && email.is_none() && name.as_deref() == Some("Renamed") && *admin == Some(true)
        })
        .returning(|id, _, name, admin| {
            Ok(User {
                id,
                email: "test@example.com".to_string(),
                name: name.unwrap(),
                admin: admin.unwrap(),
            })
        });

    let service = UserManager::new(Arc::new(repo));
    let result = service
        .update_user(7, None, Some("Renamed".to_string()), Some(true))
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.name, "Renamed");
    assert!(user.admin);
}

#[tokio::test]
async fn test_update_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .returning(|_, _, _, _| Err(AppError::not_found("User")));

    let service = UserManager::new(Arc::new(repo));
    let result = service
        .update_user(99, None, Some("Renamed".to_string()), None)
        .await;

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete().with(eq(3)).returning(|_| Ok(()));

    let service = UserManager::new(Arc::new(repo));
    let result = service.delete_user(3).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete()
        .returning(|_| Err(AppError::not_found("User")));

    let service = UserManager::new(Arc::new(repo));
    let result = service.delete_user(99).await;

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
}
