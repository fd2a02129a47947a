//! Create User Use Case
//!
//! Validates the request and inserts the profile if the userId is free.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, timestamp::Timestamp, user_id::UserId};
use crate::error::{UserError, UserResult};

const MISSING_REQUIRED_FIELDS: &str = "Missing required fields: userId and email are required";

/// Input for user creation
#[derive(Debug, Clone, Default)]
pub struct CreateUserInput {
    pub user_id: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
    /// Defaults to the current time when absent
    pub created_at: Option<String>,
    pub last_login_at: Option<String>,
}

/// Create user use case
pub struct CreateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateUserInput) -> UserResult<User> {
        if input.user_id.is_empty() || input.email.is_empty() {
            return Err(UserError::Validation(MISSING_REQUIRED_FIELDS.to_string()));
        }

        let user_id = UserId::new(input.user_id)?;
        let email = Email::new(input.email)?;

        // An empty string is the same as leaving the field out
        let created_at = match input.created_at.filter(|v| !v.is_empty()) {
            Some(value) => Timestamp::parse(value, "createdAt")?,
            None => Timestamp::now(),
        };
        let last_login_at = input
            .last_login_at
            .filter(|v| !v.is_empty())
            .map(|value| Timestamp::parse(value, "lastLoginAt"))
            .transpose()?;

        let user = User::new(user_id, email, created_at)
            .with_name(input.name)
            .with_picture(input.picture)
            .with_last_login_at(last_login_at);

        let created = self.repo.create(&user).await?;

        tracing::info!(user_id = %created.user_id, "User created");

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryUserRepository;

    fn input(user_id: &str, email: &str) -> CreateUserInput {
        CreateUserInput {
            user_id: user_id.to_string(),
            email: email.to_string(),
            created_at: Some("2024-01-01T00:00:00Z".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = CreateUserUseCase::new(Arc::clone(&repo));

        let created = use_case
            .execute(CreateUserInput {
                name: Some("Ann".to_string()),
                picture: Some(String::new()),
                ..input("u1", "a@b.com")
            })
            .await
            .unwrap();

        assert_eq!(created.user_id.as_str(), "u1");
        assert_eq!(created.email.as_str(), "a@b.com");
        assert_eq!(created.name.as_deref(), Some("Ann"));
        assert_eq!(created.picture, None);
        assert_eq!(created.created_at.as_str(), "2024-01-01T00:00:00Z");
        assert!(created.completed_lessons.is_empty());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_missing_required_fields_never_touch_store() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = CreateUserUseCase::new(Arc::clone(&repo));

        for (user_id, email) in [("", "a@b.com"), ("u1", ""), ("", "")] {
            let err = use_case.execute(input(user_id, email)).await.unwrap_err();
            assert!(matches!(err, UserError::Validation(_)));
            assert_eq!(err.message(), MISSING_REQUIRED_FIELDS);
        }
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_invalid_timestamp() {
        let use_case = CreateUserUseCase::new(Arc::new(InMemoryUserRepository::new()));

        let err = use_case
            .execute(CreateUserInput {
                last_login_at: Some("last tuesday".to_string()),
                ..input("u1", "a@b.com")
            })
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::Validation(_)));
    }

    #[tokio::test]
    async fn test_created_at_defaults_to_now() {
        let use_case = CreateUserUseCase::new(Arc::new(InMemoryUserRepository::new()));

        let created = use_case
            .execute(CreateUserInput {
                created_at: None,
                ..input("u1", "a@b.com")
            })
            .await
            .unwrap();
        assert!(Timestamp::parse(created.created_at.as_str(), "createdAt").is_ok());
    }

    #[tokio::test]
    async fn test_empty_timestamps_are_absent() {
        let use_case = CreateUserUseCase::new(Arc::new(InMemoryUserRepository::new()));

        let created = use_case
            .execute(CreateUserInput {
                created_at: Some(String::new()),
                last_login_at: Some(String::new()),
                ..input("u1", "a@b.com")
            })
            .await
            .unwrap();
        assert!(created.created_at.as_str().ends_with('Z'));
        assert_eq!(created.last_login_at, None);
    }

    #[tokio::test]
    async fn test_offsetless_created_at_is_kept() {
        let use_case = CreateUserUseCase::new(Arc::new(InMemoryUserRepository::new()));

        let created = use_case
            .execute(CreateUserInput {
                created_at: Some("2024-01-01T00:00:00".to_string()),
                ..input("u1", "a@b.com")
            })
            .await
            .unwrap();
        assert_eq!(created.created_at.as_str(), "2024-01-01T00:00:00");
    }

    #[tokio::test]
    async fn test_duplicate_user_id() {
        let use_case = CreateUserUseCase::new(Arc::new(InMemoryUserRepository::new()));

        use_case.execute(input("u1", "a@b.com")).await.unwrap();
        let err = use_case
            .execute(input("u1", "other@b.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::AlreadyExists));
    }
}
