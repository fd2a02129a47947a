//! In-Memory Repository Implementation
//!
//! Process-local store used when no database is configured and in tests.
//! Every operation runs inside one write-lock critical section.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::{user::User, user_patch::UserPatch};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{UserError, UserResult};

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> UserResult<User> {
        let mut users = self.users.write().await;
        match users.entry(user.user_id.clone()) {
            Entry::Occupied(_) => Err(UserError::AlreadyExists),
            Entry::Vacant(slot) => Ok(slot.insert(user.clone()).clone()),
        }
    }

    async fn get(&self, user_id: &UserId) -> UserResult<User> {
        self.users
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or(UserError::NotFound)
    }

    async fn update(&self, user_id: &UserId, patch: &UserPatch) -> UserResult<User> {
        let mut users = self.users.write().await;
        let current = users.get_mut(user_id).ok_or(UserError::NotFound)?;
        *current = current.apply(patch);
        Ok(current.clone())
    }

    async fn delete(&self, user_id: &UserId) -> UserResult<()> {
        self.users
            .write()
            .await
            .remove(user_id)
            .map(|_| ())
            .ok_or(UserError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        email::Email, lesson_completion::LessonCompletion, timestamp::Timestamp,
    };

    fn user(id: &str) -> User {
        User::new(
            UserId::new(id).unwrap(),
            Email::new("a@b.com").unwrap(),
            Timestamp::parse("2024-01-01T00:00:00Z", "createdAt").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(&user("u1")).await.unwrap();
        let fetched = repo.get(&created.user_id).await.unwrap();
        assert_eq!(created, fetched);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_collision() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("u1")).await.unwrap();

        let mut other = user("u1");
        other.email = Email::new("other@b.com").unwrap();
        assert!(matches!(repo.create(&other).await, Err(UserError::AlreadyExists)));

        let stored = repo.get(&other.user_id).await.unwrap();
        assert_eq!(stored.email.as_str(), "a@b.com");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_have_one_winner() {
        let repo = InMemoryUserRepository::new();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(&user("u1")).await })
            })
            .collect();

        let mut ok = 0;
        let mut exists = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => ok += 1,
                Err(UserError::AlreadyExists) => exists += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(ok, 1);
        assert_eq!(exists, 15);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let repo = InMemoryUserRepository::new();
        let id = UserId::new("ghost").unwrap();

        assert!(matches!(
            repo.update(&id, &UserPatch::default()).await,
            Err(UserError::NotFound)
        ));
        assert!(matches!(repo.delete(&id).await, Err(UserError::NotFound)));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_replaces_lessons() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(&user("u1")).await.unwrap();

        let patch = UserPatch {
            last_login_at: None,
            completed_lessons: Some(vec![
                LessonCompletion::new("l1", "2024-02-01T00:00:00Z").unwrap(),
            ]),
        };
        let updated = repo.update(&created.user_id, &patch).await.unwrap();
        assert_eq!(updated.completed_lessons.len(), 1);

        let fetched = repo.get(&created.user_id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(&user("u1")).await.unwrap();

        repo.delete(&created.user_id).await.unwrap();
        assert!(matches!(repo.get(&created.user_id).await, Err(UserError::NotFound)));
        assert!(matches!(repo.delete(&created.user_id).await, Err(UserError::NotFound)));
    }
}
