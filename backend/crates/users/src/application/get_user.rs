//! Get User Use Case

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::UserResult;

pub struct GetUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> GetUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// `user_id` is already percent-decoded
    pub async fn execute(&self, user_id: &str) -> UserResult<User> {
        let user_id = UserId::new(user_id)?;
        self.repo.get(&user_id).await
    }
}
