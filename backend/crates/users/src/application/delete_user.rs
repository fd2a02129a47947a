//! Delete User Use Case

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::UserResult;

pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &str) -> UserResult<()> {
        let user_id = UserId::new(user_id)?;
        self.repo.delete(&user_id).await?;

        tracing::info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}
