//! Application Context
//!
//! Built once at process start; owns the repository and hands it to each
//! use case. Cloning shares the same repository.

use std::sync::Arc;

use crate::application::{
    create_user::CreateUserUseCase, delete_user::DeleteUserUseCase, get_user::GetUserUseCase,
    update_user::UpdateUserUseCase,
};
use crate::domain::repository::UserRepository;

pub struct UserContext<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> Clone for UserContext<R>
where
    R: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R> UserContext<R>
where
    R: UserRepository,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    pub fn create_user(&self) -> CreateUserUseCase<R> {
        CreateUserUseCase::new(Arc::clone(&self.repo))
    }

    pub fn get_user(&self) -> GetUserUseCase<R> {
        GetUserUseCase::new(Arc::clone(&self.repo))
    }

    pub fn update_user(&self) -> UpdateUserUseCase<R> {
        UpdateUserUseCase::new(Arc::clone(&self.repo))
    }

    pub fn delete_user(&self) -> DeleteUserUseCase<R> {
        DeleteUserUseCase::new(Arc::clone(&self.repo))
    }
}
