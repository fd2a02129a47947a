//! Application Layer
//!
//! Use cases and the context that wires them to a repository.

pub mod config;
pub mod context;
pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod update_user;

// Re-exports
pub use config::UsersConfig;
pub use context::UserContext;
pub use create_user::{CreateUserInput, CreateUserUseCase};
pub use delete_user::DeleteUserUseCase;
pub use get_user::GetUserUseCase;
pub use update_user::{LessonInput, UpdateUserInput, UpdateUserUseCase};
