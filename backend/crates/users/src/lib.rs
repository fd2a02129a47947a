//! Users Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entity, value objects, repository trait
//! - `application/` - Use cases and the context that wires them
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, API-key middleware
//!
//! ## Consistency Model
//! - `userId` identifies at most one live profile
//! - Existence checks run inside the store's conditional write, never before it
//! - `createdAt` is written once; updates only touch `lastLoginAt` and `completedLessons`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{UserContext, UsersConfig};
pub use error::{UserError, UserResult};
pub use infra::{InMemoryUserRepository, PgUserRepository};
pub use presentation::router::{users_router, users_router_with_limiter};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, ErrorBody},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
