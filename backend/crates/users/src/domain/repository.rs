//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.
//!
//! Every existence check happens inside the store's own conditional
//! primitive, so each method is atomic with respect to its key.

use crate::domain::entity::{user::User, user_patch::UserPatch};
use crate::domain::value_object::user_id::UserId;
use crate::error::UserResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert if absent. `AlreadyExists` on collision.
    async fn create(&self, user: &User) -> UserResult<User>;

    /// Point lookup. `NotFound` if absent.
    async fn get(&self, user_id: &UserId) -> UserResult<User>;

    /// Apply the patch if the record exists. An empty patch still
    /// requires the record. `NotFound` if absent.
    async fn update(&self, user_id: &UserId, patch: &UserPatch) -> UserResult<User>;

    /// Remove the record. `NotFound` if absent.
    async fn delete(&self, user_id: &UserId) -> UserResult<()>;
}
