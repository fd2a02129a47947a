//! Update User Use Case
//!
//! Builds a typed patch from the supplied fields. A single malformed lesson
//! entry rejects the whole patch before the store is touched.

use std::sync::Arc;

use crate::domain::entity::{user::User, user_patch::UserPatch};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    lesson_completion::LessonCompletion, timestamp::Timestamp, user_id::UserId,
};
use crate::error::{UserError, UserResult};

/// Raw lesson entry as received from the caller
#[derive(Debug, Clone, Default)]
pub struct LessonInput {
    pub id: Option<String>,
    pub at: Option<String>,
}

/// Input for user update
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub user_id: String,
    pub last_login_at: Option<String>,
    pub completed_lessons: Option<Vec<LessonInput>>,
}

pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdateUserInput) -> UserResult<User> {
        let user_id = UserId::new(input.user_id)?;
        let patch = build_patch(input.last_login_at, input.completed_lessons)?;

        let updated = self.repo.update(&user_id, &patch).await?;

        tracing::info!(
            user_id = %updated.user_id,
            last_login_at = patch.last_login_at.is_some(),
            completed_lessons = patch.completed_lessons.as_ref().map(Vec::len),
            "User updated"
        );

        Ok(updated)
    }
}

fn build_patch(
    last_login_at: Option<String>,
    completed_lessons: Option<Vec<LessonInput>>,
) -> UserResult<UserPatch> {
    let last_login_at = last_login_at
        .filter(|value| !value.is_empty())
        .map(|value| Timestamp::parse(value, "lastLoginAt"))
        .transpose()?;

    let completed_lessons = completed_lessons
        .map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| lesson_from_input(index, entry))
                .collect::<UserResult<Vec<_>>>()
        })
        .transpose()?;

    Ok(UserPatch {
        last_login_at,
        completed_lessons,
    })
}

fn lesson_from_input(index: usize, entry: LessonInput) -> UserResult<LessonCompletion> {
    let (Some(id), Some(at)) = (entry.id, entry.at) else {
        return Err(UserError::Validation(format!(
            "completedLessons[{}] requires id and at",
            index
        )));
    };

    LessonCompletion::new(id, at).map_err(|e| {
        UserError::Validation(format!("completedLessons[{}]: {}", index, e.message()))
    })
}
