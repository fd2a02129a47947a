//! User Entity
//!
//! A single profile record. Mutation happens by replacement: `apply`
//! returns a new record rather than editing in place.

use crate::domain::entity::user_patch::UserPatch;
use crate::domain::value_object::{
    email::Email, lesson_completion::LessonCompletion, timestamp::Timestamp, user_id::UserId,
};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Caller-assigned identity (primary key)
    pub user_id: UserId,
    /// Contact email
    pub email: Email,
    /// Display name
    pub name: Option<String>,
    /// Avatar URL
    pub picture: Option<String>,
    /// Set once at creation
    pub created_at: Timestamp,
    /// Last sign-in
    pub last_login_at: Option<Timestamp>,
    /// Progress, in insertion order
    pub completed_lessons: Vec<LessonCompletion>,
}

impl User {
    /// Create a new user with an empty progress list
    pub fn new(user_id: UserId, email: Email, created_at: Timestamp) -> Self {
        Self {
            user_id,
            email,
            name: None,
            picture: None,
            created_at,
            last_login_at: None,
            completed_lessons: Vec::new(),
        }
    }

    /// Set display name. Blank names are stored as absent.
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = non_empty(name);
        self
    }

    /// Set avatar URL. Blank values are stored as absent.
    pub fn with_picture(mut self, picture: Option<String>) -> Self {
        self.picture = non_empty(picture);
        self
    }

    pub fn with_last_login_at(mut self, last_login_at: Option<Timestamp>) -> Self {
        self.last_login_at = last_login_at;
        self
    }

    /// Return the record with the patch applied. Absent fields are untouched.
    pub fn apply(&self, patch: &UserPatch) -> User {
        let mut next = self.clone();
        if let Some(last_login_at) = &patch.last_login_at {
            next.last_login_at = Some(last_login_at.clone());
        }
        if let Some(lessons) = &patch.completed_lessons {
            next.completed_lessons = lessons.clone();
        }
        next
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new(
            UserId::new("u1").unwrap(),
            Email::new("a@b.com").unwrap(),
            Timestamp::parse("2024-01-01T00:00:00Z", "createdAt").unwrap(),
        )
    }

    fn lesson(id: &str) -> LessonCompletion {
        LessonCompletion::new(id, "2024-02-01T00:00:00Z").unwrap()
    }

    #[test]
    fn test_empty_optionals_are_dropped() {
        let user = user()
            .with_name(Some(String::new()))
            .with_picture(Some(String::new()));
        assert_eq!(user.name, None);
        assert_eq!(user.picture, None);

        let user = user.with_name(Some("Ann".to_string()));
        assert_eq!(user.name.as_deref(), Some("Ann"));
    }

    #[test]
    fn test_apply_last_login_only() {
        let mut base = user();
        base.completed_lessons = vec![lesson("l1")];

        let patch = UserPatch {
            last_login_at: Some(Timestamp::parse("2024-03-01T00:00:00Z", "lastLoginAt").unwrap()),
            completed_lessons: None,
        };
        let next = base.apply(&patch);

        assert_eq!(next.last_login_at.as_ref().map(|t| t.as_str()), Some("2024-03-01T00:00:00Z"));
        assert_eq!(next.completed_lessons, base.completed_lessons);
        assert_eq!(next.created_at, base.created_at);
    }

    #[test]
    fn test_apply_replaces_lessons_wholesale() {
        let mut base = user();
        base.completed_lessons = vec![lesson("l1"), lesson("l2")];

        let patch = UserPatch {
            last_login_at: None,
            completed_lessons: Some(vec![lesson("l3"), lesson("l3")]),
        };
        let next = base.apply(&patch);

        let ids: Vec<_> = next.completed_lessons.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["l3", "l3"]);
        assert_eq!(next.last_login_at, None);
    }

    #[test]
    fn test_apply_empty_patch_is_identity() {
        let base = user().with_name(Some("Ann".to_string()));
        assert_eq!(base.apply(&UserPatch::default()), base);
    }
}
