//! User Patch
//!
//! Typed partial update. Each present field fully replaces the stored value.

use crate::domain::value_object::{lesson_completion::LessonCompletion, timestamp::Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub last_login_at: Option<Timestamp>,
    pub completed_lessons: Option<Vec<LessonCompletion>>,
}

impl UserPatch {
    /// No fields supplied
    pub fn is_empty(&self) -> bool {
        self.last_login_at.is_none() && self.completed_lessons.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(UserPatch::default().is_empty());

        let patch = UserPatch {
            last_login_at: None,
            completed_lessons: Some(Vec::new()),
        };
        assert!(!patch.is_empty());
    }
}
