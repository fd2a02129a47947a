//! Lesson Completion Value Object
//!
//! One `{id, at}` entry of a user's progress list. Duplicates are allowed;
//! the list keeps the order the caller sent.

use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;
use crate::error::{UserError, UserResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonCompletion {
    /// Lesson identifier (opaque)
    pub id: String,
    /// When the lesson was completed
    pub at: Timestamp,
}

impl LessonCompletion {
    pub fn new(id: impl Into<String>, at: impl Into<String>) -> UserResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(UserError::Validation(
                "completed lesson id is required".to_string(),
            ));
        }

        Ok(Self {
            id,
            at: Timestamp::parse(at, "completed lesson at")?,
        })
    }
}
