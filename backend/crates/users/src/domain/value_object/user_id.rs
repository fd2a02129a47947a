//! User ID Value Object
//!
//! Opaque, caller-assigned identity of a profile (typically the subject of
//! the identity provider). Never trimmed or normalised: the stored key is
//! exactly what the caller sent.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{UserError, UserResult};

/// Maximum user ID length in bytes
const USER_ID_MAX_LENGTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user ID with validation
    pub fn new(value: impl Into<String>) -> UserResult<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(UserError::Validation("userId is required".to_string()));
        }

        if value.len() > USER_ID_MAX_LENGTH {
            return Err(UserError::Validation(format!(
                "userId must be at most {} bytes",
                USER_ID_MAX_LENGTH
            )));
        }

        Ok(Self(value))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
