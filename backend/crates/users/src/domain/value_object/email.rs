//! Email Value Object
//!
//! Contact address from the identity provider. Only presence and length
//! are checked here; the provider has already verified the address.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{UserError, UserResult};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> UserResult<Self> {
        let email = email.into();

        if email.is_empty() {
            return Err(UserError::Validation("email is required".to_string()));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(UserError::Validation(format!(
                "email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("a@b.com").is_ok());
        assert!(Email::new("User@Example.COM").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new(format!("{}@b.com", "a".repeat(EMAIL_MAX_LENGTH))).is_err());
    }

    #[test]
    fn test_email_is_not_normalised() {
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "User@Example.COM");
    }
}
