//! Timestamp Value Object
//!
//! ISO-8601 date-time, with or without a UTC offset. The original text is
//! stored and echoed back byte-for-byte; parsing only guards the format.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{UserError, UserResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Parse a caller-supplied timestamp. `field` names it in the error.
    pub fn parse(value: impl Into<String>, field: &str) -> UserResult<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(UserError::Validation(format!("{} is required", field)));
        }

        if !is_iso_date_time(&value) {
            return Err(UserError::Validation(format!(
                "{} must be an ISO-8601 timestamp (e.g. 2024-01-01T00:00:00Z)",
                field
            )));
        }

        Ok(Self(value))
    }

    /// Current UTC time, millisecond precision, `Z` suffix
    pub fn now() -> Self {
        Self(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// RFC 3339, or a local date-time with no offset (`2024-01-01T00:00:00[.fff]`)
fn is_iso_date_time(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDateTime::parse_from_str(value, LOCAL_DATE_TIME).is_ok()
}

const LOCAL_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S%.f";

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
