//! User Error Types
//!
//! The closed taxonomy every user operation fails with. Use cases
//! propagate these unchanged; only the handler boundary turns them into a
//! status code and a caller-visible message via `kernel::error::AppError`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// User-specific result type alias
pub type UserResult<T> = Result<T, UserError>;

/// Retry hint sent with store-level throttling
const STORE_THROTTLED_RETRY_AFTER_SECS: u64 = 1;

/// User-specific error variants
///
/// The `Display` text is for operators and may contain storage detail.
/// Callers only ever see [`UserError::code`] and [`UserError::message`].
#[derive(Debug, Error)]
pub enum UserError {
    /// Caller input is malformed
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Create collided with an existing userId
    #[error("User already exists")]
    AlreadyExists,

    /// Operation target is absent
    #[error("User not found")]
    NotFound,

    /// Store signalled capacity exhaustion
    #[error("Store throttled: {0}")]
    Throttled(String),

    /// Any other storage fault
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl UserError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            UserError::Validation(_) => "ValidationError",
            UserError::AlreadyExists => "AlreadyExists",
            UserError::NotFound => "NotFound",
            UserError::Throttled(_) => "Throttled",
            UserError::StoreUnavailable(_) => "StoreUnavailable",
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::Validation(_) | UserError::AlreadyExists => ErrorKind::BadRequest,
            UserError::NotFound => ErrorKind::NotFound,
            UserError::Throttled(_) => ErrorKind::TooManyRequests,
            UserError::StoreUnavailable(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Caller-visible message. Never contains storage detail.
    pub fn message(&self) -> String {
        match self {
            UserError::Validation(reason) => reason.clone(),
            UserError::AlreadyExists => "A user with this userId already exists".to_string(),
            UserError::NotFound => "User not found".to_string(),
            UserError::Throttled(_) => "Too many requests, please retry later".to_string(),
            UserError::StoreUnavailable(_) => "An internal service error occurred".to_string(),
        }
    }

    /// Whether the caller may retry the same request (with backoff)
    pub fn is_retryable(&self) -> bool {
        matches!(self, UserError::Throttled(_) | UserError::StoreUnavailable(_))
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.message()).with_code(self.code());
        match self {
            UserError::Throttled(_) => err.with_retry_after(STORE_THROTTLED_RETRY_AFTER_SECS),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        let kind = self.kind();
        if kind.is_server_error() {
            tracing::error!(code = self.code(), detail = %self, "User store unavailable");
        } else if matches!(self, UserError::Throttled(_)) {
            tracing::warn!(code = self.code(), detail = %self, "User store throttled");
        } else if kind.is_client_error() {
            tracing::warn!(code = self.code(), reason = %self.message(), "Domain error occurred");
        }
    }
}

/// The operator-facing `UserError` rides along as the source so storage
/// detail reaches logs but never the body.
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        err.to_app_error().with_source(err)
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

// ============================================================================
// Storage fault classification
// ============================================================================

impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut => UserError::Throttled(err.to_string()),
            sqlx::Error::Database(db_err) => {
                // PostgreSQL class 53: insufficient resources
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let capacity = db_err
                    .code()
                    .is_some_and(|code| code.as_ref().starts_with("53"));
                if capacity {
                    UserError::Throttled(err.to_string())
                } else {
                    UserError::StoreUnavailable(err.to_string())
                }
            }
            _ => UserError::StoreUnavailable(err.to_string()),
        }
    }
}
