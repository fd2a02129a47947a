//! Application Error - Transport-level error type
//!
//! Defines [`AppError`] and the wire shape [`ErrorBody`].

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::ErrorKind;

/// Transport-level error.
///
/// Domain crates convert their own typed errors into an `AppError` at the
/// handler boundary. It carries everything the response needs and nothing
/// more: the classification, a stable machine-readable code and a
/// user-facing message.
///
/// ## Fields
/// * `kind` - classification (maps to the HTTP status code)
/// * `code` - machine-readable code rendered as `error` in the body
/// * `message` - user-facing message rendered as `message` in the body
/// * `retry_after_secs` - optional `Retry-After` hint for throttled callers
/// * `source` - underlying error, for logs only
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::BadRequest, "userId is required").with_code("ValidationError");
/// assert_eq!(err.status_code(), 400);
/// assert_eq!(err.code(), "ValidationError");
/// ```
pub struct AppError {
    kind: ErrorKind,
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    retry_after_secs: Option<u64>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create an error with the kind's default code.
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            code: Cow::Borrowed(kind.default_code()),
            message: message.into(),
            retry_after_secs: None,
            source: None,
        }
    }

    /// 403 Forbidden
    #[inline]
    pub fn forbidden(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// 404 Not Found
    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// 429 Too Many Requests
    #[inline]
    pub fn too_many_requests(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::TooManyRequests, message)
    }

    /// 500 Internal Server Error
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Override the machine-readable code.
    #[inline]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Attach a `Retry-After` hint in seconds.
    #[inline]
    pub fn with_retry_after(mut self, secs: u64) -> Self {
        self.retry_after_secs = Some(secs);
        self
    }

    /// Attach the underlying error. Never rendered to the caller.
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn retry_after_secs(&self) -> Option<u64> {
        self.retry_after_secs
    }

    /// Body rendered to the caller.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.code.to_string(),
            message: self.message.to_string(),
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("code", &self.code);
        builder.field("message", &self.message);
        if let Some(secs) = self.retry_after_secs {
            builder.field("retry_after_secs", &secs);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.code, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_code() {
        let err = AppError::new(ErrorKind::NotFound, "User not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.code(), "NotFound");
        assert_eq!(err.message(), "User not found");
        assert!(err.retry_after_secs().is_none());
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(AppError::forbidden("test").status_code(), 403);
        assert_eq!(AppError::not_found("test").status_code(), 404);
        assert_eq!(AppError::too_many_requests("test").status_code(), 429);
        assert_eq!(AppError::internal("test").status_code(), 500);
    }

    #[test]
    fn test_with_code_and_body() {
        let err = AppError::new(ErrorKind::BadRequest, "A user with this userId already exists")
            .with_code("AlreadyExists");
        assert_eq!(
            err.body(),
            ErrorBody {
                error: "AlreadyExists".to_string(),
                message: "A user with this userId already exists".to_string(),
            }
        );
    }

    #[test]
    fn test_source_is_kept_out_of_body() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "connection reset by peer");
        let err = AppError::internal("Service unavailable").with_source(io_err);
        assert!(err.source().is_some());
        assert!(!err.body().message.contains("connection reset"));
    }

    #[test]
    fn test_display() {
        let err = AppError::not_found("User not found");
        assert_eq!(err.to_string(), "[Not Found] NotFound: User not found");
    }
}
