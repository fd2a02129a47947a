//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// Error classification shared by every crate.
///
/// Each variant maps to exactly one HTTP status code and one default
/// machine-readable code. Domain crates pick the kind that matches their
/// failure and may override the code (see [`AppError::with_code`]).
///
/// [`AppError::with_code`]: super::app_error::AppError::with_code
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.default_code(), "NotFound");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - caller input is malformed or conflicts with existing state
    BadRequest,
    /// 403 - missing or unknown API key
    Forbidden,
    /// 404 - target resource is absent
    NotFound,
    /// 429 - caller or store capacity exhausted
    TooManyRequests,
    /// 500 - anything the caller cannot fix
    InternalServerError,
}

impl ErrorKind {
    /// HTTP status code for this kind.
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::TooManyRequests => 429,
            ErrorKind::InternalServerError => 500,
        }
    }

    /// Default machine-readable code used in error bodies.
    #[inline]
    pub const fn default_code(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BadRequest",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::TooManyRequests => "TooManyRequests",
            ErrorKind::InternalServerError => "InternalServerError",
        }
    }

    /// Standard reason phrase.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }

    /// 5xx errors. These should be logged at `error` level.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 4xx errors.
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::Forbidden.status_code(), 403);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::TooManyRequests.status_code(), 429);
        assert_eq!(ErrorKind::InternalServerError.status_code(), 500);
    }

    #[test]
    fn test_default_codes_are_distinct() {
        let kinds = [
            ErrorKind::BadRequest,
            ErrorKind::Forbidden,
            ErrorKind::NotFound,
            ErrorKind::TooManyRequests,
            ErrorKind::InternalServerError,
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.default_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_client_server_split() {
        assert!(ErrorKind::BadRequest.is_client_error());
        assert!(ErrorKind::TooManyRequests.is_client_error());
        assert!(!ErrorKind::NotFound.is_server_error());
        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(!ErrorKind::InternalServerError.is_client_error());
    }
}
