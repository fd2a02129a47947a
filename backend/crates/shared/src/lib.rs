//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by every
//! crate in the workspace:
//! - Error classification ([`error::kind::ErrorKind`]) and its HTTP status mapping
//! - The transport-level error type ([`error::app_error::AppError`])
//! - The wire shape of error bodies (`{"error": <code>, "message": <text>}`)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
