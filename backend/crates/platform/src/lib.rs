//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Hashing and constant-time comparison (SHA-256)
//! - API key registry (opaque keys, compared by digest)
//! - Token-bucket throttling keyed by API key

pub mod api_key;
pub mod crypto;
pub mod rate_limit;
