//! Rate Limiting Infrastructure
//!
//! Token-bucket throttling: each key refills at `rate_per_second` and can
//! hold at most `burst` tokens. One request consumes one token.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Rate limit configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLimitConfig {
    /// Sustained requests per second
    pub rate_per_second: u32,
    /// Bucket capacity (short bursts above the sustained rate)
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            rate_per_second: 10,
            burst: 20,
        }
    }
}

impl RateLimitConfig {
    /// Both values are clamped to at least 1.
    pub fn new(rate_per_second: u32, burst: u32) -> Self {
        Self {
            rate_per_second: rate_per_second.max(1),
            burst: burst.max(1),
        }
    }
}

/// Rate limit check result
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitResult {
    pub allowed: bool,
    /// Whole tokens left after this request
    pub remaining: u32,
    /// Time until the next token is available (0 when allowed)
    pub retry_after_ms: u64,
}

impl RateLimitResult {
    /// `Retry-After` header value (whole seconds, at least 1)
    pub fn retry_after_secs(&self) -> u64 {
        self.retry_after_ms.div_ceil(1000).max(1)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Rate limit backend error: {0}")]
    Backend(String),
}

/// Trait for rate limit storage backends
#[trait_variant::make(RateLimitStore: Send)]
pub trait LocalRateLimitStore {
    /// Take one token for `key` if available
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, RateLimitError>;
}

#[derive(Debug, Clone, Copy)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

/// Process-local token buckets.
///
/// Buckets are only created for keys that passed the API key check, so the
/// map is bounded by the number of configured keys.
#[derive(Debug, Clone, Default)]
pub struct MemoryRateLimitStore {
    buckets: Arc<Mutex<HashMap<String, Bucket>>>,
}

impl MemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RateLimitStore for MemoryRateLimitStore {
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, RateLimitError> {
        let rate = f64::from(config.rate_per_second.max(1));
        let capacity = f64::from(config.burst.max(1));
        let now = Instant::now();

        let mut buckets = self.buckets.lock().await;
        let bucket = buckets.entry(key.to_string()).or_insert(Bucket {
            tokens: capacity,
            last_refill: now,
        });

        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.tokens = (bucket.tokens + elapsed * rate).min(capacity);
        bucket.last_refill = now;

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            return Ok(RateLimitResult {
                allowed: true,
                remaining: bucket.tokens.floor() as u32,
                retry_after_ms: 0,
            });
        }

        let missing = 1.0 - bucket.tokens;
        let retry_after_ms = ((missing / rate) * 1000.0).ceil() as u64;

        tracing::debug!(key, retry_after_ms, "Rate limit bucket empty");

        Ok(RateLimitResult {
            allowed: false,
            remaining: 0,
            retry_after_ms,
        })
    }
}
