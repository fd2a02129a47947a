//! Application Configuration
//!
//! API-key gate and per-key throttle settings for the users routes.

use platform::api_key::ApiKeySet;
use platform::rate_limit::RateLimitConfig;

/// Users application configuration
#[derive(Debug, Clone, Default)]
pub struct UsersConfig {
    /// Accepted API keys. Empty disables the gate.
    pub api_keys: ApiKeySet,
    /// Token bucket applied per API key
    pub throttle: RateLimitConfig,
}

impl UsersConfig {
    pub fn new(api_keys: ApiKeySet, throttle: RateLimitConfig) -> Self {
        Self { api_keys, throttle }
    }

    /// Config with the gate disabled (local development)
    pub fn open() -> Self {
        Self::default()
    }

    pub fn gate_enabled(&self) -> bool {
        !self.api_keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_open() {
        let config = UsersConfig::open();
        assert!(!config.gate_enabled());
        assert_eq!(config.throttle, RateLimitConfig::default());
    }

    #[test]
    fn test_gate_enabled_with_keys() {
        let config = UsersConfig::new(ApiKeySet::parse("k1,k2"), RateLimitConfig::new(5, 10));
        assert!(config.gate_enabled());
        assert_eq!(config.throttle.burst, 10);
    }
}
