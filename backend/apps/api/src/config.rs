//! Server Configuration
//!
//! Process settings read from the environment (after `.env` is loaded).

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use platform::api_key::ApiKeySet;
use platform::rate_limit::RateLimitConfig;
use users::UsersConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,https://speakhellenic.com,https://www.speakhellenic.com,https://development.d3v5vb4u9puz3w.amplifyapp.com";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Absent means the in-memory store
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    /// CORS allow-list
    pub frontend_origins: Vec<String>,
    pub users: UsersConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:3000")?;

        let database_max_connections = parse_or(
            var("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
            "DATABASE_MAX_CONNECTIONS",
        )?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let defaults = RateLimitConfig::default();
        let throttle = RateLimitConfig::new(
            parse_or(
                var("THROTTLE_RATE_PER_SEC"),
                defaults.rate_per_second,
                "THROTTLE_RATE_PER_SEC",
            )?,
            parse_or(var("THROTTLE_BURST"), defaults.burst, "THROTTLE_BURST")?,
        );

        let api_keys = var("API_KEYS")
            .map(|list| ApiKeySet::parse(&list))
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            database_url: var("DATABASE_URL"),
            database_max_connections,
            frontend_origins,
            users: UsersConfig::new(api_keys, throttle),
        })
    }
}

fn parse_or(value: Option<String>, default: u32, key: &str) -> anyhow::Result<u32> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a positive integer")),
        None => Ok(default),
    }
}
