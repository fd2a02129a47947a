//! API-Key Middleware
//!
//! Requires a known `x-api-key` on every gated route and throttles each key
//! with its own token bucket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use platform::api_key::{API_KEY_HEADER, ApiKeySet};
use platform::rate_limit::{RateLimitConfig, RateLimitStore};

/// Middleware state
pub struct ApiKeyGate<S>
where
    S: RateLimitStore + Clone + Send + Sync + 'static,
{
    pub keys: Arc<ApiKeySet>,
    pub throttle: RateLimitConfig,
    pub store: S,
}

impl<S> Clone for ApiKeyGate<S>
where
    S: RateLimitStore + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            keys: Arc::clone(&self.keys),
            throttle: self.throttle,
            store: self.store.clone(),
        }
    }
}

impl<S> ApiKeyGate<S>
where
    S: RateLimitStore + Clone + Send + Sync + 'static,
{
    pub fn new(keys: ApiKeySet, throttle: RateLimitConfig, store: S) -> Self {
        Self {
            keys: Arc::new(keys),
            throttle,
            store,
        }
    }
}

/// Middleware that requires a valid API key within its throttle budget.
/// With no keys configured every request passes.
pub async fn require_api_key<S>(
    gate: ApiKeyGate<S>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: RateLimitStore + Clone + Send + Sync + 'static,
{
    if gate.keys.is_empty() {
        return Ok(next.run(req).await);
    }

    let key_id = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|presented| gate.keys.verify(presented));

    let Some(key_id) = key_id else {
        tracing::warn!(path = %req.uri().path(), "Missing or unknown API key");
        return Err(AppError::forbidden("Forbidden").into_response());
    };

    let result = match gate
        .store
        .check_and_increment(key_id.as_str(), &gate.throttle)
        .await
    {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, api_key = %key_id, "Throttle backend failed");
            return Err(AppError::internal("An internal server error occurred").into_response());
        }
    };

    if !result.allowed {
        tracing::warn!(
            api_key = %key_id,
            retry_after_ms = result.retry_after_ms,
            "API key throttled"
        );
        return Err(AppError::too_many_requests("Too many requests, please retry later")
            .with_code("Throttled")
            .with_retry_after(result.retry_after_secs())
            .into_response());
    }

    Ok(next.run(req).await)
}
