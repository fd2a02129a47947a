//! Users Router

use axum::body::Body;
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::{
    Router,
    routing::{get, post},
};
use platform::rate_limit::{MemoryRateLimitStore, RateLimitStore};

use crate::application::{UserContext, UsersConfig};
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, UsersAppState};
use crate::presentation::middleware::{ApiKeyGate, require_api_key};

/// Create the users router with process-local throttle buckets
pub fn users_router<R>(ctx: UserContext<R>, config: UsersConfig) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    users_router_with_limiter(ctx, config, MemoryRateLimitStore::new())
}

/// Create the users router with any throttle store
pub fn users_router_with_limiter<R, S>(
    ctx: UserContext<R>,
    config: UsersConfig,
    limiter: S,
) -> Router
where
    R: UserRepository + Send + Sync + 'static,
    S: RateLimitStore + Clone + Send + Sync + 'static,
{
    if !config.gate_enabled() {
        tracing::warn!("No API keys configured, /users routes are not gated");
    }

    let gate = ApiKeyGate::new(config.api_keys, config.throttle, limiter);
    let state = UsersAppState { ctx };

    let users = Router::new()
        .route("/users", post(handlers::create_user::<R>))
        .route(
            "/users/{user_id}",
            get(handlers::get_user::<R>)
                .put(handlers::update_user::<R>)
                .delete(handlers::delete_user::<R>),
        )
        .route_layer(middleware::from_fn(move |req: Request<Body>, next: Next| {
            require_api_key(gate.clone(), req, next)
        }));

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(users)
        .fallback(handlers::route_not_found)
        .with_state(state)
}
