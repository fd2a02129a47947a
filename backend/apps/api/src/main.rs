//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use std::any::Any;

use axum::body::Body;
use axum::response::{IntoResponse, Response};
use axum::{
    Router, http,
    http::{HeaderName, Method, Request, header},
};
use kernel::error::app_error::AppError;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use users::{InMemoryUserRepository, PgUserRepository, UserContext, users_router};

use crate::config::ServerConfig;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,users=info,platform=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Store selection: the context is built once and shared by every request
    let users = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            let ctx = UserContext::new(PgUserRepository::new(pool));
            users_router(ctx, config.users.clone())
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, using in-memory user store");
            let ctx = UserContext::new(InMemoryUserRepository::new());
            users_router(ctx, config.users.clone())
        }
    };

    let app = with_http_layers(users, &config.frontend_origins);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Wrap the router with CORS, request IDs, request tracing, and panic recovery.
fn with_http_layers(router: Router, frontend_origins: &[String]) -> Router {
    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            HeaderName::from_static(platform::api_key::API_KEY_HEADER),
        ]))
        .allow_credentials(true);

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let trace = TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("-");
        tracing::info_span!(
            "request",
            method = %req.method(),
            uri = %req.uri(),
            request_id = %request_id,
        )
    });

    // Last layer added runs first
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors)
}

/// Render a handler panic as a generic 500 without leaking the payload.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Request handler panicked");

    AppError::internal("An internal server error occurred").into_response()
}
