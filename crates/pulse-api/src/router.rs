//! Route definitions for the Pulse HTTP API.
//!
//! Routes keep the reference interface's flat, camelCase paths. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    http::HeaderValue,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);

    Router::new()
        .merge(user_routes())
        .merge(session_routes())
        .merge(analytics_routes())
        .merge(status_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Registration endpoint.
fn user_routes() -> Router<AppState> {
    Router::new().route("/register", post(handlers::user::register))
}

/// Session recording endpoint.
fn session_routes() -> Router<AppState> {
    Router::new().route("/recordSession", post(handlers::session::record_session))
}

/// Activity analytics endpoints.
fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/totalActivity", get(handlers::analytics::total_activity))
        .route("/inactiveUsers", get(handlers::analytics::inactive_users))
        .route(
            "/monthlyActivity",
            get(handlers::analytics::monthly_activity),
        )
}

/// Derived status endpoints.
fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/userStatus", get(handlers::status::user_status))
        .route("/lastSessionDate", get(handlers::status::last_session_date))
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// CORS layer from configuration; `"*"` selects the permissive setup.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors.allowed_origins;

    if origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(parsed)
    }
}
