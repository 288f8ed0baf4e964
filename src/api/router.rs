use axum::{
    extract::DefaultBodyLimit,
    http::HeaderName,
    middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::health;
use super::middleware::{
    handle_panic, logging::REQUEST_ID_HEADER, logging_middleware, metrics_middleware,
    security_headers_middleware, MAX_BODY_SIZE,
};
use super::state::AppState;
use super::users;
use crate::config::ServerConfig;

/// Create the full router with default server settings
pub fn create_router(state: AppState) -> Router {
    create_router_with_config(state, &ServerConfig::default())
}

/// Create the full router with application state
pub fn create_router_with_config(state: AppState, server: &ServerConfig) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // User directory
        .nest("/api/users", users::create_users_router())
        .with_state(state)
        // Innermost first
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    request_id_header.clone(),
                    MakeRequestUuid,
                ))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id_header))
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(TimeoutLayer::new(server.request_timeout())),
        )
}
