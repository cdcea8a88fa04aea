use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Create the main application router with all routes and middleware
#[tracing::instrument]
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/api/hello", get(handlers::hello::hello))
        .route("/health", get(handlers::health::health_check))
        .layer(TraceLayer::new_for_http())
}
