// API handler binary entry point

use api::handler::RequestHandler;
use common::config::Settings;
use common::db::{DbPool, PgServerClock, ServerClock};
use common::response::ApiResponse;
use common::telemetry;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load configuration
    let settings = Settings::load()?;

    // Initialize tracing/logging
    telemetry::init_logging(&settings.observability.log_level)?;

    info!("Starting API handler");

    settings.validate().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        anyhow::anyhow!(e)
    })?;
    info!("Configuration loaded");

    // Initialize database connection pool
    //
    // The pool is lazy: the process comes up even when the database is
    // unreachable, and acquisition failures surface per invocation as
    // 500 responses instead of crashing the container.
    let db_pool = DbPool::new(&settings.database).map_err(|e| {
        error!(error = %e, "Failed to initialize database pool");
        e
    })?;
    info!("Database connection pool initialized");

    // Wire the handler with its injected capabilities
    let clock = Arc::new(PgServerClock::new(db_pool)) as Arc<dyn ServerClock>;
    let handler = Arc::new(RequestHandler::new(clock));
    info!("Request handler initialized");

    run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = Arc::clone(&handler);
        async move { Ok::<ApiResponse, Error>(handler.handle(event).await) }
    }))
    .await
}
