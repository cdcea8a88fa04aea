// Web application binary entry point
//
// Wraps the axum application in the Lambda runtime adapter: API Gateway
// events are translated to HTTP requests and routed like any other axum
// service, so the application itself stays runtime-agnostic.

mod handlers;
mod routes;

use common::telemetry;
use lambda_http::Error;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing/logging
    telemetry::init_logging("info")?;

    info!("Starting web handler");

    let app = routes::create_router();
    info!("Router initialized");

    lambda_http::run(app).await
}
