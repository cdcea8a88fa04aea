// Invocation handler translating database results into API responses

use chrono::{DateTime, Utc};
use common::db::ServerClock;
use common::errors::DbError;
use common::response::ApiResponse;
use lambda_runtime::LambdaEvent;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Handles one invocation end to end
///
/// The handler never fails at its boundary: every outcome, including
/// connection and query errors, becomes an [`ApiResponse`] with status
/// 200 or 500.
pub struct RequestHandler {
    clock: Arc<dyn ServerClock>,
}

impl RequestHandler {
    /// Create a handler over the injected clock capability
    pub fn new(clock: Arc<dyn ServerClock>) -> Self {
        Self { clock }
    }

    /// Process one invocation event and produce the response
    ///
    /// The event payload is accepted for runtime compatibility and ignored;
    /// the response depends only on the database interaction.
    #[instrument(skip(self, event), fields(request_id = %event.context.request_id))]
    pub async fn handle(&self, event: LambdaEvent<Value>) -> ApiResponse {
        match self.fetch_server_time().await {
            Ok(now) => {
                info!(server_time = %now, "Invocation succeeded");
                ApiResponse::success(now)
            }
            Err(e) => {
                error!(error = %e, kind = e.kind(), "Invocation failed");
                ApiResponse::error(&e.to_string())
            }
        }
    }

    /// Acquire a connection, read the server time, release by drop
    async fn fetch_server_time(&self) -> Result<DateTime<Utc>, DbError> {
        let mut conn = self.clock.acquire().await?;
        let now = conn.fetch_now().await?;
        // Dropping `conn` here returns it to the pool on both paths
        Ok(now)
    }
}
