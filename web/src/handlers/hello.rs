use axum::Json;
use serde::Serialize;

/// Hello endpoint response payload
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: String,
}

/// Hello endpoint returning the fixed JSON greeting
#[tracing::instrument]
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from Axum API".to_string(),
    })
}
