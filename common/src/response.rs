// Invocation response model shared by the Lambda handlers

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Response returned to the invoking runtime: a status code plus a
/// JSON-encoded body string, in the shape API Gateway proxy integrations
/// expect (`statusCode` key, stringified body).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
}

impl ApiResponse {
    /// 200 response carrying the greeting and the database server time
    pub fn success(time: DateTime<Utc>) -> Self {
        let body = serde_json::json!({
            "message": "Hello from API",
            "time": format_timestamp(time),
        });

        Self {
            status_code: 200,
            body: body.to_string(),
        }
    }

    /// 500 response carrying the failing operation's message verbatim
    pub fn error(message: &str) -> Self {
        let body = serde_json::json!({ "error": message });

        Self {
            status_code: 500,
            body: body.to_string(),
        }
    }
}

/// ISO-8601 with millisecond precision and `Z` suffix,
/// e.g. `2024-01-01T00:00:00.000Z`
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
