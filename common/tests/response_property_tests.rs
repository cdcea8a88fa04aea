// Property-based tests for the invocation response model

use chrono::{TimeZone, Utc};
use common::response::{format_timestamp, ApiResponse};
use proptest::prelude::*;
use serde_json::Value;

// Property: Error message fidelity
// For any message, the error body is valid JSON whose error field decodes
// back to the original message.
#[test]
fn property_error_body_round_trips_any_message() {
    proptest!(|(message in "\\PC{0,80}")| {
        // This property test validates that:
        // 1. The error body is always well-formed JSON
        // 2. Quotes, backslashes, and unicode survive encoding unchanged
        // 3. The status code is always 500

        let response = ApiResponse::error(&message);

        prop_assert_eq!(response.status_code, 500);

        let parsed: Value = serde_json::from_str(&response.body).unwrap();
        prop_assert_eq!(
            parsed["error"].as_str().unwrap(),
            message.as_str(),
            "Error message should survive the JSON round trip"
        );
    });
}

// Property: Timestamp format
// For any instant, the formatted timestamp has millisecond precision, a Z
// suffix, and parses back to the same millisecond.
#[test]
fn property_timestamp_format_is_stable() {
    proptest!(|(secs in 0..4_102_444_800i64, millis in 0..1000u32)| {
        // This property test validates that:
        // 1. The format is ISO-8601 with exactly three fractional digits
        // 2. The suffix is Z, never a numeric offset
        // 3. Parsing the string recovers the original instant

        let time = Utc.timestamp_opt(secs, millis * 1_000_000).unwrap();
        let formatted = format_timestamp(time);

        prop_assert!(formatted.ends_with('Z'), "Timestamp should end with Z: {}", formatted);

        let fraction = formatted
            .split('.')
            .nth(1)
            .expect("timestamp should have a fractional part");
        prop_assert_eq!(fraction.len(), 4, "Expected three digits plus Z: {}", formatted);

        let parsed = chrono::DateTime::parse_from_rfc3339(&formatted).unwrap();
        prop_assert_eq!(parsed.timestamp_millis(), time.timestamp_millis());
    });
}

// Property: Success body shape
// For any instant, the success body carries exactly the greeting and the
// formatted time.
#[test]
fn property_success_body_shape_is_fixed() {
    proptest!(|(secs in 0..4_102_444_800i64, millis in 0..1000u32)| {
        // This property test validates that:
        // 1. The body has exactly the message and time fields
        // 2. The greeting never varies
        // 3. The time field matches the formatter output

        let time = Utc.timestamp_opt(secs, millis * 1_000_000).unwrap();
        let response = ApiResponse::success(time);

        prop_assert_eq!(response.status_code, 200);

        let parsed: Value = serde_json::from_str(&response.body).unwrap();
        let object = parsed.as_object().unwrap();
        prop_assert_eq!(object.len(), 2);

        let formatted = format_timestamp(time);
        prop_assert_eq!(&parsed["message"], "Hello from API");
        prop_assert_eq!(&parsed["time"], formatted.as_str());
    });
}

// Property: Wire shape
// For any response, serialization uses the camelCase statusCode key and a
// string body, and deserialization restores an equal value.
#[test]
fn property_wire_shape_round_trips() {
    proptest!(|(message in "\\PC{0,40}")| {
        // This property test validates that:
        // 1. The serialized form has statusCode and body keys only
        // 2. No snake_case key leaks into the wire shape
        // 3. Deserializing the wire form restores the response

        let response = ApiResponse::error(&message);
        let wire = serde_json::to_value(&response).unwrap();

        let object = wire.as_object().unwrap();
        prop_assert_eq!(object.len(), 2);
        prop_assert!(object.contains_key("statusCode"));
        prop_assert!(object.contains_key("body"));
        prop_assert!(!object.contains_key("status_code"));

        let restored: ApiResponse = serde_json::from_value(wire).unwrap();
        prop_assert_eq!(restored, response);
    });
}
