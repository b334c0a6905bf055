//! Small helpers shared across crates

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a fresh v4 UUID string for use as a resource ID
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Check that a string parses as a UUID (route params, payload references)
pub fn is_uuid(value: &str) -> bool {
    uuid::Uuid::parse_str(value).is_ok()
}
