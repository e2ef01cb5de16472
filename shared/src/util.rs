/// Current UTC time as Unix milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a public record identifier.
///
/// The same value is used as the store key and as the `<entity>_id` field,
/// so it never changes after creation.
pub fn new_public_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
