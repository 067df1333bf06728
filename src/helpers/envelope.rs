use serde::Serialize;
use serde_json::{json, Value};

/// Success envelope, the payload always serializes under "resp" (an empty
/// result list stays an empty array, never null).
pub fn ok<T: Serialize>(payload: &T) -> Value {
    json!({ "resp": payload })
}

/// Error envelope mirroring the HTTP status code it is paired with.
pub fn error(message: &str, status: u16) -> Value {
    json!({ "resp": { "error": message, "status": status } })
}
