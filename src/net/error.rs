//! Error-message normalization for backend responses.
//!
//! The backend reports failures as JSON bodies carrying either a `detail`
//! field (validation and auth errors) or a `message` field. Callers always
//! receive a plain human-readable string they can render directly.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown when nothing better can be extracted from a failure.
pub const GENERIC_ERROR: &str = "An unexpected error occurred";

/// Extract a display message from an error response body.
///
/// Priority: structured `detail`, then structured `message`, then the
/// provided fallback.
pub fn message_from_body(body: &str, fallback: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message"] {
            if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
                if !text.is_empty() {
                    return text.to_owned();
                }
            }
        }
    }
    fallback.to_owned()
}

/// Fallback message for an HTTP error with an unusable body.
pub fn fallback_for_status(status: u16) -> String {
    format!("Request failed with status {status}")
}

/// Message for a transport-level failure (no response at all): the error's
/// own text, or the generic fallback if it has none.
pub fn from_transport(err: &impl std::fmt::Display) -> String {
    let text = err.to_string();
    if text.is_empty() { GENERIC_ERROR.to_owned() } else { text }
}
