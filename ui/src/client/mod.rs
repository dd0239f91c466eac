//! Backend API Client
//!
//! One typed method per backend REST endpoint, all going through a single
//! configured [`ApiClient`]. Requests are single-attempt: no retries, no
//! timeout override, no cancellation. Callers own any retry policy.

mod http;

pub use http::{ApiClient, ObjectsQuery};

use thiserror::Error;

/// Error taxonomy for backend calls.
///
/// - `Connection`: no response was received (transport/network failure)
/// - `Request`: a non-2xx status, carrying the message extracted from the
///   response body when one was present
/// - `Decode`: the body of a 2xx response was not the expected JSON shape
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("{0}")]
    Request(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Pull a human-readable message out of an error response body.
///
/// The backend (FastAPI) reports failures as `{"detail": ...}`; some write
/// endpoints use `{"message": ...}`. Anything else falls back to the HTTP
/// status line.
pub(crate) fn extract_error_message(status: u16, status_text: &str, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        detail: Option<serde_json::Value>,
        #[serde(default)]
        message: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        match parsed.detail {
            Some(serde_json::Value::String(detail)) => return detail,
            Some(other) if !other.is_null() => return other.to_string(),
            _ => {}
        }
        if let Some(message) = parsed.message {
            return message;
        }
    }

    format!("HTTP {}: {}", status, status_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_detail_string() {
        let message = extract_error_message(
            400,
            "Bad Request",
            r#"{"detail":"confirm must match collection name"}"#,
        );
        assert_eq!(message, "confirm must match collection name");
    }

    #[test]
    fn extracts_message_field() {
        let message = extract_error_message(500, "Internal Server Error", r#"{"message":"boom"}"#);
        assert_eq!(message, "boom");
    }

    #[test]
    fn structured_detail_is_stringified() {
        let message =
            extract_error_message(422, "Unprocessable Entity", r#"{"detail":[{"loc":["port"]}]}"#);
        assert!(message.contains("port"));
    }

    #[test]
    fn falls_back_to_status_line() {
        let message = extract_error_message(502, "Bad Gateway", "<html>nope</html>");
        assert_eq!(message, "HTTP 502: Bad Gateway");

        let message = extract_error_message(404, "Not Found", "");
        assert_eq!(message, "HTTP 404: Not Found");
    }

    #[test]
    fn error_display_carries_the_message() {
        let err = ApiError::Request("object not found".into());
        assert_eq!(err.to_string(), "object not found");

        let err = ApiError::Connection("fetch aborted".into());
        assert_eq!(err.to_string(), "Connection failed: fetch aborted");
    }
}
