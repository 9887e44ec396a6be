//! Error types for admin API calls.

use thiserror::Error;

/// Errors that can occur while talking to the settings endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to connect to the server
    #[error("Connection failed to '{url}': {source}")]
    ConnectionError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded total timeout
    #[error("Request timeout after {duration}s")]
    RequestTimeout { duration: u64 },

    /// Server answered with a non-success status
    #[error("Server error: {status} - {message}")]
    StatusError { status: u16, message: String },

    /// Response body was not the expected JSON shape
    #[error("Invalid response from '{url}': {source}")]
    DecodeError {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Building the HTTP client failed
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl ApiError {
    /// Short text for the panel notice.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::ConnectionError { .. } => "Could not reach the server".to_string(),
            ApiError::RequestTimeout { .. } => "The server did not answer in time".to_string(),
            ApiError::StatusError {
                status: 401 | 403,
                ..
            } => "Permission denied".to_string(),
            ApiError::StatusError { status, message } => format!("{} ({})", message, status),
            ApiError::DecodeError { .. } => "Unexpected response from the server".to_string(),
            ApiError::Client(message) => message.clone(),
        }
    }

    /// Stable error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::ConnectionError { .. } => "connection_error",
            ApiError::RequestTimeout { .. } => "request_timeout",
            ApiError::StatusError { .. } => "status_error",
            ApiError::DecodeError { .. } => "decode_error",
            ApiError::Client(_) => "client_error",
        }
    }
}

/// Pull a human readable message out of an error body.
///
/// Accepts `{"error": {"message": ..}}`, `{"error": ".."}`, `{"detail": ..}`
/// and `{"message": ..}`; anything else is returned as raw text.
pub fn extract_error_message(body: &str) -> String {
    let trimmed = body.trim();
    let Ok(json) = serde_json::from_str::<serde_json::Value>(trimmed) else {
        return trimmed.to_string();
    };

    let candidates = [
        json.pointer("/error/message"),
        json.get("error"),
        json.pointer("/detail/error"),
        json.get("detail"),
        json.get("message"),
    ];

    let message = candidates
        .into_iter()
        .flatten()
        .find_map(|value| match value {
            serde_json::Value::String(text) => Some(text.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        });
    message.unwrap_or_else(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_error_message() {
        let body = r#"{"error": {"message": "Invalid value for 'max_budget'", "type": "bad_request"}}"#;
        assert_eq!(extract_error_message(body), "Invalid value for 'max_budget'");
    }

    #[test]
    fn test_detail_message() {
        assert_eq!(
            extract_error_message(r#"{"detail": "Not allowed"}"#),
            "Not allowed"
        );
        assert_eq!(
            extract_error_message(r#"{"detail": {"error": "Only admins"}}"#),
            "Only admins"
        );
    }

    #[test]
    fn test_plain_text_body() {
        assert_eq!(extract_error_message("  Bad Gateway \n"), "Bad Gateway");
    }

    #[test]
    fn test_permission_denied_message() {
        let err = ApiError::StatusError {
            status: 403,
            message: "nope".to_string(),
        };
        assert_eq!(err.user_message(), "Permission denied");
        assert_eq!(err.error_type(), "status_error");
    }

    #[test]
    fn test_status_message_includes_code() {
        let err = ApiError::StatusError {
            status: 422,
            message: "bad value".to_string(),
        };
        assert_eq!(err.user_message(), "bad value (422)");
    }
}
