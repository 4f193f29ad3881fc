//! Errors returned by the remote data source

use thiserror::Error;

/// Failure of a remote call
///
/// The `Display` output is what ends up in a slice's `error` field, so it
/// carries the server's error body verbatim whenever there is one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, connection reset, timeout)
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("{}", status_message(.status, .body))]
    Status { status: u16, body: String },

    /// The response body could not be decoded into the expected record
    #[error("invalid response: {0}")]
    Decode(String),
}

fn status_message(status: &u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        // mockapi answers errors with a JSON string literal, e.g. "Not found"
        match serde_json::from_str::<String>(body) {
            Ok(message) => message,
            Err(_) => body.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_with_body_is_verbatim() {
        let err = ApiError::Status {
            status: 500,
            body: "{\"message\":\"boom\"}".to_string(),
        };
        assert_eq!(err.to_string(), "{\"message\":\"boom\"}");
    }

    #[test]
    fn test_status_with_json_string_body_is_unquoted() {
        let err = ApiError::Status {
            status: 404,
            body: "\"Not found\"".to_string(),
        };
        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn test_status_without_body() {
        let err = ApiError::Status {
            status: 503,
            body: "  ".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn test_transport_message() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }
}
