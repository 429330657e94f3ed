//! Errors raised while talking to the content API.

use thiserror::Error;

/// Failure of a request against the content API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("API request failed: {}", display_status(.status, .status_text))]
    Http {
        /// HTTP status code.
        status: u16,
        /// Reason phrase sent by the server, possibly empty.
        status_text: String,
    },
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("Parse error: {0}")]
    Decode(String),
}

fn display_status(status: &u16, status_text: &str) -> String {
    if status_text.trim().is_empty() {
        status.to_string()
    } else {
        status_text.to_string()
    }
}

impl ApiError {
    /// Build an HTTP error from a status line.
    pub fn http(status: u16, status_text: impl Into<String>) -> Self {
        Self::Http {
            status,
            status_text: status_text.into(),
        }
    }

    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http {
                status, ..
            } => Some(*status),
            _ => None,
        }
    }

    /// True for a 404 answer.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Client errors won't change on retry, except timeouts and rate limits.
    pub fn is_retryable(&self) -> bool {
        match self.status() {
            Some(408) | Some(429) => true,
            Some(status) => !(400..500).contains(&status),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn http_error_uses_status_text_in_message() {
        let err = ApiError::http(500, "Internal Server Error");
        assert_eq!(err.to_string(), "API request failed: Internal Server Error");
    }

    #[test]
    fn http_error_falls_back_to_numeric_status() {
        let err = ApiError::http(502, "");
        assert_eq!(err.to_string(), "API request failed: 502");
    }

    #[test]
    fn client_errors_are_not_retried() {
        assert!(!ApiError::http(404, "Not Found").is_retryable());
        assert!(!ApiError::http(400, "Bad Request").is_retryable());
        assert!(ApiError::http(429, "Too Many Requests").is_retryable());
        assert!(ApiError::http(503, "Service Unavailable").is_retryable());
        assert!(ApiError::Network("offline".into()).is_retryable());
    }

    #[test]
    fn not_found_is_detected_only_for_404() {
        assert!(ApiError::http(404, "Not Found").is_not_found());
        assert!(!ApiError::Decode("bad json".into()).is_not_found());
    }
}
