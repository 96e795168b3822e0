//! Error types for the OpenSea API client.
//!
//! Every fallible operation in this crate returns [`Result`]. Errors are never
//! retried or swallowed implicitly; the first error encountered during a
//! paginated fetch ends the whole fetch.

use serde_json::Value;
use thiserror::Error;

use crate::client::DEFAULT_RETRY_STATUSES;

/// A specialized `Result` type for OpenSea operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all OpenSea API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a non-success status
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// Rate limited by the API
    #[error("Rate limited; retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Number of seconds to wait before retrying
        retry_after_secs: u64,
    },

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Pagination hit the configured page cap before an empty page
    #[error("Pagination exceeded {max_pages} pages without reaching an empty page")]
    PageLimitExceeded {
        /// The configured cap
        max_pages: u32,
    },

    /// The operation was cancelled through its cancellation token
    #[error("Operation cancelled")]
    Cancelled,
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// request could be retried.
    ///
    /// # Example
    ///
    /// ```
    /// use opensea_rs::Error;
    ///
    /// assert!(Error::Timeout.is_retryable());
    /// assert!(!Error::Cancelled.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self.status() {
            Some(status) => DEFAULT_RETRY_STATUSES.contains(&status),
            None => self.is_transient(),
        }
    }

    /// HTTP status carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::RateLimited { .. } => Some(429),
            Error::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Connection failures and timeouts, where no response was received.
    pub(crate) fn is_transient(&self) -> bool {
        match self {
            Error::Http(err) => err.is_connect() || err.is_timeout(),
            Error::Timeout => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::NotFound(_) | Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a response.
    ///
    /// OpenSea reports failures either as `{"detail": "..."}` or as
    /// `{"errors": ["..."]}`; both are folded into `message`.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let message = body
            .get("detail")
            .and_then(|m| m.as_str())
            .map(String::from)
            .or_else(|| {
                body.get("errors")
                    .and_then(|e| e.as_array())
                    .and_then(|e| e.first())
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| "Unknown API error".to_string());

        Error::Api {
            status,
            message,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        assert!(Error::Timeout.is_retryable());
        assert!(Error::RateLimited { retry_after_secs: 30 }.is_retryable());
        assert!(!Error::InvalidInput("bad".into()).is_retryable());
        assert!(!Error::PageLimitExceeded { max_pages: 3 }.is_retryable());
    }

    #[test]
    fn test_retryable_follows_default_statuses() {
        assert!(Error::from_api_response(502, serde_json::json!({})).is_retryable());
        assert!(!Error::from_api_response(501, serde_json::json!({})).is_retryable());
        assert!(!Error::NotFound("collection".into()).is_retryable());
        assert_eq!(Error::RateLimited { retry_after_secs: 1 }.status(), Some(429));
        assert_eq!(Error::Cancelled.status(), None);
    }

    #[test]
    fn test_error_classification() {
        let server = Error::from_api_response(503, serde_json::json!({}));
        assert!(server.is_server_error());
        assert!(server.is_retryable());
        assert!(!server.is_client_error());

        assert!(Error::NotFound("collection".into()).is_client_error());
        assert!(!Error::Cancelled.is_server_error());
    }

    #[test]
    fn test_from_api_response_detail() {
        let body = serde_json::json!({ "detail": "Invalid API key" });

        match Error::from_api_response(401, body) {
            Error::Api {
                status, message, ..
            } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_api_response_errors_array() {
        let body = serde_json::json!({ "errors": ["owner: not a valid address"] });

        match Error::from_api_response(400, body) {
            Error::Api { message, .. } => {
                assert_eq!(message, "owner: not a valid address");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }
}
