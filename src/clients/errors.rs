//! HTTP-specific error types for the Big Cartel API client.
//!
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all transport failures
//!
//! Non-2xx responses are not errors at this layer: the client hands back the
//! raw [`HttpResponse`](crate::clients::HttpResponse) and the resource layer
//! decides what a status means.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcartel_api::clients::{HttpClient, HttpError, RequestContext};
//!
//! match client.get("accounts", &RequestContext::default()).await {
//!     Ok(response) => println!("Status: {}", response.code),
//!     Err(HttpError::Network(e)) if e.is_timeout() => println!("Timed out"),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//!     Err(HttpError::Cancelled) => println!("Cancelled"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use bigcartel_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that forbids a body.
        method: String,
    },
}

/// Unified error type for all transport-level failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, TLS, or timeout error, surfaced as reported by `reqwest`.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The caller's cancellation token fired before the response arrived.
    #[error("Request was cancelled")]
    Cancelled,
}

impl HttpError {
    /// Returns `true` if the request hit its timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot use post without specifying data."
        );
    }

    #[test]
    fn test_invalid_request_error_unexpected_body() {
        let error = InvalidHttpRequestError::UnexpectedBody {
            method: "get".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot send a body with get.");
    }

    #[test]
    fn test_cancelled_is_not_timeout() {
        let error = HttpError::Cancelled;
        assert!(!error.is_timeout());
        assert_eq!(error.to_string(), "Request was cancelled");
    }

    #[test]
    fn test_invalid_request_converts_into_http_error() {
        let error: HttpError = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        }
        .into();
        assert!(matches!(error, HttpError::InvalidRequest(_)));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        let _ = invalid;

        let http: &dyn std::error::Error = &HttpError::Cancelled;
        let _ = http;
    }
}
