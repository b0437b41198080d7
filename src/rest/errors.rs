//! Resource-specific error types for Big Cartel API operations.
//!
//! The resource layer maps transport results and document contents to
//! semantic variants:
//!
//! - **Missing data / 404**: [`ResourceError::NotFound`], e.g. `no account data found`
//! - **Unparseable body**: [`ResourceError::Decode`]
//! - **Unexpected status**: [`ResourceError::UnexpectedStatus`] (a create that
//!   did not answer 201, or a read that failed with something other than 404)
//! - **Transport failure**: [`ResourceError::Http`], passed through unchanged
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcartel_api::rest::ResourceError;
//! use bigcartel_api::rest::resources::v1::Account;
//!
//! match Account::find(&client, "0").await {
//!     Ok(account) => println!("Found: {}", account.store_name),
//!     Err(ResourceError::NotFound { resource }) => println!("no {resource}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpError, HttpResponse};
use crate::rest::Document;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use bigcartel_api::rest::ResourceError;
///
/// let error = ResourceError::NotFound { resource: "account" };
/// assert_eq!(error.to_string(), "no account data found");
///
/// let error = ResourceError::UnexpectedStatus {
///     resource: "category",
///     operation: "create",
///     target: "Vinyl".to_string(),
///     code: 422,
///     expected: 201,
///     errors: vec!["Name has already been taken".to_string()],
///     request_id: None,
/// };
/// assert!(error.to_string().contains("create the category 'Vinyl'"));
/// assert!(error.to_string().contains("422"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The document carried no resource object with the identifying fields.
    ///
    /// Returned for empty collections, `data: null`, objects missing their
    /// `id` or identifying attribute, and 404 responses.
    #[error("no {resource} data found")]
    NotFound {
        /// The singular resource name (e.g., "account").
        resource: &'static str,
    },

    /// The body was not a valid JSON:API document for this resource.
    #[error("failed to decode {resource} response: {source}")]
    Decode {
        /// The singular resource name.
        resource: &'static str,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with a status other than the one the operation expects.
    #[error(
        "the request to {operation} the {resource} '{target}' was unsuccessful: status code {code}, expected {expected}"
    )]
    UnexpectedStatus {
        /// The singular resource name.
        resource: &'static str,
        /// The operation attempted (e.g., "create", "fetch").
        operation: &'static str,
        /// What was being operated on: a name for creates, a path for reads.
        target: String,
        /// The status code received.
        code: u16,
        /// The status code the operation expects.
        expected: u16,
        /// Messages from any JSON:API error objects in the body.
        errors: Vec<String>,
        /// The `X-Request-Id` header, if sent.
        request_id: Option<String>,
    },

    /// No path in the resource's table accepts the provided IDs.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The singular resource name.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// A transport-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Builds an `UnexpectedStatus` from a response, collecting error details.
    #[must_use]
    pub fn unexpected_status(
        response: &HttpResponse,
        resource: &'static str,
        operation: &'static str,
        target: impl Into<String>,
        expected: u16,
    ) -> Self {
        let errors = Document::from_slice(&response.body)
            .map(|doc| doc.error_messages())
            .unwrap_or_default();

        Self::UnexpectedStatus {
            resource,
            operation,
            target: target.into(),
            code: response.code,
            expected,
            errors,
            request_id: response.request_id().map(ToString::to_string),
        }
    }

    /// Returns `true` for the "no data found" condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::UnexpectedStatus { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}
