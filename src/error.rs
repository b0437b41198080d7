//! Error types for the Big Cartel API client.
//!
//! This module contains error types used for configuration and validation
//! errors. Request and resource errors live next to the code that produces
//! them in [`clients`](crate::clients) and [`rest`](crate::rest).
//!
//! # Example
//!
//! ```rust
//! use bigcartel_api::{UserAgent, ConfigError};
//!
//! let result = UserAgent::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUserAgent)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant carries a clear, actionable message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// User agent cannot be empty.
    #[error("User agent cannot be empty. Big Cartel requires a User-Agent identifying your application.")]
    EmptyUserAgent,

    /// Basic auth credential cannot be empty.
    #[error("Basic auth credential cannot be empty. Please provide your Big Cartel account credentials.")]
    EmptyCredential,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://api.bigcartel.com/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The HTTP transport could not be constructed.
    #[error("Failed to build HTTP transport: {reason}")]
    Transport {
        /// Why the transport could not be built.
        reason: String,
    },
}
