//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use base64::prelude::*;
use std::fmt;

/// A validated `User-Agent` value.
///
/// Big Cartel asks every integration to identify itself, so the value must be
/// non-empty.
///
/// # Example
///
/// ```rust
/// use bigcartel_api::UserAgent;
///
/// let agent = UserAgent::new("MyStoreSync (me@example.com)").unwrap();
/// assert_eq!(agent.as_ref(), "MyStoreSync (me@example.com)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserAgent(String);

impl UserAgent {
    /// Creates a new validated user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUserAgent`] if the value is blank.
    pub fn new(agent: impl Into<String>) -> Result<Self, ConfigError> {
        let agent = agent.into();
        if agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }
        Ok(Self(agent))
    }
}

impl AsRef<str> for UserAgent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A Base64-encoded HTTP Basic credential.
///
/// Holds the `base64(username:password)` part of the `Authorization` header.
/// Use [`BasicAuth::new`] when the credential is already encoded (as Big
/// Cartel's dashboard hands it out) or [`BasicAuth::from_credentials`] to
/// encode a username and password pair.
///
/// # Security
///
/// The `Debug` implementation masks the credential, displaying only
/// `BasicAuth(*****)`.
///
/// # Example
///
/// ```rust
/// use bigcartel_api::BasicAuth;
///
/// let auth = BasicAuth::from_credentials("blackheaven", "hunter2").unwrap();
/// assert_eq!(auth.as_ref(), "YmxhY2toZWF2ZW46aHVudGVyMg==");
/// assert_eq!(format!("{:?}", auth), "BasicAuth(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth(String);

impl BasicAuth {
    /// Wraps an already encoded credential.
    ///
    /// A leading `Basic ` scheme prefix is tolerated and stripped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the credential is blank.
    pub fn new(encoded: impl Into<String>) -> Result<Self, ConfigError> {
        let encoded = encoded.into();
        let encoded = encoded.trim();
        let encoded = encoded.strip_prefix("Basic ").unwrap_or(encoded).trim();
        if encoded.is_empty() {
            return Err(ConfigError::EmptyCredential);
        }
        Ok(Self(encoded.to_string()))
    }

    /// Encodes a `username:password` pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the username is empty.
    pub fn from_credentials(username: &str, password: &str) -> Result<Self, ConfigError> {
        if username.is_empty() {
            return Err(ConfigError::EmptyCredential);
        }
        Ok(Self(BASE64_STANDARD.encode(format!("{username}:{password}"))))
    }

    /// Returns the full `Authorization` header value.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Basic {}", self.0)
    }
}

impl AsRef<str> for BasicAuth {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BasicAuth(*****)")
    }
}

/// A validated API base URL.
///
/// Only `http` and `https` URLs with a host are accepted. Trailing slashes are
/// removed so endpoint paths can be appended with a single `/`.
///
/// # Example
///
/// ```rust
/// use bigcartel_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.bigcartel.com/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.bigcartel.com/v1");
/// assert_eq!(url.host_name(), "api.bigcartel.com");
/// assert_eq!(url.join("/accounts"), "https://api.bigcartel.com/v1/accounts");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The production Big Cartel API root.
    pub const DEFAULT: &'static str = "https://api.bigcartel.com/v1";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme, no host, or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        if !matches!(&url[..scheme_end], "http" | "https") {
            return Err(invalid());
        }
        if url.contains(['?', '#']) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Appends an endpoint path, normalizing the separating slash.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.url.clone()
        } else {
            format!("{}/{}", self.url, path)
        }
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            host_start: "https://".len(),
            host_end: "https://api.bigcartel.com".len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
