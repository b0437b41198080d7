//! Configuration types for the Big Cartel API client.
//!
//! This module provides the configuration used to build an
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`BigCartelConfig`]: The immutable configuration struct
//! - [`BigCartelConfigBuilder`]: A builder for constructing [`BigCartelConfig`] instances
//! - [`UserAgent`]: A validated `User-Agent` value
//! - [`BasicAuth`]: A Basic auth credential with masked debug output
//! - [`BaseUrl`]: A validated API root URL
//!
//! # Example
//!
//! ```rust
//! use bigcartel_api::{BigCartelConfig, BasicAuth, UserAgent};
//! use std::time::Duration;
//!
//! let config = BigCartelConfig::builder()
//!     .user_agent(UserAgent::new("MyStoreSync (me@example.com)").unwrap())
//!     .credential(BasicAuth::from_credentials("mystore", "secret").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.bigcartel.com/v1");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, BasicAuth, UserAgent};

use std::time::Duration;

use crate::error::ConfigError;

/// Timeout applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the Big Cartel API client.
///
/// Holds the API root, the identifying user agent, the Basic credential and
/// the request timeout. It is immutable once built.
///
/// # Thread Safety
///
/// `BigCartelConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use bigcartel_api::{BigCartelConfig, BaseUrl, BasicAuth, UserAgent};
///
/// let config = BigCartelConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8080/v1").unwrap())
///     .user_agent(UserAgent::new("tests").unwrap())
///     .credential(BasicAuth::new("dXNlcjpwYXNz").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().host_name(), "localhost");
/// ```
#[derive(Clone, Debug)]
pub struct BigCartelConfig {
    base_url: BaseUrl,
    user_agent: UserAgent,
    credential: BasicAuth,
    timeout: Duration,
    http_client: Option<reqwest::Client>,
}

impl BigCartelConfig {
    /// Creates a new builder for constructing a `BigCartelConfig`.
    #[must_use]
    pub fn builder() -> BigCartelConfigBuilder {
        BigCartelConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent.
    #[must_use]
    pub const fn user_agent(&self) -> &UserAgent {
        &self.user_agent
    }

    /// Returns the Basic auth credential.
    #[must_use]
    pub const fn credential(&self) -> &BasicAuth {
        &self.credential
    }

    /// Returns the default request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the caller-supplied transport, if any.
    #[must_use]
    pub const fn http_client(&self) -> Option<&reqwest::Client> {
        self.http_client.as_ref()
    }
}

// Verify BigCartelConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCartelConfig>();
};

/// Builder for constructing [`BigCartelConfig`] instances.
///
/// Required fields are `user_agent` and `credential`.
///
/// # Defaults
///
/// - `base_url`: `https://api.bigcartel.com/v1`
/// - `timeout`: 60 seconds (also used when a zero duration is given)
/// - `http_client`: a rustls-backed `reqwest::Client` built by the client
#[derive(Debug, Default)]
pub struct BigCartelConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent: Option<UserAgent>,
    credential: Option<BasicAuth>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl BigCartelConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent (required).
    #[must_use]
    pub fn user_agent(mut self, agent: UserAgent) -> Self {
        self.user_agent = Some(agent);
        self
    }

    /// Sets the Basic auth credential (required).
    #[must_use]
    pub fn credential(mut self, credential: BasicAuth) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Sets the default request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Supplies a pre-built transport.
    ///
    /// The configured timeout is still applied per request, so a client
    /// without its own timeout is bounded too.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`BigCartelConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `user_agent` or
    /// `credential` are not set.
    pub fn build(self) -> Result<BigCartelConfig, ConfigError> {
        let user_agent = self.user_agent.ok_or(ConfigError::MissingRequiredField {
            field: "user_agent",
        })?;
        let credential = self.credential.ok_or(ConfigError::MissingRequiredField {
            field: "credential",
        })?;

        let timeout = self
            .timeout
            .filter(|t| !t.is_zero())
            .unwrap_or(DEFAULT_TIMEOUT);

        Ok(BigCartelConfig {
            base_url: self.base_url.unwrap_or_default(),
            user_agent,
            credential,
            timeout,
            http_client: self.http_client,
        })
    }
}
