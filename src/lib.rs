//! # Big Cartel API Rust Client
//!
//! An async client for the Big Cartel storefront API, providing type-safe
//! configuration, an authenticated JSON:API HTTP client, and typed decoding of
//! accounts and categories.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`BigCartelConfig`] and [`BigCartelConfigBuilder`]
//! - Validated newtypes for the user agent, Basic credential and base URL
//! - An async [`HttpClient`] that sends the `User-Agent`, JSON:API content
//!   negotiation and `Authorization` headers on every request
//! - Per-call timeouts and cancellation through [`RequestContext`]
//! - Typed resources ([`rest::resources::Account`], [`rest::resources::Category`])
//!   decoded from JSON:API documents, including related `included` objects
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcartel_api::{BigCartelConfig, BasicAuth, UserAgent};
//!
//! let config = BigCartelConfig::builder()
//!     .user_agent(UserAgent::new("StoreSync (ops@example.com)").unwrap())
//!     .credential(BasicAuth::from_credentials("mystore", "password").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Fetching Resources
//!
//! ```rust,ignore
//! use bigcartel_api::HttpClient;
//! use bigcartel_api::rest::resources::{Account, Category};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let account = Account::current(&client).await?;
//! println!("{} runs on {}", account.store_name, account.url);
//!
//! let categories = Category::all(&client, &account.id).await?;
//! let vinyl = Category::create(&client, &account.id, "Vinyl").await?;
//! ```
//!
//! ## Timeouts and Cancellation
//!
//! Every operation has a `*_with_context` variant:
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use bigcartel_api::RequestContext;
//! use tokio_util::sync::CancellationToken;
//!
//! let token = CancellationToken::new();
//! let ctx = RequestContext::new()
//!     .with_timeout(Duration::from_secs(5))
//!     .with_cancellation(token.clone());
//!
//! let account = Account::current_with_context(&client, &ctx).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Single round trip**: No retries, no caching

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, BasicAuth, BigCartelConfig, BigCartelConfigBuilder, UserAgent};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, RequestContext,
};

// Re-export resource error for convenience
pub use rest::ResourceError;
