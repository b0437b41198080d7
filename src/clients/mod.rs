//! HTTP client types for Big Cartel API communication.
//!
//! This module provides the transport layer: authenticated requests, raw
//! responses, and per-call timeout/cancellation.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client holding base URL, headers and transport
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response (status, headers, body bytes)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`RequestContext`]: Timeout override and cancellation token for one call
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcartel_api::clients::{HttpClient, RequestContext};
//!
//! let client = HttpClient::new(&config)?;
//! let response = client.get("accounts", &RequestContext::default()).await?;
//! println!("Status: {}", response.code);
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Every call is a single round trip; callers that want
//! resilience wrap these calls themselves.

mod context;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use context::RequestContext;
pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, JSON_API_MEDIA_TYPE};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
