//! HTTP client for Big Cartel API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Big Cartel API.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::context::RequestContext;
use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, BigCartelConfig};
use crate::error::ConfigError;

/// Media type Big Cartel uses for both request and response bodies.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// HTTP client for making requests to the Big Cartel API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Static headers: `User-Agent`, `Accept`, `Content-Type`, `Authorization`
/// - Per-request timeout and cancellation via [`RequestContext`]
///
/// It never retries. Any status code is returned to the caller as an
/// [`HttpResponse`]; only transport failures become errors.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and holds no mutable state, so one instance
/// can serve any number of concurrent calls.
///
/// # Example
///
/// ```rust,ignore
/// use bigcartel_api::{BigCartelConfig, BasicAuth, UserAgent};
/// use bigcartel_api::clients::{HttpClient, RequestContext};
///
/// let config = BigCartelConfig::builder()
///     .user_agent(UserAgent::new("MyStoreSync (me@example.com)")?)
///     .credential(BasicAuth::from_credentials("mystore", "secret")?)
///     .build()?;
///
/// let client = HttpClient::new(&config)?;
/// let response = client.get("accounts", &RequestContext::default()).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// API root (e.g., `https://api.bigcartel.com/v1`).
    base_url: BaseUrl,
    /// Headers included in all requests.
    default_headers: HashMap<String, String>,
    /// Timeout applied when the context carries none.
    timeout: Duration,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Transport`] if no transport was supplied and the
    /// default rustls-backed one cannot be built.
    pub fn new(config: &BigCartelConfig) -> Result<Self, ConfigError> {
        let client = match config.http_client() {
            Some(client) => client.clone(),
            None => reqwest::Client::builder()
                .use_rustls_tls()
                .timeout(config.timeout())
                .build()
                .map_err(|e| ConfigError::Transport {
                    reason: e.to_string(),
                })?,
        };

        let mut default_headers = HashMap::new();
        default_headers.insert(
            "User-Agent".to_string(),
            config.user_agent().as_ref().to_string(),
        );
        default_headers.insert("Accept".to_string(), JSON_API_MEDIA_TYPE.to_string());
        default_headers.insert("Content-Type".to_string(), JSON_API_MEDIA_TYPE.to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.credential().header_value(),
        );

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
            timeout: config.timeout(),
        })
    }

    /// Returns the API base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the timeout used when a context carries none.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends a GET request to `path`, relative to the base URL.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get(&self, path: &str, ctx: &RequestContext) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.request(request, ctx).await
    }

    /// Sends a POST request with a JSON:API body to `path`.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        ctx: &RequestContext,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .build()?;
        self.request(request, ctx).await
    }

    /// Sends an HTTP request to the Big Cartel API.
    ///
    /// The whole body is read before returning.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error or timeout occurs (`Network`)
    /// - The context's token is cancelled first (`Cancelled`)
    pub async fn request(
        &self,
        request: HttpRequest,
        ctx: &RequestContext,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        if ctx.is_cancelled() {
            return Err(HttpError::Cancelled);
        }

        let url = self.base_url.join(&request.path);
        let timeout = ctx.timeout().unwrap_or(self.timeout);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }
        req_builder = req_builder.timeout(timeout);

        tracing::debug!(method = %request.http_method, %url, "Sending Big Cartel API request");

        let exchange = async {
            let res = req_builder.send().await?;
            let code = res.status().as_u16();
            let headers = Self::parse_response_headers(res.headers());
            let body = res.bytes().await?.to_vec();
            Ok::<_, reqwest::Error>(HttpResponse::new(code, headers, body))
        };

        let response = match ctx.cancellation() {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => {
                    tracing::debug!(%url, "Big Cartel API request cancelled");
                    return Err(HttpError::Cancelled);
                }
                result = exchange => result?,
            },
            None => exchange.await?,
        };

        tracing::debug!(
            method = %request.http_method,
            %url,
            status = response.code,
            "Received Big Cartel API response"
        );

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
