//! Per-request timeout and cancellation.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Bounds a single API call.
///
/// The default context uses the client's configured timeout and cannot be
/// cancelled. Dropping the returned future also abandons the request.
///
/// # Example
///
/// ```rust
/// use bigcartel_api::clients::RequestContext;
/// use std::time::Duration;
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let ctx = RequestContext::new()
///     .with_timeout(Duration::from_secs(5))
///     .with_cancellation(token.clone());
///
/// assert_eq!(ctx.timeout(), Some(Duration::from_secs(5)));
/// token.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    timeout: Option<Duration>,
    cancellation: Option<CancellationToken>,
}

impl RequestContext {
    /// Creates a context that defers to the client's defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the client's timeout for this call.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Returns the timeout override, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the cancellation token, if any.
    #[must_use]
    pub const fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    /// Returns `true` if the attached token has already fired.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}
