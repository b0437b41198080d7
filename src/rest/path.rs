//! Path building infrastructure for Big Cartel resources.
//!
//! Each resource declares a table of [`ResourcePath`]s. Nested resources such
//! as categories name their parent id in the template:
//! - `accounts/{account_id}/categories` (all categories of an account)
//! - `accounts/{account_id}/categories/{id}` (one category)
//!
//! The resolver selects the most specific path whose IDs are all available.
//!
//! # Example
//!
//! ```rust
//! use bigcartel_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use bigcartel_api::HttpMethod;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Find,
//!         &["account_id", "id"],
//!         "accounts/{account_id}/categories/{id}",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["account_id", "id"]).unwrap();
//! let url = build_path(path.template, &[("account_id", "42"), ("id", "7")]);
//! assert_eq!(url, "accounts/42/categories/7");
//! ```

use crate::clients::HttpMethod;

/// Operations that can be performed on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by ID (GET /resources/{id}).
    Find,
    /// List resources (GET /resources).
    All,
    /// Create a new resource (POST /resources/).
    Create,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
        }
    }
}

/// A path configuration for a resource operation.
///
/// Templates use `{id_name}` placeholders for ID interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method requests on this path are sent with.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order (e.g., `["account_id", "id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the most specific path for an operation whose IDs are all available.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL path from a template by interpolating IDs.
///
/// Values are percent-encoded so an id can never introduce extra path
/// segments.
///
/// # Example
///
/// ```rust
/// use bigcartel_api::rest::build_path;
///
/// assert_eq!(build_path("accounts/{id}", &[("id", "a/b")]), "accounts/a%2Fb");
/// ```
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
