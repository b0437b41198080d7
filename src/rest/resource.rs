//! The fetch-and-decode contract shared by every resource.
//!
//! A resource implements [`JsonApiResource`]: its names, its path table, how
//! to recognise a present resource object, and how to map one into a typed
//! record. The free functions in this module ([`fetch_one`], [`fetch_all`],
//! [`create`]) then drive the round trip the same way for every type:
//!
//! 1. Resolve the path for the operation from the resource's table
//! 2. Send the request through [`HttpClient`]
//! 3. Check the status
//! 4. Parse the JSON:API [`Document`]
//! 5. Pick the primary resource object and validate its identifying fields
//! 6. Map it (plus anything it references in `included`) into the record
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use bigcartel_api::rest::{JsonApiResource, ResourceObject, Included, ResourceError};
//!
//! impl JsonApiResource for Product {
//!     const NAME: &'static str = "product";
//!     const TYPE: &'static str = "products";
//!     const PATHS: &'static [ResourcePath] = &[/* ... */];
//!
//!     fn is_present(object: &ResourceObject) -> bool {
//!         object.non_empty_id().is_some() && object.non_empty_attribute("name").is_some()
//!     }
//!
//!     fn from_resource(object: &ResourceObject, included: &Included<'_>) -> Result<Self, ResourceError> {
//!         /* ... */
//!     }
//! }
//! ```

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::clients::{HttpClient, HttpError, HttpRequest, HttpResponse, RequestContext};
use crate::rest::{
    build_path, get_path, Document, Included, ResourceError, ResourceObject, ResourceOperation,
    ResourcePath,
};

/// A Big Cartel resource decoded from JSON:API resource objects.
pub trait JsonApiResource: Sized + Send + Sync {
    /// The singular name used in error messages (e.g., "account").
    const NAME: &'static str;

    /// The JSON:API `type` of the resource (e.g., "accounts").
    const TYPE: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns `true` if `object` carries the fields that identify a resource
    /// of this type. Objects failing this check decode to
    /// [`ResourceError::NotFound`].
    fn is_present(object: &ResourceObject) -> bool;

    /// Maps a present resource object into the typed record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if attributes do not match the
    /// record's schema.
    fn from_resource(object: &ResourceObject, included: &Included<'_>)
        -> Result<Self, ResourceError>;

    /// Decodes the primary resource of a response body.
    ///
    /// For a collection document the first element is used.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] for malformed bodies and
    /// [`ResourceError::NotFound`] when no present resource object exists.
    fn decode_one(body: &[u8]) -> Result<Self, ResourceError> {
        let document = parse_document::<Self>(body)?;
        let object = document
            .primary()
            .filter(|object| Self::is_present(object))
            .ok_or(ResourceError::NotFound {
                resource: Self::NAME,
            })?;
        Self::from_resource(object, &document.included())
    }

    /// Decodes every primary resource of a response body, in order.
    ///
    /// An empty collection decodes to an empty vec.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] for malformed bodies and
    /// [`ResourceError::NotFound`] if any element lacks its identifying fields.
    fn decode_all(body: &[u8]) -> Result<Vec<Self>, ResourceError> {
        let document = parse_document::<Self>(body)?;
        let included = document.included();
        document
            .primary_all()
            .into_iter()
            .map(|object| {
                if Self::is_present(object) {
                    Self::from_resource(object, &included)
                } else {
                    Err(ResourceError::NotFound {
                        resource: Self::NAME,
                    })
                }
            })
            .collect()
    }
}

/// Deserializes a resource object's attributes into `T`.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] tagged with `resource` on mismatch.
pub fn decode_attributes<T: DeserializeOwned>(
    object: &ResourceObject,
    resource: &'static str,
) -> Result<T, ResourceError> {
    T::deserialize(&object.attributes).map_err(|source| ResourceError::Decode { resource, source })
}

/// Fetches a single resource and decodes it.
///
/// `Find` paths return the resource itself; `All` paths return a collection
/// whose first element is used.
///
/// # Errors
///
/// - [`ResourceError::Http`] for transport failures
/// - [`ResourceError::NotFound`] for 404s and documents without data
/// - [`ResourceError::UnexpectedStatus`] for other non-2xx statuses
/// - [`ResourceError::Decode`] for malformed bodies
pub async fn fetch_one<R: JsonApiResource>(
    client: &HttpClient,
    operation: ResourceOperation,
    ids: &[(&str, &str)],
    ctx: &RequestContext,
) -> Result<R, ResourceError> {
    let request = build_request::<R>(operation, ids, None)?;
    let path = request.path.clone();
    let response = client.request(request, ctx).await?;
    check_read_status::<R>(&response, &path)?;
    R::decode_one(&response.body)
}

/// Fetches a collection and decodes every element.
///
/// # Errors
///
/// Same as [`fetch_one`], except that an empty collection is not an error.
pub async fn fetch_all<R: JsonApiResource>(
    client: &HttpClient,
    ids: &[(&str, &str)],
    ctx: &RequestContext,
) -> Result<Vec<R>, ResourceError> {
    let request = build_request::<R>(ResourceOperation::All, ids, None)?;
    let path = request.path.clone();
    let response = client.request(request, ctx).await?;
    check_read_status::<R>(&response, &path)?;
    R::decode_all(&response.body)
}

/// Creates a resource from `attributes` and decodes the API's answer.
///
/// The request body is `{"data": {"type": R::TYPE, "attributes": ...}}`.
/// Anything other than `201 Created` is rejected, naming `target` (usually
/// the name of the resource being created) in the error.
///
/// # Errors
///
/// - [`ResourceError::Http`] for transport failures
/// - [`ResourceError::UnexpectedStatus`] when the status is not 201
/// - [`ResourceError::Decode`] / [`ResourceError::NotFound`] for bad bodies
pub async fn create<R: JsonApiResource>(
    client: &HttpClient,
    ids: &[(&str, &str)],
    attributes: Value,
    target: &str,
    ctx: &RequestContext,
) -> Result<R, ResourceError> {
    let body = json!({
        "data": {
            "type": R::TYPE,
            "attributes": attributes,
        }
    });
    let request = build_request::<R>(ResourceOperation::Create, ids, Some(body))?;

    let response = client.request(request, ctx).await?;
    if response.code != 201 {
        tracing::warn!(
            resource = R::NAME,
            target,
            status = response.code,
            "Big Cartel rejected create request"
        );
        return Err(ResourceError::unexpected_status(
            &response, R::NAME, "create", target, 201,
        ));
    }

    R::decode_one(&response.body)
}

fn parse_document<R: JsonApiResource>(body: &[u8]) -> Result<Document, ResourceError> {
    Document::from_slice(body).map_err(|source| ResourceError::Decode {
        resource: R::NAME,
        source,
    })
}

/// Resolves the operation's path and builds the request with the method the
/// path table declares for it.
fn build_request<R: JsonApiResource>(
    operation: ResourceOperation,
    ids: &[(&str, &str)],
    body: Option<Value>,
) -> Result<HttpRequest, ResourceError> {
    let available_ids: Vec<&str> = ids.iter().map(|(key, _)| *key).collect();
    let path = get_path(R::PATHS, operation, &available_ids).ok_or(
        ResourceError::PathResolutionFailed {
            resource: R::NAME,
            operation: operation.as_str(),
        },
    )?;

    let mut builder = HttpRequest::builder(path.http_method, build_path(path.template, ids));
    if let Some(body) = body {
        builder = builder.body(body);
    }
    builder
        .build()
        .map_err(|error| ResourceError::Http(HttpError::from(error)))
}

fn check_read_status<R: JsonApiResource>(
    response: &HttpResponse,
    path: &str,
) -> Result<(), ResourceError> {
    if response.is_ok() {
        return Ok(());
    }
    if response.code == 404 {
        tracing::debug!(resource = R::NAME, path, "Big Cartel resource not found");
        return Err(ResourceError::NotFound { resource: R::NAME });
    }

    tracing::warn!(
        resource = R::NAME,
        path,
        status = response.code,
        "Unexpected status from Big Cartel API"
    );
    Err(ResourceError::unexpected_status(
        response, R::NAME, "fetch", path, 200,
    ))
}
