//! Typed JSON:API documents.
//!
//! Big Cartel answers every call with a JSON:API document. This module parses
//! that envelope into [`Document`], [`ResourceObject`] and friends, and
//! indexes the `included` side-car array by `(type, id)` in [`Included`] so
//! relationships can be resolved by key.
//!
//! # Example
//!
//! ```rust
//! use bigcartel_api::rest::Document;
//!
//! let body = br#"{
//!     "data": {
//!         "id": "1",
//!         "type": "accounts",
//!         "attributes": {"url": "https://shop.bigcartel.com"},
//!         "relationships": {"currency": {"data": {"type": "currencies", "id": "USD"}}}
//!     },
//!     "included": [{"id": "USD", "type": "currencies", "attributes": {"sign": "$"}}]
//! }"#;
//!
//! let document = Document::from_slice(body).unwrap();
//! let account = document.primary().unwrap();
//! let included = document.included();
//!
//! let currency = included
//!     .resolve(account.relationship("currency"), "currencies")
//!     .unwrap();
//! assert_eq!(currency.id.as_deref(), Some("USD"));
//! ```

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// A top-level JSON:API document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    /// Primary data: a single resource object, a collection, or absent.
    #[serde(default)]
    pub data: Option<PrimaryData>,
    /// Related resource objects referenced from relationships.
    #[serde(default, deserialize_with = "null_as_default")]
    pub included: Vec<ResourceObject>,
    /// Error objects, present on failed requests.
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<ErrorObject>,
}

impl Document {
    /// Parses a document from a raw response body.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if the body is not a
    /// JSON:API document.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Returns the primary resource object.
    ///
    /// For a collection this is the first element; for a single resource it
    /// is `data` itself.
    #[must_use]
    pub fn primary(&self) -> Option<&ResourceObject> {
        match self.data.as_ref()? {
            PrimaryData::Many(objects) => objects.first(),
            PrimaryData::One(object) => Some(object.as_ref()),
        }
    }

    /// Returns every primary resource object in document order.
    #[must_use]
    pub fn primary_all(&self) -> Vec<&ResourceObject> {
        match &self.data {
            Some(PrimaryData::Many(objects)) => objects.iter().collect(),
            Some(PrimaryData::One(object)) => vec![object.as_ref()],
            None => Vec::new(),
        }
    }

    /// Builds a `(type, id)` index over the `included` array.
    #[must_use]
    pub fn included(&self) -> Included<'_> {
        Included::new(&self.included)
    }

    /// Returns the human-readable messages of any error objects.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().filter_map(ErrorObject::message).collect()
    }
}

/// The `data` member of a document.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    /// A collection response.
    Many(Vec<ResourceObject>),
    /// A single-resource response.
    One(Box<ResourceObject>),
}

/// A JSON:API resource object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceObject {
    /// The resource id. Numeric ids are accepted and stringified.
    #[serde(default, deserialize_with = "optional_id")]
    pub id: Option<String>,
    /// The resource type (e.g., `"accounts"`).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// The resource attributes, decoded later into a typed struct.
    #[serde(default)]
    pub attributes: Value,
    /// Named relationships to other resources.
    #[serde(default, deserialize_with = "null_as_default")]
    pub relationships: HashMap<String, Relationship>,
    /// Links related to this resource (e.g., `self`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: HashMap<String, Link>,
}

impl ResourceObject {
    /// Returns the id if present and non-empty.
    #[must_use]
    pub fn non_empty_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Returns the type if present and non-empty.
    #[must_use]
    pub fn non_empty_kind(&self) -> Option<&str> {
        self.kind.as_deref().filter(|kind| !kind.is_empty())
    }

    /// Returns a string attribute if present and non-empty.
    #[must_use]
    pub fn non_empty_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Returns a named relationship.
    #[must_use]
    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.get(name)
    }

    /// Returns the href of a named link.
    #[must_use]
    pub fn link(&self, name: &str) -> Option<&str> {
        self.links.get(name).map(Link::href)
    }
}

/// A relationship between two resources.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Relationship {
    /// Resource linkage. `None` when the `data` member is absent,
    /// `Some(None)` for an explicit `"data": null` (an empty to-one link).
    #[serde(default, deserialize_with = "present_or_null")]
    pub data: Option<Option<RelationshipData>>,
    /// Relationship links (`self`, `related`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: HashMap<String, Link>,
}

impl Relationship {
    /// Returns the single identifier of a to-one relationship.
    #[must_use]
    pub const fn identifier(&self) -> Option<&ResourceIdentifier> {
        match &self.data {
            Some(Some(RelationshipData::One(identifier))) => Some(identifier),
            _ => None,
        }
    }

    /// Returns `true` if the relationship carries a `data` member, even a null one.
    #[must_use]
    pub const fn has_linkage(&self) -> bool {
        self.data.is_some()
    }

    /// Returns the href of the `related` link.
    #[must_use]
    pub fn related(&self) -> Option<&str> {
        self.links.get("related").map(Link::href)
    }
}

/// Resource linkage of a relationship.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    /// To-many linkage.
    Many(Vec<ResourceIdentifier>),
    /// To-one linkage.
    One(ResourceIdentifier),
}

/// A `(type, id)` pair pointing at another resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ResourceIdentifier {
    /// The referenced type.
    #[serde(rename = "type")]
    pub kind: String,
    /// The referenced id.
    #[serde(deserialize_with = "required_id")]
    pub id: String,
}

/// A link, either a bare URL or a link object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Link {
    /// `"self": "https://..."`
    Href(String),
    /// `"self": {"href": "https://...", "meta": {...}}`
    Object {
        /// The link target.
        href: String,
        /// Non-standard meta information.
        #[serde(default)]
        meta: Option<Value>,
    },
}

impl Link {
    /// Returns the link target.
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Self::Href(href) | Self::Object { href, .. } => href,
        }
    }
}

/// A JSON:API error object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorObject {
    /// HTTP status, as a string.
    #[serde(default)]
    pub status: Option<String>,
    /// Short summary.
    #[serde(default)]
    pub title: Option<String>,
    /// Occurrence-specific explanation.
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorObject {
    /// Returns `detail`, falling back to `title`.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.detail.clone().or_else(|| self.title.clone())
    }
}

/// Index over a document's `included` array.
///
/// Lookups by `(type, id)` are exact. When a relationship carries no linkage,
/// [`Included::resolve`] falls back to the first object of the requested type.
#[derive(Debug, Clone)]
pub struct Included<'a> {
    objects: &'a [ResourceObject],
    by_key: HashMap<(&'a str, &'a str), &'a ResourceObject>,
}

impl<'a> Included<'a> {
    /// Indexes `objects`. Duplicate `(type, id)` keys keep the first entry.
    #[must_use]
    pub fn new(objects: &'a [ResourceObject]) -> Self {
        let mut by_key = HashMap::new();
        for object in objects {
            if let (Some(kind), Some(id)) = (object.kind.as_deref(), object.id.as_deref()) {
                by_key.entry((kind, id)).or_insert(object);
            }
        }
        Self { objects, by_key }
    }

    /// Looks up an object by type and id.
    #[must_use]
    pub fn get(&self, kind: &str, id: &str) -> Option<&'a ResourceObject> {
        self.by_key.get(&(kind, id)).copied()
    }

    /// Returns the first object of the given type, in document order.
    #[must_use]
    pub fn first_of_type(&self, kind: &str) -> Option<&'a ResourceObject> {
        self.objects
            .iter()
            .find(|object| object.kind.as_deref() == Some(kind))
    }

    /// Resolves a to-one relationship into its included object.
    ///
    /// With linkage, the `(type, id)` key decides: a key missing from
    /// `included` or a null linkage resolves to `None`. Without a `data`
    /// member, the first object whose type is `kind` is returned.
    #[must_use]
    pub fn resolve(
        &self,
        relationship: Option<&Relationship>,
        kind: &str,
    ) -> Option<&'a ResourceObject> {
        match relationship {
            Some(relationship) if relationship.has_linkage() => relationship
                .identifier()
                .and_then(|identifier| self.get(&identifier.kind, &identifier.id)),
            _ => self.first_of_type(kind),
        }
    }

    /// Returns `true` if nothing was included.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    String(String),
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<NumberOrString<serde_json::Number>>::deserialize(deserializer)? {
            Some(NumberOrString::Number(n)) => Some(n.to_string()),
            Some(NumberOrString::String(s)) => Some(s),
            None => None,
        },
    )
}

fn required_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional_id(deserializer)?.ok_or_else(|| de::Error::custom("resource identifier id is null"))
}

/// Deserializes a number that the API may also send as a numeric string.
pub(crate) fn lenient_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: Display,
{
    match NumberOrString::<T>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(de::Error::custom),
    }
}
