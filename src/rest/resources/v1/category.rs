//! Category resource implementation.
//!
//! Categories group a store's products. They are nested under an account:
//!
//! - `GET accounts/{account_id}/categories`
//! - `GET accounts/{account_id}/categories/{id}`
//! - `POST accounts/{account_id}/categories/`
//!
//! The account id only routes the request; it is not stored on [`Category`].

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::{HttpClient, RequestContext};
use crate::rest::document::lenient_number;
use crate::rest::resource::{self, decode_attributes};
use crate::rest::{
    Included, JsonApiResource, ResourceError, ResourceObject, ResourceOperation, ResourcePath,
};
use crate::HttpMethod;

/// A product category of a store.
///
/// # Example
///
/// ```rust,ignore
/// use bigcartel_api::rest::resources::v1::Category;
///
/// for category in Category::all(&client, "4242").await? {
///     println!("{:>3} {} (/{})", category.position, category.name, category.permalink);
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// The category id.
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug within the store.
    pub permalink: String,
    /// Sort position.
    #[serde(deserialize_with = "lenient_number")]
    pub position: u32,
}

impl JsonApiResource for Category {
    const NAME: &'static str = "category";
    const TYPE: &'static str = "categories";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["account_id"],
            "accounts/{account_id}/categories",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["account_id", "id"],
            "accounts/{account_id}/categories/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["account_id"],
            "accounts/{account_id}/categories/",
        ),
    ];

    fn is_present(object: &ResourceObject) -> bool {
        object.non_empty_id().is_some() && object.non_empty_kind().is_some()
    }

    fn from_resource(
        object: &ResourceObject,
        _included: &Included<'_>,
    ) -> Result<Self, ResourceError> {
        let mut category: Self = decode_attributes(object, Self::NAME)?;
        category.id = object.id.clone().unwrap_or_default();
        Ok(category)
    }
}

impl Category {
    /// Lists every category of an account, in API order.
    ///
    /// An account without categories yields an empty vec.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] for an unknown account (404) or if
    /// any element lacks its id or type.
    pub async fn all(client: &HttpClient, account_id: &str) -> Result<Vec<Self>, ResourceError> {
        Self::all_with_context(client, account_id, &RequestContext::default()).await
    }

    /// Like [`Category::all`], bound to `ctx`.
    ///
    /// # Errors
    ///
    /// See [`Category::all`].
    pub async fn all_with_context(
        client: &HttpClient,
        account_id: &str,
        ctx: &RequestContext,
    ) -> Result<Vec<Self>, ResourceError> {
        resource::fetch_all(client, &[("account_id", account_id)], ctx).await
    }

    /// Retrieves one category of an account.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the category does not exist.
    pub async fn find(
        client: &HttpClient,
        account_id: &str,
        id: &str,
    ) -> Result<Self, ResourceError> {
        Self::find_with_context(client, account_id, id, &RequestContext::default()).await
    }

    /// Like [`Category::find`], bound to `ctx`.
    ///
    /// # Errors
    ///
    /// See [`Category::find`].
    pub async fn find_with_context(
        client: &HttpClient,
        account_id: &str,
        id: &str,
        ctx: &RequestContext,
    ) -> Result<Self, ResourceError> {
        resource::fetch_one(
            client,
            ResourceOperation::Find,
            &[("account_id", account_id), ("id", id)],
            ctx,
        )
        .await
    }

    /// Creates a category named `name` on an account.
    ///
    /// Sends `{"data": {"type": "categories", "attributes": {"name": ...}}}`
    /// and requires `201 Created`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedStatus`] naming the category and the
    /// received status for anything other than 201 (e.g., a 422 for a
    /// duplicate name).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let category = Category::create(&client, "4242", "Vinyl").await?;
    /// assert_eq!(category.name, "Vinyl");
    /// ```
    pub async fn create(
        client: &HttpClient,
        account_id: &str,
        name: &str,
    ) -> Result<Self, ResourceError> {
        Self::create_with_context(client, account_id, name, &RequestContext::default()).await
    }

    /// Like [`Category::create`], bound to `ctx`.
    ///
    /// # Errors
    ///
    /// See [`Category::create`].
    pub async fn create_with_context(
        client: &HttpClient,
        account_id: &str,
        name: &str,
        ctx: &RequestContext,
    ) -> Result<Self, ResourceError> {
        resource::create(
            client,
            &[("account_id", account_id)],
            json!({ "name": name }),
            name,
            ctx,
        )
        .await
    }
}
