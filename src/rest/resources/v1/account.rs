//! Account resource implementation.
//!
//! An API credential belongs to exactly one store, so `GET /accounts` returns
//! a collection holding the caller's own account. [`Account::current`] takes
//! its first element; [`Account::find`] fetches `accounts/{id}` directly.
//!
//! Currency, country, plan and image arrive as related resources in the
//! document's `included` array and are decoded into [`Currency`],
//! [`Country`], [`Plan`] and [`AccountImage`].
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcartel_api::rest::resources::v1::Account;
//!
//! let account = Account::current(&client).await?;
//! println!("{} ({})", account.store_name, account.url);
//! if let Some(plan) = &account.plan {
//!     println!("Plan: {} at {}", plan.name, plan.monthly_rate);
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, RequestContext};
use crate::rest::document::lenient_number;
use crate::rest::resource::{self, decode_attributes};
use crate::rest::resources::v1::Category;
use crate::rest::{
    Included, JsonApiResource, ResourceError, ResourceObject, ResourceOperation, ResourcePath,
};
use crate::HttpMethod;

/// A Big Cartel store account.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Account {
    /// The account id.
    pub id: String,
    /// The store subdomain (`{subdomain}.bigcartel.com`).
    pub subdomain: String,
    /// The public store name.
    pub store_name: String,
    /// The store description.
    pub description: Option<String>,
    /// The contact address shown to customers.
    pub contact_email: Option<String>,
    /// The owner's first name.
    pub first_name: Option<String>,
    /// The owner's last name.
    pub last_name: Option<String>,
    /// The store URL.
    pub url: String,
    /// An external website, if configured.
    pub website: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
    /// Whether the store is in maintenance mode.
    pub under_maintenance: bool,
    /// Whether inventory tracking is enabled.
    pub inventory_enabled: bool,
    /// Whether artists are enabled for products.
    pub artists_enabled: bool,
    /// The store's time zone name.
    pub time_zone: String,
    /// The store currency.
    pub currency: Option<Currency>,
    /// The store country.
    pub country: Option<Country>,
    /// The subscription plan.
    pub plan: Option<Plan>,
    /// The store logo.
    pub image: Option<AccountImage>,
    /// Links to the account and its collections.
    pub links: AccountLinks,
}

/// The currency a store sells in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Currency {
    /// ISO 4217 code (e.g., "USD").
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Symbol (e.g., "$").
    pub sign: String,
    /// Locale used to format amounts (e.g., "en-US").
    pub locale: String,
}

/// The country a store is based in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166 code (e.g., "US").
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub name: String,
}

/// A Big Cartel subscription plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// The plan id.
    #[serde(default)]
    pub id: String,
    /// Display name (e.g., "Platinum").
    pub name: String,
    /// Maximum number of products.
    #[serde(deserialize_with = "lenient_number")]
    pub max_products: u32,
    /// Maximum images per product.
    #[serde(deserialize_with = "lenient_number")]
    pub max_images_per_product: u32,
    /// Monthly price in the plan currency.
    #[serde(deserialize_with = "lenient_number")]
    pub monthly_rate: f64,
}

/// The store logo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountImage {
    /// The image id.
    #[serde(default)]
    pub id: String,
    /// The image URL.
    pub url: String,
}

/// Links published on an account resource object.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AccountLinks {
    /// The canonical URL of the account resource.
    pub self_link: Option<String>,
    /// The account's orders.
    pub orders: Option<String>,
    /// The account's categories.
    pub categories: Option<String>,
    /// The account's products.
    pub products: Option<String>,
}

#[derive(Deserialize)]
struct AccountAttributes {
    subdomain: String,
    store_name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    contact_email: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    url: String,
    #[serde(default)]
    website: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    under_maintenance: bool,
    inventory_enabled: bool,
    artists_enabled: bool,
    time_zone: String,
}

impl JsonApiResource for Account {
    const NAME: &'static str = "account";
    const TYPE: &'static str = "accounts";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "accounts"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "accounts/{id}",
        ),
    ];

    fn is_present(object: &ResourceObject) -> bool {
        object.non_empty_id().is_some() && object.non_empty_attribute("url").is_some()
    }

    fn from_resource(
        object: &ResourceObject,
        included: &Included<'_>,
    ) -> Result<Self, ResourceError> {
        let attributes: AccountAttributes = decode_attributes(object, Self::NAME)?;

        Ok(Self {
            id: object.id.clone().unwrap_or_default(),
            subdomain: attributes.subdomain,
            store_name: attributes.store_name,
            description: attributes.description,
            contact_email: attributes.contact_email,
            first_name: attributes.first_name,
            last_name: attributes.last_name,
            url: attributes.url,
            website: attributes.website,
            created_at: attributes.created_at,
            updated_at: attributes.updated_at,
            under_maintenance: attributes.under_maintenance,
            inventory_enabled: attributes.inventory_enabled,
            artists_enabled: attributes.artists_enabled,
            time_zone: attributes.time_zone,
            currency: related(object, included, "currency", "currencies")?,
            country: related(object, included, "country", "countries")?,
            plan: related(object, included, "plan", "plans")?,
            image: related(object, included, "image", "account_images")?,
            links: AccountLinks::from_resource(object),
        })
    }
}

impl AccountLinks {
    fn from_resource(object: &ResourceObject) -> Self {
        let related_link = |name: &str| {
            object
                .relationship(name)
                .and_then(|relationship| relationship.related())
                .or_else(|| object.link(name))
                .map(ToString::to_string)
        };

        Self {
            self_link: object.link("self").map(ToString::to_string),
            orders: related_link("orders"),
            categories: related_link("categories"),
            products: related_link("products"),
        }
    }
}

/// Decodes a to-one relationship from `included` into `T`, filling in the id.
fn related<T>(
    object: &ResourceObject,
    included: &Included<'_>,
    relationship: &str,
    kind: &str,
) -> Result<Option<T>, ResourceError>
where
    T: DeserializeOwned + WithId,
{
    let Some(target) = included.resolve(object.relationship(relationship), kind) else {
        return Ok(None);
    };

    let mut value: T = decode_attributes(target, Account::NAME)?;
    value.set_id(target.id.clone().unwrap_or_default());
    Ok(Some(value))
}

/// Records whose id lives on the resource object rather than in attributes.
trait WithId {
    fn set_id(&mut self, id: String);
}

macro_rules! impl_with_id {
    ($($ty:ty),*) => {
        $(impl WithId for $ty {
            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        })*
    };
}

impl_with_id!(Currency, Country, Plan, AccountImage);

impl Account {
    /// Retrieves the account the credential belongs to.
    ///
    /// Sends a GET request to `accounts` and decodes the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the response holds no account
    /// with an id and URL.
    pub async fn current(client: &HttpClient) -> Result<Self, ResourceError> {
        Self::current_with_context(client, &RequestContext::default()).await
    }

    /// Like [`Account::current`], bound to `ctx`.
    ///
    /// # Errors
    ///
    /// See [`Account::current`]. Cancellation surfaces as
    /// [`HttpError::Cancelled`](crate::clients::HttpError::Cancelled).
    pub async fn current_with_context(
        client: &HttpClient,
        ctx: &RequestContext,
    ) -> Result<Self, ResourceError> {
        resource::fetch_one(client, ResourceOperation::All, &[], ctx).await
    }

    /// Retrieves an account by id.
    ///
    /// Sends a GET request to `accounts/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] for unknown ids.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let account = Account::find(&client, "4242").await?;
    /// assert_eq!(account.id, "4242");
    /// ```
    pub async fn find(client: &HttpClient, id: &str) -> Result<Self, ResourceError> {
        Self::find_with_context(client, id, &RequestContext::default()).await
    }

    /// Like [`Account::find`], bound to `ctx`.
    ///
    /// # Errors
    ///
    /// See [`Account::find`].
    pub async fn find_with_context(
        client: &HttpClient,
        id: &str,
        ctx: &RequestContext,
    ) -> Result<Self, ResourceError> {
        resource::fetch_one(client, ResourceOperation::Find, &[("id", id)], ctx).await
    }

    /// Lists this account's categories.
    ///
    /// # Errors
    ///
    /// See [`Category::all`].
    pub async fn categories(&self, client: &HttpClient) -> Result<Vec<Category>, ResourceError> {
        self.categories_with_context(client, &RequestContext::default())
            .await
    }

    /// Like [`Account::categories`], bound to `ctx`.
    ///
    /// # Errors
    ///
    /// See [`Category::all`].
    pub async fn categories_with_context(
        &self,
        client: &HttpClient,
        ctx: &RequestContext,
    ) -> Result<Vec<Category>, ResourceError> {
        Category::all_with_context(client, &self.id, ctx).await
    }

    /// Retrieves one of this account's categories.
    ///
    /// # Errors
    ///
    /// See [`Category::find`].
    pub async fn category(&self, client: &HttpClient, id: &str) -> Result<Category, ResourceError> {
        self.category_with_context(client, id, &RequestContext::default())
            .await
    }

    /// Like [`Account::category`], bound to `ctx`.
    ///
    /// # Errors
    ///
    /// See [`Category::find`].
    pub async fn category_with_context(
        &self,
        client: &HttpClient,
        id: &str,
        ctx: &RequestContext,
    ) -> Result<Category, ResourceError> {
        Category::find_with_context(client, &self.id, id, ctx).await
    }

    /// Creates a category on this account.
    ///
    /// # Errors
    ///
    /// See [`Category::create`].
    pub async fn create_category(
        &self,
        client: &HttpClient,
        name: &str,
    ) -> Result<Category, ResourceError> {
        self.create_category_with_context(client, name, &RequestContext::default())
            .await
    }

    /// Like [`Account::create_category`], bound to `ctx`.
    ///
    /// # Errors
    ///
    /// See [`Category::create`].
    pub async fn create_category_with_context(
        &self,
        client: &HttpClient,
        name: &str,
        ctx: &RequestContext,
    ) -> Result<Category, ResourceError> {
        Category::create_with_context(client, &self.id, name, ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const ACCOUNT_DOCUMENT: &str = r#"{
        "data": [{
            "id": "4242",
            "type": "accounts",
            "links": {"self": "https://api.bigcartel.com/v1/accounts/4242"},
            "attributes": {
                "subdomain": "blackheaven",
                "store_name": "Blackheaven Records",
                "description": "Independent label and mail order",
                "contact_email": "orders@blackheaven.example",
                "first_name": "Ada",
                "last_name": "Moss",
                "url": "https://blackheaven.bigcartel.com",
                "website": "https://blackheaven.example",
                "created_at": "2019-03-02T17:04:11.000Z",
                "updated_at": "2024-11-20T08:30:00.000Z",
                "under_maintenance": false,
                "inventory_enabled": true,
                "artists_enabled": true,
                "time_zone": "Europe/Berlin"
            },
            "relationships": {
                "currency": {"data": {"type": "currencies", "id": "EUR"}},
                "country": {"data": {"type": "countries", "id": "DE"}},
                "plan": {"data": {"type": "plans", "id": "platinum"}},
                "orders": {"links": {"related": "https://api.bigcartel.com/v1/accounts/4242/orders"}},
                "categories": {"links": {"related": "https://api.bigcartel.com/v1/accounts/4242/categories"}},
                "products": {"links": {"related": "https://api.bigcartel.com/v1/accounts/4242/products"}}
            }
        }],
        "included": [
            {"id": "platinum", "type": "plans", "attributes": {
                "name": "Platinum", "max_products": 50,
                "max_images_per_product": 5, "monthly_rate": "9.99"}},
            {"id": "USD", "type": "currencies", "attributes": {
                "name": "U.S. Dollar", "sign": "$", "locale": "en-US"}},
            {"id": "EUR", "type": "currencies", "attributes": {
                "name": "Euro", "sign": "€", "locale": "de-DE"}},
            {"id": "DE", "type": "countries", "attributes": {"name": "Germany"}},
            {"id": "991", "type": "account_images", "attributes": {
                "url": "https://images.bigcartel.com/account_images/991/logo.png"}}
        ]
    }"#;

    #[test]
    fn test_account_decodes_attributes() {
        let account = Account::decode_one(ACCOUNT_DOCUMENT.as_bytes()).unwrap();

        assert_eq!(account.id, "4242");
        assert_eq!(account.subdomain, "blackheaven");
        assert_eq!(account.store_name, "Blackheaven Records");
        assert_eq!(account.url, "https://blackheaven.bigcartel.com");
        assert_eq!(account.website.as_deref(), Some("https://blackheaven.example"));
        assert_eq!(account.first_name.as_deref(), Some("Ada"));
        assert_eq!(account.time_zone, "Europe/Berlin");
        assert!(!account.under_maintenance);
        assert!(account.inventory_enabled);
        assert_eq!(
            account.created_at,
            Utc.with_ymd_and_hms(2019, 3, 2, 17, 4, 11).unwrap()
        );
    }

    #[test]
    fn test_account_resolves_included_by_linkage() {
        let account = Account::decode_one(ACCOUNT_DOCUMENT.as_bytes()).unwrap();

        // USD is listed first but the relationship points at EUR
        let currency = account.currency.unwrap();
        assert_eq!(currency.id, "EUR");
        assert_eq!(currency.sign, "€");

        assert_eq!(account.country.unwrap().name, "Germany");

        let plan = account.plan.unwrap();
        assert_eq!(plan.id, "platinum");
        assert_eq!(plan.max_products, 50);
        assert!((plan.monthly_rate - 9.99).abs() < f64::EPSILON);
    }

    #[test]
    fn test_account_falls_back_to_first_included_of_type() {
        let account = Account::decode_one(ACCOUNT_DOCUMENT.as_bytes()).unwrap();

        let image = account.image.unwrap();
        assert_eq!(image.id, "991");
        assert!(image.url.ends_with("logo.png"));
    }

    #[test]
    fn test_account_null_image_linkage_is_none() {
        let body = ACCOUNT_DOCUMENT.replace(
            r#""plan": {"data": {"type": "plans", "id": "platinum"}},"#,
            r#""plan": {"data": {"type": "plans", "id": "platinum"}}, "image": {"data": null},"#,
        );

        let account = Account::decode_one(body.as_bytes()).unwrap();
        assert_eq!(account.image, None);
        assert!(account.plan.is_some());
    }

    #[test]
    fn test_account_maps_every_field() {
        let expected = Account {
            id: "4242".to_string(),
            subdomain: "blackheaven".to_string(),
            store_name: "Blackheaven Records".to_string(),
            description: Some("Independent label and mail order".to_string()),
            contact_email: Some("orders@blackheaven.example".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: Some("Moss".to_string()),
            url: "https://blackheaven.bigcartel.com".to_string(),
            website: Some("https://blackheaven.example".to_string()),
            created_at: Utc.with_ymd_and_hms(2019, 3, 2, 17, 4, 11).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 11, 20, 8, 30, 0).unwrap(),
            under_maintenance: false,
            inventory_enabled: true,
            artists_enabled: true,
            time_zone: "Europe/Berlin".to_string(),
            currency: Some(Currency {
                id: "EUR".to_string(),
                name: "Euro".to_string(),
                sign: "€".to_string(),
                locale: "de-DE".to_string(),
            }),
            country: Some(Country {
                id: "DE".to_string(),
                name: "Germany".to_string(),
            }),
            plan: Some(Plan {
                id: "platinum".to_string(),
                name: "Platinum".to_string(),
                max_products: 50,
                max_images_per_product: 5,
                monthly_rate: 9.99,
            }),
            image: Some(AccountImage {
                id: "991".to_string(),
                url: "https://images.bigcartel.com/account_images/991/logo.png".to_string(),
            }),
            links: AccountLinks {
                self_link: Some("https://api.bigcartel.com/v1/accounts/4242".to_string()),
                orders: Some("https://api.bigcartel.com/v1/accounts/4242/orders".to_string()),
                categories: Some(
                    "https://api.bigcartel.com/v1/accounts/4242/categories".to_string(),
                ),
                products: Some("https://api.bigcartel.com/v1/accounts/4242/products".to_string()),
            },
        };

        // included lists plans, currencies, countries, images; relationships
        // list currency, country, plan
        let account = Account::decode_one(ACCOUNT_DOCUMENT.as_bytes()).unwrap();
        assert_eq!(account, expected);
    }

    #[test]
    fn test_account_links() {
        let account = Account::decode_one(ACCOUNT_DOCUMENT.as_bytes()).unwrap();

        assert_eq!(
            account.links.self_link.as_deref(),
            Some("https://api.bigcartel.com/v1/accounts/4242")
        );
        assert_eq!(
            account.links.categories.as_deref(),
            Some("https://api.bigcartel.com/v1/accounts/4242/categories")
        );
        assert!(account.links.orders.unwrap().ends_with("/orders"));
    }

    #[test]
    fn test_account_without_included_has_no_nested_records() {
        let body = r#"{"data": {
            "id": "1", "type": "accounts",
            "attributes": {
                "subdomain": "s", "store_name": "S", "url": "https://s.bigcartel.com",
                "created_at": "2020-01-01T00:00:00Z", "updated_at": "2020-01-01T00:00:00Z",
                "under_maintenance": true, "inventory_enabled": false,
                "artists_enabled": false, "time_zone": "UTC"
            }
        }}"#;

        let account = Account::decode_one(body.as_bytes()).unwrap();
        assert!(account.under_maintenance);
        assert_eq!(account.currency, None);
        assert_eq!(account.plan, None);
        assert_eq!(account.links, AccountLinks::default());
    }

    #[test]
    fn test_account_missing_url_is_not_found() {
        let body = r#"{"data": [{"id": "1", "type": "accounts", "attributes": {"store_name": "S"}}]}"#;

        let error = Account::decode_one(body.as_bytes()).unwrap_err();
        assert_eq!(error.to_string(), "no account data found");
    }

    #[test]
    fn test_account_missing_id_is_not_found() {
        let body = r#"{"data": [{"type": "accounts", "attributes": {"url": "https://x"}}]}"#;

        assert!(Account::decode_one(body.as_bytes())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_account_wrong_attribute_type_is_decode_error() {
        let body = ACCOUNT_DOCUMENT.replace(
            r#""under_maintenance": false"#,
            r#""under_maintenance": "no""#,
        );

        assert!(matches!(
            Account::decode_one(body.as_bytes()),
            Err(ResourceError::Decode {
                resource: "account",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_included_object_is_decode_error() {
        let body = ACCOUNT_DOCUMENT.replace(r#""name": "Germany""#, r#""name": 7"#);

        assert!(matches!(
            Account::decode_one(body.as_bytes()),
            Err(ResourceError::Decode { .. })
        ));
    }
}
