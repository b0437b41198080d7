//! REST resource infrastructure for the Big Cartel API.
//!
//! This module provides:
//!
//! - **JSON:API documents**: [`Document`], [`ResourceObject`] and the
//!   [`Included`] index over related resources
//! - **[`JsonApiResource`] trait**: names, path table, presence check and
//!   mapping of one resource type
//! - **Fetch/create functions**: [`fetch_one`], [`fetch_all`] and [`create`]
//!   drive the request/decode round trip for any resource
//! - **Path building**: [`ResourcePath`] tables for nested resources
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcartel_api::{BigCartelConfig, HttpClient};
//! use bigcartel_api::rest::resources::{Account, Category};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let account = Account::current(&client).await?;
//! println!("Store: {}", account.store_name);
//!
//! for category in account.categories(&client).await? {
//!     println!("- {}", category.name);
//! }
//!
//! let created = Category::create(&client, &account.id, "Cassettes").await?;
//! println!("Created category {}", created.id);
//! ```

mod document;
mod errors;
mod path;
mod resource;
pub mod resources;

pub use document::{
    Document, ErrorObject, Included, Link, PrimaryData, Relationship, RelationshipData,
    ResourceIdentifier, ResourceObject,
};
pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::{create, decode_attributes, fetch_all, fetch_one, JsonApiResource};
