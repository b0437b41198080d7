//! REST resources for Big Cartel API v1.
//!
//! - [`Account`] - The store account, with [`Currency`], [`Country`],
//!   [`Plan`] and [`AccountImage`] resolved from `included`
//! - [`Category`] - Product categories nested under an account

mod account;
mod category;

pub use account::{Account, AccountImage, AccountLinks, Country, Currency, Plan};
pub use category::Category;
