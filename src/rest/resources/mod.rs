//! Version-specific REST resource implementations.
//!
//! ```text
//! resources/
//!   mod.rs    <- This file (re-exports latest version)
//!   v1/
//!     mod.rs  <- Version-specific resources
//! ```
//!
//! The latest version is re-exported at this module level:
//!
//! ```rust,ignore
//! use bigcartel_api::rest::resources::Account;      // Uses latest version
//! use bigcartel_api::rest::resources::v1::Account;  // Explicit version
//! ```

pub mod v1;

pub use v1::*;
