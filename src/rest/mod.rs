//! Resource infrastructure for the GoCardless API.
//!
//! This module maps JSON payloads into typed resources:
//!
//! - **[`Resource`] trait**: construction, endpoint resolution and lookups
//! - **[`ResourceData`]**: hydrated attributes with parsed timestamps
//! - **Sub-resources**: [`SubResource`] registry entries, per-relation
//!   [`SubResourceLink`]s and bound [`Accessor`]s
//! - **[`OneOrMany<T>`]**: fetch results mirroring the payload shape
//! - **[`ResourceError`]**: error types for resource operations
//!
//! Concrete resources (Merchant, Bill, ...) live in [`resources`].
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use gocardless::rest::Resource;
//! use gocardless::rest::resources::{Bill, Merchant};
//!
//! // Find a merchant through an explicit client
//! let merchant = Merchant::find_with_client("WOQRUJU9OH2HH1", client.clone())?;
//! println!("{} ({})", merchant.name().unwrap_or("unnamed"), merchant.get_endpoint());
//!
//! // Follow a declared relation
//! for bill in merchant.get_bills()?.iter() {
//!     println!("- {} {:?}", bill.id(), bill.amount());
//! }
//!
//! // Or dispatch by name and downcast
//! for resource in merchant.get("users")?.iter() {
//!     println!("{} {}", resource.resource_name(), resource.id());
//! }
//! ```

mod data;
mod errors;
mod id;
mod path;
mod relations;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use data::{parse_timestamp, ResourceData, TIMESTAMP_FORMAT};
pub use errors::ResourceError;
pub use id::ResourceId;
pub use path::{Endpoint, ID_PLACEHOLDER};
pub use relations::{
    Accessor, BuildFn, SubResource, SubResourceLink, ACCESSOR_PREFIX, SUB_RESOURCE_URIS,
};
pub use resource::{AnyResource, Resource};
pub use response::OneOrMany;
