//! # GoCardless API Rust SDK
//!
//! The resource-mapping layer of a GoCardless API client: typed resources
//! built from JSON payloads, endpoint resolution, timestamp parsing and
//! sub-resource expansion through additional API calls.
//!
//! ## Overview
//!
//! This SDK provides:
//! - The [`rest::Resource`] trait and concrete resources in [`rest::resources`]
//! - Endpoint templates with a single `:id` placeholder via [`rest::Endpoint`]
//! - `get_<relation>` accessors generated from `sub_resource_uris`
//! - The [`clients::ApiClient`] seam through which every request is made
//! - An optional process-wide default client in [`config`]
//!
//! Transport, authentication and retries are out of scope: bring an
//! [`ApiClient`] that performs `GET` requests and returns decoded JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use gocardless::clients::{ApiError, SharedClient};
//! use gocardless::rest::Resource;
//! use gocardless::rest::resources::Bill;
//! use serde_json::{json, Value};
//!
//! // Any `Fn(&str) -> Result<Value, ApiError>` is a client
//! let client: SharedClient = Arc::new(|url: &str| -> Result<Value, ApiError> {
//!     assert_eq!(url, "/bills/0A1B2C");
//!     Ok(json!({
//!         "id": "0A1B2C",
//!         "amount": "10.00",
//!         "created_at": "2012-04-18T17:53:12Z"
//!     }))
//! });
//!
//! let bill = Bill::find_with_client("0A1B2C", client).unwrap();
//! assert_eq!(bill.amount(), Some("10.00"));
//! assert_eq!(bill.get_endpoint(), "/bills/0A1B2C");
//! ```
//!
//! ## Sub-resources
//!
//! Payloads that carry `sub_resource_uris` get one accessor per relation:
//!
//! ```rust,ignore
//! let merchant = Merchant::find_with_client("WOQRUJU9OH2HH1", client)?;
//!
//! // Typed
//! let bills = merchant.get_bills()?;
//!
//! // By accessor name
//! let users = merchant.data().accessor("get_users").unwrap().call()?;
//! ```
//!
//! ## Design Principles
//!
//! - **Explicit clients first**: `find_with_client` takes the client; `find`
//!   is a thin wrapper over the default client
//! - **Fail-fast construction**: bad ids and timestamps are rejected up front
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Immutable resources**: Resources never change after construction

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use clients::{ApiClient, ApiError, SharedClient};
pub use error::ConfigError;

// Re-export resource types
pub use rest::{OneOrMany, Resource, ResourceError, ResourceId};
