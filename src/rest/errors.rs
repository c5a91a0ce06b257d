//! Resource-specific error types.
//!
//! [`ResourceError`] covers everything that can go wrong while mapping API
//! payloads into resources: bad identifiers, malformed timestamps, undeclared
//! relations, unexpected payload shapes, a missing default client, and
//! errors raised by the [`ApiClient`](crate::clients::ApiClient) itself.
//!
//! Collaborator errors are carried through unchanged in
//! [`ResourceError::Api`].
//!
//! # Example
//!
//! ```rust,ignore
//! use gocardless::rest::{Resource, ResourceError};
//! use gocardless::rest::resources::Bill;
//!
//! match Bill::find("0A1B2C") {
//!     Ok(bill) => println!("Bill {} is {:?}", bill.id(), bill.status()),
//!     Err(ResourceError::Config(e)) => println!("Not configured: {e}"),
//!     Err(ResourceError::Api(e)) => println!("API error: {e}"),
//!     Err(e) => println!("Could not map bill: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::ApiError;
use crate::error::ConfigError;

/// Error type for resource construction and lookups.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The attribute mapping has no usable `id`.
    #[error("{resource} attributes are missing a non-empty 'id'")]
    MissingId {
        /// The type name of the resource (e.g., "Bill").
        resource: &'static str,
    },

    /// The `id` attribute is not a string or non-negative integer.
    #[error("{resource} has an invalid id: {value}")]
    InvalidId {
        /// The type name of the resource.
        resource: &'static str,
        /// The offending value, as JSON.
        value: String,
    },

    /// A date field is not in `YYYY-MM-DDTHH:MM:SSZ` format.
    #[error("{resource}.{field} is not a valid timestamp: '{value}'")]
    InvalidTimestamp {
        /// The type name of the resource.
        resource: &'static str,
        /// The date field that failed to parse.
        field: String,
        /// The raw value.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },

    /// An attribute has a shape the resource layer cannot use.
    #[error("{resource}.{field} is invalid: {reason}")]
    InvalidAttribute {
        /// The type name of the resource.
        resource: &'static str,
        /// The attribute name.
        field: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The instance does not declare the requested sub-resource relation.
    #[error("{resource} has no sub-resource '{relation}'")]
    UnknownRelation {
        /// The type name of the resource.
        resource: &'static str,
        /// The requested relation name.
        relation: String,
    },

    /// The relation is declared by the payload but no resource type is
    /// registered for it.
    #[error("{resource} has no resource type registered for sub-resource '{relation}'")]
    UnregisteredRelation {
        /// The type name of the resource.
        resource: &'static str,
        /// The relation name.
        relation: String,
    },

    /// A typed fetch asked for a different type than the one registered for
    /// the relation.
    #[error("{resource}.{relation} yields {registered}, not {requested}")]
    TargetMismatch {
        /// The type name of the owning resource.
        resource: &'static str,
        /// The relation name.
        relation: String,
        /// The type registered for the relation.
        registered: &'static str,
        /// The type the caller asked for.
        requested: &'static str,
    },

    /// The API returned something other than an object or array of objects.
    #[error("Unexpected payload for {resource} from {url}: expected {expected}")]
    UnexpectedPayload {
        /// The type name of the resource being built.
        resource: &'static str,
        /// The URL that was fetched.
        url: String,
        /// A description of the accepted shapes.
        expected: &'static str,
    },

    /// The SDK is not configured for the requested operation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The API client failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ResourceError {
    /// Returns `true` if the error was raised by the API client.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Returns the API client's error, if this is one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
