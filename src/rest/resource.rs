//! The `Resource` trait.
//!
//! A resource is a typed wrapper around one JSON attribute mapping returned
//! by the API. Types implementing [`Resource`] declare their name, endpoint
//! template, date fields and sub-resource registry as associated constants,
//! and get construction, endpoint resolution, lookups and relation fetching
//! as provided methods.
//!
//! # Implementing a Resource
//!
//! 1. Define a newtype around [`ResourceData`]
//! 2. Implement `Resource` with its constants and the three data accessors
//! 3. Add typed getters on top of [`ResourceData`] as needed
//!
//! # Example
//!
//! ```rust
//! use gocardless::rest::{Endpoint, Resource, ResourceData};
//! use serde_json::json;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! pub struct Refund(ResourceData);
//!
//! impl Resource for Refund {
//!     const NAME: &'static str = "Refund";
//!     const ENDPOINT: Endpoint = Endpoint::new("/refunds/:id");
//!
//!     fn from_data(data: ResourceData) -> Self {
//!         Self(data)
//!     }
//!
//!     fn data(&self) -> &ResourceData {
//!         &self.0
//!     }
//!
//!     fn into_data(self) -> ResourceData {
//!         self.0
//!     }
//! }
//!
//! let attributes = json!({"id": "RF123", "created_at": "2012-04-18T17:53:12Z"});
//! let refund = Refund::new(attributes.as_object().unwrap().clone(), None).unwrap();
//!
//! assert_eq!(refund.get_endpoint(), "/refunds/RF123");
//! assert!(refund.created_at().is_some());
//! ```

use std::any::Any;
use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::clients::SharedClient;
use crate::config;
use crate::rest::{Endpoint, OneOrMany, ResourceData, ResourceError, ResourceId, SubResource};

/// An API resource backed by a JSON attribute mapping.
///
/// # Associated Constants
///
/// - `NAME`: The resource type name (e.g., "Bill")
/// - `ENDPOINT`: The endpoint template, with a single `:id` placeholder
/// - `DATE_FIELDS`: Attributes parsed as timestamps at construction
/// - `SUB_RESOURCES`: Which resource type each sub-resource relation yields
pub trait Resource: Sized + Send + Sync + 'static {
    /// The resource type name, used in errors and logs.
    const NAME: &'static str;

    /// The endpoint template for single-resource lookups.
    const ENDPOINT: Endpoint;

    /// Attributes holding `YYYY-MM-DDTHH:MM:SSZ` timestamps.
    const DATE_FIELDS: &'static [&'static str] = &["created_at"];

    /// The sub-resource registry.
    ///
    /// Relations present in `sub_resource_uris` but missing here still get
    /// an accessor; invoking it fails with
    /// [`ResourceError::UnregisteredRelation`].
    const SUB_RESOURCES: &'static [SubResource] = &[];

    /// Wraps hydrated data.
    fn from_data(data: ResourceData) -> Self;

    /// Returns the hydrated data.
    fn data(&self) -> &ResourceData;

    /// Unwraps the hydrated data.
    fn into_data(self) -> ResourceData;

    /// Builds an instance from raw attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] or [`ResourceError::InvalidId`]
    /// for a bad `id`, [`ResourceError::InvalidTimestamp`] for a malformed
    /// date field and [`ResourceError::InvalidAttribute`] for a malformed
    /// `sub_resource_uris`.
    fn new(attributes: Map<String, Value>, client: Option<SharedClient>) -> Result<Self, ResourceError> {
        ResourceData::hydrate(
            Self::NAME,
            Self::DATE_FIELDS,
            Self::SUB_RESOURCES,
            attributes,
            client,
        )
        .map(Self::from_data)
    }

    /// Returns the identifier.
    fn id(&self) -> &ResourceId {
        self.data().id()
    }

    /// Returns the parsed `created_at` timestamp.
    fn created_at(&self) -> Option<&DateTime<Utc>> {
        self.data().created_at()
    }

    /// Returns an attribute by key.
    fn attribute(&self, key: &str) -> Option<&Value> {
        self.data().attribute(key)
    }

    /// Returns this instance's endpoint (e.g., `/bills/0A1B2C`).
    fn get_endpoint(&self) -> String {
        Self::ENDPOINT.resolve(self.id())
    }

    /// Resolves the endpoint template for `id`.
    fn endpoint_for(id: impl Display) -> String {
        Self::ENDPOINT.resolve(id)
    }

    /// Fetches the resource with `id` through `client`.
    ///
    /// The returned instance is bound to `client`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the client fails,
    /// [`ResourceError::UnexpectedPayload`] if the payload is not a JSON
    /// object, plus any construction error from [`Resource::new`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let bill = Bill::find_with_client("0A1B2C", client.clone())?;
    /// println!("{}", bill.get_endpoint());
    /// ```
    fn find_with_client(id: impl Display, client: SharedClient) -> Result<Self, ResourceError> {
        let url = Self::endpoint_for(id);
        tracing::debug!("Finding {} at {}", Self::NAME, url);

        match client.api_get(&url)? {
            Value::Object(attributes) => Self::new(attributes, Some(client)),
            _ => Err(ResourceError::UnexpectedPayload {
                resource: Self::NAME,
                url,
                expected: "a JSON object",
            }),
        }
    }

    /// Fetches the resource with `id` through the default client.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if no default client is configured,
    /// plus everything [`Resource::find_with_client`] can return.
    fn find(id: impl Display) -> Result<Self, ResourceError> {
        let client = config::default_client()?;
        Self::find_with_client(id, client)
    }

    /// Returns this instance re-bound to `client`.
    #[must_use]
    fn with_client(self, client: SharedClient) -> Self {
        Self::from_data(self.into_data().with_client(client))
    }

    /// Invokes the `get_<relation>` accessor.
    ///
    /// # Errors
    ///
    /// See [`ResourceData::fetch`].
    fn get(&self, relation: &str) -> Result<OneOrMany<Box<dyn AnyResource>>, ResourceError> {
        self.data().fetch(relation)
    }

    /// Fetches `relation` as resources of type `T`.
    ///
    /// # Errors
    ///
    /// See [`ResourceData::fetch_as`].
    fn sub_resources<T: Resource>(&self, relation: &str) -> Result<OneOrMany<T>, ResourceError> {
        self.data().fetch_as(relation)
    }

    /// Looks up the resource referenced by the id stored under `field`.
    ///
    /// # Errors
    ///
    /// See [`ResourceData::reference`].
    fn reference<T: Resource>(&self, field: &str) -> Result<Option<T>, ResourceError> {
        self.data().reference(field)
    }
}

/// A type-erased resource, as produced by sub-resource accessors.
///
/// Use [`is`](AnyResource::is) and [`downcast_ref`](AnyResource::downcast_ref)
/// on `dyn AnyResource` to recover the concrete type.
pub trait AnyResource: Send + Sync + 'static {
    /// Returns the resource type name.
    fn resource_name(&self) -> &'static str;

    /// Returns the hydrated data.
    fn resource_data(&self) -> &ResourceData;

    /// Upcasts to `Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Resource> AnyResource for T {
    fn resource_name(&self) -> &'static str {
        T::NAME
    }

    fn resource_data(&self) -> &ResourceData {
        self.data()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn AnyResource {
    /// Returns `true` if this is a `T`.
    #[must_use]
    pub fn is<T: Resource>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Returns this resource as a `T`, if it is one.
    #[must_use]
    pub fn downcast_ref<T: Resource>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> &ResourceId {
        self.resource_data().id()
    }
}

impl fmt::Debug for dyn AnyResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(self.resource_name())
            .field("id", self.id())
            .finish_non_exhaustive()
    }
}
