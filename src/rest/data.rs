//! Hydrated resource state.
//!
//! [`ResourceData`] is what every resource type wraps. It is built once from
//! a raw attribute mapping and never changes afterwards:
//!
//! - the `id` is validated into a [`ResourceId`]
//! - date fields are parsed into `DateTime<Utc>`
//! - `sub_resource_uris` entries become [`SubResourceLink`]s
//! - every other key is kept verbatim
//!
//! # Timestamps
//!
//! Date fields use the API's `YYYY-MM-DDTHH:MM:SSZ` format. A date field that
//! is present but malformed fails construction; a `null` date field is
//! treated as absent.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::clients::SharedClient;
use crate::config::resolve_client;
use crate::rest::relations::{links_from_attribute, SUB_RESOURCE_URIS};
use crate::rest::{
    Accessor, AnyResource, OneOrMany, Resource, ResourceError, ResourceId, SubResource,
    SubResourceLink, ACCESSOR_PREFIX,
};

/// Timestamp format used by the API.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parses an API timestamp (`2012-04-18T17:53:12Z`) as UTC.
///
/// # Errors
///
/// Returns the [`chrono::ParseError`] if `value` is not in
/// [`TIMESTAMP_FORMAT`].
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use gocardless::rest::parse_timestamp;
///
/// let parsed = parse_timestamp("2012-04-18T17:53:12Z").unwrap();
/// assert_eq!(parsed, Utc.with_ymd_and_hms(2012, 4, 18, 17, 53, 12).unwrap());
/// ```
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map(|naive| naive.and_utc())
}

/// The hydrated attributes of a resource instance.
#[derive(Clone)]
pub struct ResourceData {
    resource: &'static str,
    id: ResourceId,
    fields: Map<String, Value>,
    timestamps: BTreeMap<String, DateTime<Utc>>,
    raw: Map<String, Value>,
    links: BTreeMap<String, SubResourceLink>,
    client: Option<SharedClient>,
}

impl ResourceData {
    /// Builds the state of a `resource` instance from its raw attributes.
    pub(crate) fn hydrate(
        resource: &'static str,
        date_fields: &[&str],
        registry: &[SubResource],
        attributes: Map<String, Value>,
        client: Option<SharedClient>,
    ) -> Result<Self, ResourceError> {
        let id = attributes
            .get("id")
            .map_or(Err(ResourceError::MissingId { resource }), |value| {
                ResourceId::from_value(resource, value)
            })?;

        let links = links_from_attribute(resource, registry, attributes.get(SUB_RESOURCE_URIS))?;

        let mut fields = attributes.clone();
        let mut timestamps = BTreeMap::new();

        for &field in date_fields {
            match fields.remove(field) {
                None | Some(Value::Null) => {}
                Some(Value::String(value)) => {
                    let parsed = parse_timestamp(&value).map_err(|source| {
                        ResourceError::InvalidTimestamp {
                            resource,
                            field: field.to_string(),
                            value: value.clone(),
                            source,
                        }
                    })?;
                    timestamps.insert(field.to_string(), parsed);
                }
                Some(other) => {
                    return Err(ResourceError::InvalidAttribute {
                        resource,
                        field: field.to_string(),
                        reason: format!("expected a timestamp string, found {other}"),
                    });
                }
            }
        }

        Ok(Self {
            resource,
            id,
            fields,
            timestamps,
            raw: attributes,
            links,
            client,
        })
    }

    /// Returns the resource type name (e.g., "Bill").
    #[must_use]
    pub const fn resource_name(&self) -> &'static str {
        self.resource
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> &ResourceId {
        &self.id
    }

    /// Returns an attribute by key.
    ///
    /// Parsed date fields are not returned here; use
    /// [`timestamp`](Self::timestamp).
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns a string attribute by key.
    #[must_use]
    pub fn str_attribute(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Returns a boolean attribute by key.
    #[must_use]
    pub fn bool_attribute(&self, key: &str) -> Option<bool> {
        self.fields.get(key).and_then(Value::as_bool)
    }

    /// Deserializes an attribute into `T`.
    ///
    /// Absent and `null` attributes yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidAttribute`] if the value cannot be
    /// deserialized into `T`.
    pub fn attribute_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ResourceError> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone()).map(Some).map_err(|e| {
                ResourceError::InvalidAttribute {
                    resource: self.resource,
                    field: key.to_string(),
                    reason: e.to_string(),
                }
            }),
        }
    }

    /// Returns all non-date attributes.
    #[must_use]
    pub const fn attributes(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns the attribute mapping exactly as received.
    #[must_use]
    pub const fn raw_attributes(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Returns a parsed date field.
    #[must_use]
    pub fn timestamp(&self, field: &str) -> Option<&DateTime<Utc>> {
        self.timestamps.get(field)
    }

    /// Returns the parsed `created_at` timestamp.
    #[must_use]
    pub fn created_at(&self) -> Option<&DateTime<Utc>> {
        self.timestamp("created_at")
    }

    /// Returns the client this instance was built with.
    #[must_use]
    pub const fn client(&self) -> Option<&SharedClient> {
        self.client.as_ref()
    }

    /// Rebinds this instance to another client.
    #[must_use]
    pub fn with_client(mut self, client: SharedClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Returns the declared sub-resource links, ordered by relation name.
    pub fn links(&self) -> impl Iterator<Item = &SubResourceLink> {
        self.links.values()
    }

    /// Returns the link for `relation`.
    #[must_use]
    pub fn link(&self, relation: &str) -> Option<&SubResourceLink> {
        self.links.get(relation)
    }

    /// Returns the names of the generated accessors (`get_<relation>`).
    #[must_use]
    pub fn accessor_names(&self) -> Vec<String> {
        self.links.values().map(SubResourceLink::accessor_name).collect()
    }

    /// Returns `true` if an accessor called `name` exists.
    #[must_use]
    pub fn has_accessor(&self, name: &str) -> bool {
        self.accessor(name).is_some()
    }

    /// Returns the accessor called `name` (`get_<relation>`).
    #[must_use]
    pub fn accessor(&self, name: &str) -> Option<Accessor<'_>> {
        let relation = name.strip_prefix(ACCESSOR_PREFIX)?;
        self.links
            .get(relation)
            .map(|link| Accessor::new(link, self.client.as_ref()))
    }

    /// Fetches `relation` as its registered resource type.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownRelation`] if the relation was not
    /// declared, plus everything [`Accessor::call`] can return.
    pub fn fetch(&self, relation: &str) -> Result<OneOrMany<Box<dyn AnyResource>>, ResourceError> {
        let link = self.declared_link(relation)?;
        Accessor::new(link, self.client.as_ref()).call()
    }

    /// Fetches `relation` as resources of type `T`.
    ///
    /// `T` must be the type registered for the relation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownRelation`] if the relation was not
    /// declared, [`ResourceError::Config`] if no client is available, plus
    /// everything [`SubResourceLink::fetch_as`] can return.
    pub fn fetch_as<T: Resource>(&self, relation: &str) -> Result<OneOrMany<T>, ResourceError> {
        let link = self.declared_link(relation)?;
        let client = resolve_client(self.client.as_ref())?;
        link.fetch_as(&client)
    }

    /// Looks up the resource whose id is stored under `field`.
    ///
    /// Absent and `null` fields yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidId`] if the field does not hold an id,
    /// [`ResourceError::Config`] if no client is available, plus everything
    /// [`Resource::find_with_client`] can return.
    pub fn reference<T: Resource>(&self, field: &str) -> Result<Option<T>, ResourceError> {
        let id = match self.fields.get(field) {
            None | Some(Value::Null) => return Ok(None),
            Some(value) => ResourceId::from_value(self.resource, value)?,
        };

        let client = resolve_client(self.client.as_ref())?;
        T::find_with_client(id, client).map(Some)
    }

    fn declared_link(&self, relation: &str) -> Result<&SubResourceLink, ResourceError> {
        self.links
            .get(relation)
            .ok_or_else(|| ResourceError::UnknownRelation {
                resource: self.resource,
                relation: relation.to_string(),
            })
    }
}

impl PartialEq for ResourceData {
    fn eq(&self, other: &Self) -> bool {
        self.resource == other.resource && self.id == other.id && self.raw == other.raw
    }
}

impl fmt::Debug for ResourceData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceData")
            .field("resource", &self.resource)
            .field("id", &self.id)
            .field("fields", &self.fields)
            .field("timestamps", &self.timestamps)
            .field("sub_resources", &self.links.keys().collect::<Vec<_>>())
            .field("has_client", &self.client.is_some())
            .finish()
    }
}

impl Serialize for ResourceData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

// Verify ResourceData is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceData>();
};
