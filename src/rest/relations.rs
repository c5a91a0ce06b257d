//! Sub-resource relations.
//!
//! A payload may declare related collections under `sub_resource_uris`:
//!
//! ```json
//! {
//!   "id": "WOQRUJU9OH2HH1",
//!   "sub_resource_uris": {
//!     "bills": "https://gocardless.com/api/v1/merchants/WOQRUJU9OH2HH1/bills",
//!     "users": "https://gocardless.com/api/v1/merchants/WOQRUJU9OH2HH1/users"
//!   }
//! }
//! ```
//!
//! Three pieces turn those entries into callable accessors:
//!
//! - [`SubResource`]: a static registry entry, declared per resource type,
//!   mapping a relation name to the resource type it produces.
//! - [`SubResourceLink`]: an immutable record built at construction for each
//!   declared relation, holding its own name, URL and target type.
//! - [`Accessor`]: a `get_<relation>` callable bound to one link and the
//!   owning instance's client.
//!
//! Because every link owns its URL and target, two accessors built in the
//! same construction pass can never observe each other's values.

use std::any::TypeId;
use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

use crate::clients::SharedClient;
use crate::rest::{AnyResource, OneOrMany, Resource, ResourceError};

/// Attribute holding the relation name → URL mapping.
pub const SUB_RESOURCE_URIS: &str = "sub_resource_uris";

/// Prefix of generated accessor names.
pub const ACCESSOR_PREFIX: &str = "get_";

/// Builds a type-erased resource from raw attributes.
pub type BuildFn =
    fn(Map<String, Value>, Option<SharedClient>) -> Result<Box<dyn AnyResource>, ResourceError>;

/// A registry entry declaring which resource type a relation produces.
///
/// # Example
///
/// ```rust,ignore
/// impl Resource for Merchant {
///     const SUB_RESOURCES: &'static [SubResource] = &[
///         SubResource::of::<Bill>("bills"),
///         SubResource::of::<User>("users"),
///     ];
///     // ...
/// }
/// ```
#[derive(Clone, Copy)]
pub struct SubResource {
    relation: &'static str,
    target: &'static str,
    type_id: fn() -> TypeId,
    build: BuildFn,
}

impl SubResource {
    /// Declares that `relation` yields resources of type `T`.
    #[must_use]
    pub const fn of<T: Resource>(relation: &'static str) -> Self {
        Self {
            relation,
            target: T::NAME,
            type_id: TypeId::of::<T>,
            build: build_boxed::<T>,
        }
    }

    /// Returns the relation name.
    #[must_use]
    pub const fn relation(&self) -> &'static str {
        self.relation
    }

    /// Returns the target resource type name.
    #[must_use]
    pub const fn target(&self) -> &'static str {
        self.target
    }

    /// Returns `true` if this relation yields resources of type `T`.
    #[must_use]
    pub fn yields<T: Resource>(&self) -> bool {
        (self.type_id)() == TypeId::of::<T>()
    }
}

impl fmt::Debug for SubResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubResource")
            .field("relation", &self.relation)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

fn build_boxed<T: Resource>(
    attributes: Map<String, Value>,
    client: Option<SharedClient>,
) -> Result<Box<dyn AnyResource>, ResourceError> {
    let resource: Box<dyn AnyResource> = Box::new(T::new(attributes, client)?);
    Ok(resource)
}

/// A declared relation captured at construction time.
#[derive(Debug, Clone)]
pub struct SubResourceLink {
    owner: &'static str,
    relation: String,
    url: String,
    target: Option<SubResource>,
}

impl SubResourceLink {
    /// Returns the relation name.
    #[must_use]
    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// Returns the URL this relation is fetched from.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the name of the generated accessor (`get_<relation>`).
    #[must_use]
    pub fn accessor_name(&self) -> String {
        format!("{ACCESSOR_PREFIX}{}", self.relation)
    }

    /// Returns the registered target type name, if any.
    #[must_use]
    pub fn target(&self) -> Option<&'static str> {
        self.target.as_ref().map(SubResource::target)
    }

    /// Fetches the relation and builds the registered target type.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnregisteredRelation`] if no type is
    /// registered for the relation, [`ResourceError::UnexpectedPayload`] for
    /// payloads that are not objects, and any error raised by `client`.
    pub fn fetch(
        &self,
        client: &SharedClient,
    ) -> Result<OneOrMany<Box<dyn AnyResource>>, ResourceError> {
        let target = self.registered_target()?;

        tracing::debug!(
            "Fetching {}.{} as {} from {}",
            self.owner,
            self.relation,
            target.target,
            self.url
        );

        let payload = client.api_get(&self.url)?;
        OneOrMany::from_payload(payload, target.target, &self.url)?
            .try_map(|attributes| (target.build)(attributes, Some(client.clone())))
    }

    /// Fetches the relation and builds resources of type `T`.
    ///
    /// `T` must be the type registered for the relation; nothing is
    /// requested otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnregisteredRelation`] if no type is
    /// registered for the relation, [`ResourceError::TargetMismatch`] if the
    /// registered type is not `T`, [`ResourceError::UnexpectedPayload`] for
    /// payloads that are not objects, construction errors from `T`, and any
    /// error raised by `client`.
    pub fn fetch_as<T: Resource>(&self, client: &SharedClient) -> Result<OneOrMany<T>, ResourceError> {
        let target = self.registered_target()?;
        if !target.yields::<T>() {
            return Err(ResourceError::TargetMismatch {
                resource: self.owner,
                relation: self.relation.clone(),
                registered: target.target,
                requested: T::NAME,
            });
        }

        tracing::debug!(
            "Fetching {}.{} as {} from {}",
            self.owner,
            self.relation,
            T::NAME,
            self.url
        );

        let payload = client.api_get(&self.url)?;
        OneOrMany::from_payload(payload, T::NAME, &self.url)?
            .try_map(|attributes| T::new(attributes, Some(client.clone())))
    }

    fn registered_target(&self) -> Result<SubResource, ResourceError> {
        self.target
            .ok_or_else(|| ResourceError::UnregisteredRelation {
                resource: self.owner,
                relation: self.relation.clone(),
            })
    }
}

/// A `get_<relation>` callable bound to one link and a client.
#[derive(Clone)]
pub struct Accessor<'a> {
    link: &'a SubResourceLink,
    client: Option<&'a SharedClient>,
}

impl<'a> Accessor<'a> {
    pub(crate) const fn new(link: &'a SubResourceLink, client: Option<&'a SharedClient>) -> Self {
        Self { link, client }
    }

    /// Returns the accessor name (`get_<relation>`).
    #[must_use]
    pub fn name(&self) -> String {
        self.link.accessor_name()
    }

    /// Returns the link this accessor is bound to.
    #[must_use]
    pub const fn link(&self) -> &'a SubResourceLink {
        self.link
    }

    /// Invokes the accessor.
    ///
    /// Uses the owning instance's client, falling back to the process-wide
    /// default client.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if no client is available, plus
    /// everything [`SubResourceLink::fetch`] can return.
    pub fn call(&self) -> Result<OneOrMany<Box<dyn AnyResource>>, ResourceError> {
        let client = crate::config::resolve_client(self.client)?;
        self.link.fetch(&client)
    }
}

impl fmt::Debug for Accessor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("name", &self.name())
            .field("url", &self.link.url)
            .field("has_client", &self.client.is_some())
            .finish()
    }
}

/// Builds one link per `sub_resource_uris` entry.
pub(crate) fn links_from_attribute(
    owner: &'static str,
    registry: &[SubResource],
    uris: Option<&Value>,
) -> Result<BTreeMap<String, SubResourceLink>, ResourceError> {
    let uris = match uris {
        None | Some(Value::Null) => return Ok(BTreeMap::new()),
        Some(Value::Object(uris)) => uris,
        Some(other) => {
            return Err(ResourceError::InvalidAttribute {
                resource: owner,
                field: SUB_RESOURCE_URIS.to_string(),
                reason: format!("expected an object of URLs, found {other}"),
            })
        }
    };

    uris.iter()
        .map(|(relation, url)| {
            let url = url.as_str().ok_or_else(|| ResourceError::InvalidAttribute {
                resource: owner,
                field: format!("{SUB_RESOURCE_URIS}.{relation}"),
                reason: format!("expected a URL string, found {url}"),
            })?;

            let link = SubResourceLink {
                owner,
                relation: relation.clone(),
                url: url.to_string(),
                target: registry.iter().find(|s| s.relation == relation).copied(),
            };

            Ok((relation.clone(), link))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;
    use crate::clients::ApiError;
    use crate::rest::{Endpoint, ResourceData, ResourceId};

    #[derive(Debug, Clone, PartialEq)]
    struct Parent(ResourceData);

    #[derive(Debug, Clone, PartialEq)]
    struct ChildA(ResourceData);

    #[derive(Debug, Clone, PartialEq)]
    struct ChildB(ResourceData);

    macro_rules! impl_resource {
        ($ty:ident, $name:literal, $endpoint:literal, [$($sub:expr),*]) => {
            impl Resource for $ty {
                const NAME: &'static str = $name;
                const ENDPOINT: Endpoint = Endpoint::new($endpoint);
                const SUB_RESOURCES: &'static [SubResource] = &[$($sub),*];

                fn from_data(data: ResourceData) -> Self {
                    Self(data)
                }

                fn data(&self) -> &ResourceData {
                    &self.0
                }

                fn into_data(self) -> ResourceData {
                    self.0
                }
            }
        };
    }

    impl_resource!(
        Parent,
        "Parent",
        "/parents/:id",
        [SubResource::of::<ChildA>("a"), SubResource::of::<ChildB>("b")]
    );
    impl_resource!(ChildA, "ChildA", "/a/:id", []);
    impl_resource!(ChildB, "ChildB", "/b/:id", []);

    fn recording_client(requests: Arc<Mutex<Vec<String>>>) -> SharedClient {
        Arc::new(move |url: &str| -> Result<Value, ApiError> {
            requests.lock().unwrap().push(url.to_string());
            Ok(json!([{"id": 1}, {"id": 2}]))
        })
    }

    #[test]
    fn test_links_bind_their_own_url_and_target() {
        let uris = json!({"a": "/urls/a", "b": "/urls/b"});
        let links = links_from_attribute("Parent", Parent::SUB_RESOURCES, Some(&uris)).unwrap();

        assert_eq!(links["a"].url(), "/urls/a");
        assert_eq!(links["a"].target(), Some("ChildA"));
        assert_eq!(links["b"].url(), "/urls/b");
        assert_eq!(links["b"].target(), Some("ChildB"));
    }

    #[test]
    fn test_links_without_registration_have_no_target() {
        let uris = json!({"c": "/urls/c"});
        let links = links_from_attribute("Parent", Parent::SUB_RESOURCES, Some(&uris)).unwrap();
        assert_eq!(links["c"].target(), None);
        assert_eq!(links["c"].accessor_name(), "get_c");
    }

    #[test]
    fn test_links_reject_non_object_and_non_string_urls() {
        let result = links_from_attribute("Parent", &[], Some(&json!(["a"])));
        assert!(matches!(
            result,
            Err(ResourceError::InvalidAttribute { ref field, .. }) if field == "sub_resource_uris"
        ));

        let result = links_from_attribute("Parent", &[], Some(&json!({"a": 1})));
        assert!(matches!(
            result,
            Err(ResourceError::InvalidAttribute { ref field, .. }) if field == "sub_resource_uris.a"
        ));
    }

    #[test]
    fn test_links_absent_or_null_is_empty() {
        assert!(links_from_attribute("Parent", &[], None).unwrap().is_empty());
        assert!(links_from_attribute("Parent", &[], Some(&Value::Null))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_fetch_builds_registered_target_from_own_url() {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let client = recording_client(requests.clone());

        let uris = json!({"a": "/urls/a", "b": "/urls/b"});
        let links = links_from_attribute("Parent", Parent::SUB_RESOURCES, Some(&uris)).unwrap();

        let fetched = links["b"].fetch(&client).unwrap();
        assert_eq!(fetched.len(), 2);
        assert!(fetched.iter().all(|r| r.is::<ChildB>()));
        assert_eq!(*requests.lock().unwrap(), vec!["/urls/b".to_string()]);
    }

    #[test]
    fn test_fetch_unregistered_relation_fails_without_request() {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let client = recording_client(requests.clone());

        let uris = json!({"c": "/urls/c"});
        let links = links_from_attribute("Parent", Parent::SUB_RESOURCES, Some(&uris)).unwrap();

        let result = links["c"].fetch(&client);
        assert!(matches!(
            result,
            Err(ResourceError::UnregisteredRelation { resource: "Parent", .. })
        ));
        assert!(requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_fetch_as_builds_registered_type() {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let client = recording_client(requests.clone());

        let uris = json!({"a": "/urls/a"});
        let links = links_from_attribute("Parent", Parent::SUB_RESOURCES, Some(&uris)).unwrap();

        let fetched: OneOrMany<ChildA> = links["a"].fetch_as(&client).unwrap();
        let ids: Vec<_> = fetched.iter().map(|c| c.id().clone()).collect();
        assert_eq!(ids, vec![ResourceId::from(1u64), ResourceId::from(2u64)]);
        assert_eq!(*requests.lock().unwrap(), vec!["/urls/a".to_string()]);
    }

    #[test]
    fn test_fetch_as_rejects_other_type_without_request() {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let client = recording_client(requests.clone());

        let uris = json!({"a": "/urls/a", "b": "/urls/b"});
        let links = links_from_attribute("Parent", Parent::SUB_RESOURCES, Some(&uris)).unwrap();

        let result = links["b"].fetch_as::<ChildA>(&client);
        assert!(matches!(
            result,
            Err(ResourceError::TargetMismatch {
                resource: "Parent",
                registered: "ChildB",
                requested: "ChildA",
                ref relation,
            }) if relation == "b"
        ));
        assert!(requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_fetch_as_unregistered_relation_fails_without_request() {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let client = recording_client(requests.clone());

        let uris = json!({"c": "/urls/c"});
        let links = links_from_attribute("Parent", Parent::SUB_RESOURCES, Some(&uris)).unwrap();

        let result = links["c"].fetch_as::<ChildA>(&client);
        assert!(matches!(
            result,
            Err(ResourceError::UnregisteredRelation { resource: "Parent", .. })
        ));
        assert!(requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_sub_resource_yields_its_target_only() {
        let entry = SubResource::of::<ChildA>("a");
        assert!(entry.yields::<ChildA>());
        assert!(!entry.yields::<ChildB>());
    }

    #[test]
    fn test_sub_resource_debug_names_target() {
        let entry = SubResource::of::<ChildA>("a");
        let debug = format!("{entry:?}");
        assert!(debug.contains("ChildA"));
        assert_eq!(entry.relation(), "a");
    }
}
