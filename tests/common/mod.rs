//! Shared fixtures for integration tests.
//!
//! Mirrors the classic resource test setup: a `TestResource` at
//! `/testendpoint/:id` with two registered sub-resource types, plus a
//! recording mock client.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use gocardless::clients::{ApiClient, ApiError, SharedClient};
use gocardless::rest::{Endpoint, Resource, ResourceData, SubResource};
use serde_json::{json, Map, Value};

// ============================================================================
// Test Resources
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct TestResource(ResourceData);

impl Resource for TestResource {
    const NAME: &'static str = "TestResource";
    const ENDPOINT: Endpoint = Endpoint::new("/testendpoint/:id");
    const SUB_RESOURCES: &'static [SubResource] = &[
        SubResource::of::<TestSubResource>("test_sub_resources"),
        SubResource::of::<OtherTestSubResource>("other_test_sub_resources"),
    ];

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

#[derive(Debug, Clone, PartialEq)]
pub struct TestSubResource(ResourceData);

impl Resource for TestSubResource {
    const NAME: &'static str = "TestSubResource";
    const ENDPOINT: Endpoint = Endpoint::new("/subresource/:id");

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

#[derive(Debug, Clone, PartialEq)]
pub struct OtherTestSubResource(ResourceData);

impl Resource for OtherTestSubResource {
    const NAME: &'static str = "OtherTestSubResource";
    const ENDPOINT: Endpoint = Endpoint::new("/subresource2/:id");

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

/// Base attributes (`id` "1" and a `created_at`) merged with `to_merge`.
pub fn mock_attrs(to_merge: Value) -> Map<String, Value> {
    let mut attrs = Map::new();
    attrs.insert("created_at".to_string(), json!("2012-04-18T17:53:12Z"));
    attrs.insert("id".to_string(), json!("1"));

    if let Value::Object(extra) = to_merge {
        attrs.extend(extra);
    }
    attrs
}

// ============================================================================
// Mock Client
// ============================================================================

/// An [`ApiClient`] that records every URL and answers from canned payloads.
#[derive(Debug, Default)]
pub struct MockClient {
    responses: HashMap<String, Value>,
    fallback: Option<Value>,
    requests: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every request with `payload`.
    pub fn returning(payload: Value) -> Self {
        Self {
            fallback: Some(payload),
            ..Self::default()
        }
    }

    /// Answers requests for `url` with `payload`.
    pub fn with_response(mut self, url: &str, payload: Value) -> Self {
        self.responses.insert(url.to_string(), payload);
        self
    }

    /// The URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Wraps this mock as a shared client, keeping a handle for inspection.
    pub fn shared(self) -> (Arc<Self>, SharedClient) {
        let mock = Arc::new(self);
        let client: SharedClient = mock.clone();
        (mock, client)
    }
}

impl ApiClient for MockClient {
    fn api_get(&self, url: &str) -> Result<Value, ApiError> {
        self.requests.lock().unwrap().push(url.to_string());

        self.responses
            .get(url)
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| ApiError::Response {
                code: 404,
                message: format!("No mock response for {url}"),
                error_reference: None,
            })
    }
}
