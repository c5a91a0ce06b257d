//! The API client collaborator consumed by resources.
//!
//! Resources never perform network I/O themselves. Every lookup goes through
//! an [`ApiClient`], which resolves a URL to either a single JSON object or
//! an array of JSON objects.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::ApiError;

/// A collaborator able to fetch raw attribute mappings from the API.
///
/// Implementations own transport, authentication and retry concerns. The
/// resource layer only calls [`api_get`](ApiClient::api_get) and maps what
/// comes back.
///
/// Closures of the form `Fn(&str) -> Result<Value, ApiError>` implement this
/// trait, which is convenient for tests and adapters.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use gocardless::clients::{ApiClient, ApiError, SharedClient};
/// use serde_json::{json, Value};
///
/// let client: SharedClient = Arc::new(|url: &str| -> Result<Value, ApiError> {
///     Ok(json!({"id": "1", "uri": url}))
/// });
///
/// let payload = client.api_get("/merchants/1").unwrap();
/// assert_eq!(payload["uri"], "/merchants/1");
/// ```
pub trait ApiClient: Send + Sync {
    /// Fetches the resource or collection at `url`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails for any reason.
    fn api_get(&self, url: &str) -> Result<Value, ApiError>;
}

/// A shared handle to a client collaborator.
pub type SharedClient = Arc<dyn ApiClient>;

impl<F> ApiClient for F
where
    F: Fn(&str) -> Result<Value, ApiError> + Send + Sync,
{
    fn api_get(&self, url: &str) -> Result<Value, ApiError> {
        self(url)
    }
}
