//! Process-wide configuration for the SDK.
//!
//! The only process-wide state is the default [`ApiClient`](crate::clients::ApiClient)
//! used by [`Resource::find`](crate::rest::Resource::find). It is written once,
//! typically at startup, and read thereafter.
//!
//! Code that prefers explicit dependencies should pass a client to
//! [`Resource::find_with_client`](crate::rest::Resource::find_with_client)
//! instead and never touch this module.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use gocardless::clients::ApiError;
//! use gocardless::config;
//! use serde_json::{json, Value};
//!
//! assert!(!config::is_configured());
//!
//! config::set_default_client(Arc::new(|_: &str| -> Result<Value, ApiError> {
//!     Ok(json!({"id": "1"}))
//! }))
//! .unwrap();
//!
//! assert!(config::is_configured());
//! assert!(config::default_client().is_ok());
//! ```

use std::sync::OnceLock;

use crate::clients::SharedClient;
use crate::error::ConfigError;

static DEFAULT_CLIENT: OnceLock<SharedClient> = OnceLock::new();

/// Installs the process-wide default client.
///
/// # Errors
///
/// Returns [`ConfigError::DefaultClientAlreadyConfigured`] if a default
/// client has already been installed.
pub fn set_default_client(client: SharedClient) -> Result<(), ConfigError> {
    DEFAULT_CLIENT
        .set(client)
        .map_err(|_| ConfigError::DefaultClientAlreadyConfigured)?;
    tracing::debug!("Default API client configured");
    Ok(())
}

/// Returns the process-wide default client.
///
/// # Errors
///
/// Returns [`ConfigError::DefaultClientNotConfigured`] if
/// [`set_default_client`] has not been called.
pub fn default_client() -> Result<SharedClient, ConfigError> {
    DEFAULT_CLIENT
        .get()
        .cloned()
        .ok_or(ConfigError::DefaultClientNotConfigured)
}

/// Returns `true` once a default client has been installed.
#[must_use]
pub fn is_configured() -> bool {
    DEFAULT_CLIENT.get().is_some()
}

/// Returns `client` if present, otherwise the default client.
pub(crate) fn resolve_client(client: Option<&SharedClient>) -> Result<SharedClient, ConfigError> {
    client.map_or_else(default_client, |c| Ok(c.clone()))
}
