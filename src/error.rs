//! Error types for SDK configuration.
//!
//! This module contains [`ConfigError`], raised when the process-wide
//! default client required by [`Resource::find`](crate::rest::Resource::find)
//! is missing or configured twice.
//!
//! # Example
//!
//! ```rust
//! use gocardless::{config, ConfigError};
//!
//! let result = config::default_client();
//! assert!(matches!(result, Err(ConfigError::DefaultClientNotConfigured)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring or reading the default client.
///
/// These are configuration-precondition failures, never network failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No default client has been configured.
    #[error("No default API client configured. Call config::set_default_client() before using find(), or use find_with_client().")]
    DefaultClientNotConfigured,

    /// A default client was already configured for this process.
    #[error("A default API client is already configured. It can only be set once per process.")]
    DefaultClientAlreadyConfigured,
}
