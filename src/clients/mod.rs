//! API client collaborator types.
//!
//! The resource layer consumes exactly one operation from the outside world:
//! `api_get(url)`. This module defines that seam.
//!
//! - [`ApiClient`]: The collaborator trait
//! - [`SharedClient`]: A reference-counted handle to an [`ApiClient`]
//! - [`ApiError`]: The collaborator's error type
//!
//! Transport, authentication, retries and rate limiting are the
//! implementor's responsibility.

mod api_client;
mod errors;

pub use api_client::{ApiClient, SharedClient};
pub use errors::ApiError;
