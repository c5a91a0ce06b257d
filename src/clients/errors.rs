//! Error type raised by API client collaborators.
//!
//! Whatever an [`ApiClient`](crate::clients::ApiClient) implementation fails
//! with is expressed as an [`ApiError`]. The resource layer never retries,
//! wraps or suppresses these errors; they reach the caller through
//! [`ResourceError::Api`](crate::rest::ResourceError::Api) unchanged.
//!
//! # Example
//!
//! ```rust
//! use gocardless::clients::ApiError;
//!
//! let error = ApiError::Response {
//!     code: 404,
//!     message: r#"{"error":["Not found"]}"#.to_string(),
//!     error_reference: Some("req-123".to_string()),
//! };
//!
//! assert_eq!(error.status(), Some(404));
//! ```

use std::error::Error as StdError;

use thiserror::Error;

/// Error returned by an [`ApiClient`](crate::clients::ApiClient) when a
/// request cannot be completed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-successful status code.
    #[error("{message}")]
    Response {
        /// The HTTP status code of the response.
        code: u16,
        /// Serialized error message returned by the API.
        message: String,
        /// Reference ID for error reporting, if the API provided one.
        error_reference: Option<String>,
    },

    /// The request never produced a response.
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// The URL that was requested.
        url: String,
        /// The underlying transport failure.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl ApiError {
    /// Wraps a transport-level failure for the given URL.
    pub fn transport(
        url: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Returns the HTTP status code, if the API responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response { code, .. } => Some(*code),
            Self::Transport { .. } => None,
        }
    }

    /// Returns the error reference, if available.
    #[must_use]
    pub fn error_reference(&self) -> Option<&str> {
        match self {
            Self::Response {
                error_reference, ..
            } => error_reference.as_deref(),
            Self::Transport { .. } => None,
        }
    }
}
