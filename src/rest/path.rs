//! Endpoint templates for REST resources.
//!
//! Every resource type declares the path it lives at as an [`Endpoint`]
//! template containing exactly one `:id` placeholder:
//!
//! - `/merchants/:id`
//! - `/pre_authorizations/:id`
//!
//! Resolving a template substitutes the identifier literally. No URL
//! encoding is applied.
//!
//! # Example
//!
//! ```rust
//! use gocardless::rest::Endpoint;
//!
//! const BILLS: Endpoint = Endpoint::new("/bills/:id");
//!
//! assert_eq!(BILLS.resolve("0A1B2C"), "/bills/0A1B2C");
//! assert_eq!(BILLS.resolve(42), "/bills/42");
//! ```

use std::fmt::{self, Display};

/// The identifier placeholder recognised in endpoint templates.
pub const ID_PLACEHOLDER: &str = ":id";

/// A path template with a single `:id` placeholder.
///
/// Templates are validated when the constant is evaluated, so a resource
/// declaring a template without exactly one placeholder fails to compile.
///
/// ```compile_fail
/// use gocardless::rest::Endpoint;
///
/// const BROKEN: Endpoint = Endpoint::new("/merchants");
/// let _ = BROKEN;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    template: &'static str,
}

impl Endpoint {
    /// Creates a new endpoint template.
    ///
    /// # Panics
    ///
    /// Panics if `template` does not contain exactly one `:id` placeholder.
    /// In a `const` context this is a compile-time error.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        assert!(
            count_placeholders(template) == 1,
            "endpoint template must contain exactly one :id placeholder"
        );
        Self { template }
    }

    /// Returns the raw template.
    #[must_use]
    pub const fn template(&self) -> &'static str {
        self.template
    }

    /// Substitutes `id` for the placeholder.
    #[must_use]
    pub fn resolve(&self, id: impl Display) -> String {
        self.template.replacen(ID_PLACEHOLDER, &id.to_string(), 1)
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template)
    }
}

/// Counts non-overlapping `:id` occurrences in `template`.
const fn count_placeholders(template: &str) -> usize {
    let bytes = template.as_bytes();
    let needle = ID_PLACEHOLDER.as_bytes();
    let mut count = 0;
    let mut i = 0;

    while i + needle.len() <= bytes.len() {
        let mut j = 0;
        while j < needle.len() && bytes[i + j] == needle[j] {
            j += 1;
        }
        if j == needle.len() {
            count += 1;
            i += needle.len();
        } else {
            i += 1;
        }
    }

    count
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Endpoint>();
};
