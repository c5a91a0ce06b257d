//! Result shape for sub-resource fetches.
//!
//! The API may answer a sub-resource URL with a single object or with an
//! array of objects. [`OneOrMany<T>`] mirrors that shape: one mapping
//! becomes [`OneOrMany::One`], an array becomes [`OneOrMany::Many`] with
//! the order preserved.
//!
//! # Deref Pattern
//!
//! `OneOrMany<T>` implements `Deref<Target = [T]>`, so both shapes can be
//! used like a slice:
//!
//! ```rust
//! use gocardless::rest::OneOrMany;
//!
//! let many = OneOrMany::Many(vec![1, 2, 3]);
//! assert_eq!(many.len(), 3);
//! assert_eq!(many[0], 1);
//!
//! let one = OneOrMany::One("bill");
//! assert_eq!(one.iter().count(), 1);
//! assert_eq!(one.into_one(), Some("bill"));
//! ```

use std::ops::Deref;

use serde_json::{Map, Value};

use crate::rest::ResourceError;

/// Either a single item or an ordered sequence of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany<T> {
    /// The API returned a single object.
    One(T),
    /// The API returned an array.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Returns `true` if this holds a single item.
    #[must_use]
    pub const fn is_one(&self) -> bool {
        matches!(self, Self::One(_))
    }

    /// Returns `true` if this holds a sequence.
    #[must_use]
    pub const fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    /// Returns the single item, or `None` for a sequence.
    #[must_use]
    pub fn into_one(self) -> Option<T> {
        match self {
            Self::One(item) => Some(item),
            Self::Many(_) => None,
        }
    }

    /// Flattens into a `Vec`, wrapping a single item.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }

    /// Maps each item while keeping the shape.
    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> OneOrMany<U> {
        match self {
            Self::One(item) => OneOrMany::One(f(item)),
            Self::Many(items) => OneOrMany::Many(items.into_iter().map(f).collect()),
        }
    }

    /// Maps each item with a fallible function, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<OneOrMany<U>, E> {
        match self {
            Self::One(item) => f(item).map(OneOrMany::One),
            Self::Many(items) => items
                .into_iter()
                .map(f)
                .collect::<Result<Vec<_>, _>>()
                .map(OneOrMany::Many),
        }
    }
}

impl OneOrMany<Map<String, Value>> {
    /// Splits an API payload into raw attribute mappings.
    pub(crate) fn from_payload(
        payload: Value,
        resource: &'static str,
        url: &str,
    ) -> Result<Self, ResourceError> {
        let unexpected = || ResourceError::UnexpectedPayload {
            resource,
            url: url.to_string(),
            expected: "a JSON object or an array of JSON objects",
        };

        match payload {
            Value::Object(attributes) => Ok(Self::One(attributes)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(attributes) => Ok(attributes),
                    _ => Err(unexpected()),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Many),
            _ => Err(unexpected()),
        }
    }
}

impl<T> Deref for OneOrMany<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        match self {
            Self::One(item) => std::slice::from_ref(item),
            Self::Many(items) => items,
        }
    }
}

impl<T> IntoIterator for OneOrMany<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
