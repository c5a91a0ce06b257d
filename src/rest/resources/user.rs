//! User resource implementation.
//!
//! A [`User`] is a customer who has paid a merchant or authorised a
//! subscription or pre-authorization.

use crate::rest::{Endpoint, Resource, ResourceData};

/// A GoCardless user (customer).
#[derive(Debug, Clone, PartialEq)]
pub struct User(ResourceData);

impl User {
    /// The user's email address.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.0.str_attribute("email")
    }

    /// The user's first name.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.0.str_attribute("first_name")
    }

    /// The user's last name.
    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.0.str_attribute("last_name")
    }
}

impl Resource for User {
    const NAME: &'static str = "User";
    const ENDPOINT: Endpoint = Endpoint::new("/users/:id");

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
