//! Pre-authorization resource implementation.
//!
//! A [`PreAuthorization`] lets a merchant bill a user on demand, up to
//! `max_amount` per interval. Bills raised against it are listed under its
//! `bills` sub-resource.

use chrono::{DateTime, Utc};

use crate::rest::resources::{AgreementStatus, Bill, IntervalUnit, Merchant, User};
use crate::rest::{Endpoint, OneOrMany, Resource, ResourceData, ResourceError, SubResource};

/// A GoCardless pre-authorization.
#[derive(Debug, Clone, PartialEq)]
pub struct PreAuthorization(ResourceData);

impl PreAuthorization {
    /// The most that can be collected per interval, as a decimal string.
    #[must_use]
    pub fn max_amount(&self) -> Option<&str> {
        self.0.str_attribute("max_amount")
    }

    /// What is left to collect in the current interval.
    #[must_use]
    pub fn remaining_amount(&self) -> Option<&str> {
        self.0.str_attribute("remaining_amount")
    }

    /// The number of interval units per interval.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidAttribute`] if the value is not a
    /// non-negative integer.
    pub fn interval_length(&self) -> Result<Option<u32>, ResourceError> {
        self.0.attribute_as("interval_length")
    }

    /// The interval unit.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidAttribute`] for an unknown unit.
    pub fn interval_unit(&self) -> Result<Option<IntervalUnit>, ResourceError> {
        self.0.attribute_as("interval_unit")
    }

    /// The pre-authorization status.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidAttribute`] for an unknown status.
    pub fn status(&self) -> Result<Option<AgreementStatus>, ResourceError> {
        self.0.attribute_as("status")
    }

    /// The start of the next interval.
    #[must_use]
    pub fn next_interval_start(&self) -> Option<&DateTime<Utc>> {
        self.0.timestamp("next_interval_start")
    }

    /// When the pre-authorization expires.
    #[must_use]
    pub fn expires_at(&self) -> Option<&DateTime<Utc>> {
        self.0.timestamp("expires_at")
    }

    /// Fetches the bills raised against this pre-authorization.
    ///
    /// # Errors
    ///
    /// See [`Resource::sub_resources`].
    pub fn get_bills(&self) -> Result<OneOrMany<Bill>, ResourceError> {
        self.sub_resources("bills")
    }

    /// Looks up the merchant.
    ///
    /// # Errors
    ///
    /// See [`Resource::reference`].
    pub fn get_merchant(&self) -> Result<Option<Merchant>, ResourceError> {
        self.reference("merchant_id")
    }

    /// Looks up the user.
    ///
    /// # Errors
    ///
    /// See [`Resource::reference`].
    pub fn get_user(&self) -> Result<Option<User>, ResourceError> {
        self.reference("user_id")
    }
}

impl Resource for PreAuthorization {
    const NAME: &'static str = "PreAuthorization";
    const ENDPOINT: Endpoint = Endpoint::new("/pre_authorizations/:id");
    const DATE_FIELDS: &'static [&'static str] =
        &["created_at", "next_interval_start", "expires_at"];
    const SUB_RESOURCES: &'static [SubResource] = &[SubResource::of::<Bill>("bills")];

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
