//! Payout resource implementation.
//!
//! A [`Payout`] transfers collected funds to the merchant's bank account.

use chrono::{DateTime, Utc};

use crate::rest::resources::Bill;
use crate::rest::{Endpoint, OneOrMany, Resource, ResourceData, ResourceError, SubResource};

/// A GoCardless payout.
#[derive(Debug, Clone, PartialEq)]
pub struct Payout(ResourceData);

impl Payout {
    /// The amount paid out, as a decimal string.
    #[must_use]
    pub fn amount(&self) -> Option<&str> {
        self.0.str_attribute("amount")
    }

    /// The reference shown on the merchant's bank statement.
    #[must_use]
    pub fn bank_reference(&self) -> Option<&str> {
        self.0.str_attribute("bank_reference")
    }

    /// Fees deducted from the payout, as a decimal string.
    #[must_use]
    pub fn transaction_fees(&self) -> Option<&str> {
        self.0.str_attribute("transaction_fees")
    }

    /// When the payout was made.
    #[must_use]
    pub fn paid_at(&self) -> Option<&DateTime<Utc>> {
        self.0.timestamp("paid_at")
    }

    /// Fetches the bills included in this payout.
    ///
    /// # Errors
    ///
    /// See [`Resource::sub_resources`].
    pub fn get_bills(&self) -> Result<OneOrMany<Bill>, ResourceError> {
        self.sub_resources("bills")
    }
}

impl Resource for Payout {
    const NAME: &'static str = "Payout";
    const ENDPOINT: Endpoint = Endpoint::new("/payouts/:id");
    const DATE_FIELDS: &'static [&'static str] = &["created_at", "paid_at"];
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
