//! Merchant resource implementation.
//!
//! A [`Merchant`] is the account receiving payments. Its payload links to
//! every collection that belongs to it through `sub_resource_uris`, so each
//! of those is available as a typed `get_<relation>` method.
//!
//! # Example
//!
//! ```rust,ignore
//! use gocardless::rest::Resource;
//! use gocardless::rest::resources::Merchant;
//!
//! let merchant = Merchant::find_with_client("WOQRUJU9OH2HH1", client)?;
//! println!("{}: balance {}", merchant.name().unwrap_or(""), merchant.balance().unwrap_or("0"));
//!
//! for bill in merchant.get_bills()?.iter() {
//!     println!("- {} {}", bill.id(), bill.amount().unwrap_or(""));
//! }
//! ```

use chrono::{DateTime, Utc};

use crate::rest::resources::{Bill, Payout, PreAuthorization, Subscription, User};
use crate::rest::{Endpoint, OneOrMany, Resource, ResourceData, ResourceError, SubResource};

/// A GoCardless merchant.
#[derive(Debug, Clone, PartialEq)]
pub struct Merchant(ResourceData);

impl Merchant {
    /// The merchant's display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.str_attribute("name")
    }

    /// The merchant's description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.0.str_attribute("description")
    }

    /// The merchant's contact email.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.0.str_attribute("email")
    }

    /// Funds available for payout, as a decimal string.
    #[must_use]
    pub fn balance(&self) -> Option<&str> {
        self.0.str_attribute("balance")
    }

    /// Funds collected but not yet available, as a decimal string.
    #[must_use]
    pub fn pending_balance(&self) -> Option<&str> {
        self.0.str_attribute("pending_balance")
    }

    /// The date of the next payout.
    #[must_use]
    pub fn next_payout_date(&self) -> Option<&DateTime<Utc>> {
        self.0.timestamp("next_payout_date")
    }

    /// Fetches the merchant's bills.
    ///
    /// # Errors
    ///
    /// See [`Resource::sub_resources`].
    pub fn get_bills(&self) -> Result<OneOrMany<Bill>, ResourceError> {
        self.sub_resources("bills")
    }

    /// Fetches the merchant's pre-authorizations.
    ///
    /// # Errors
    ///
    /// See [`Resource::sub_resources`].
    pub fn get_pre_authorizations(&self) -> Result<OneOrMany<PreAuthorization>, ResourceError> {
        self.sub_resources("pre_authorizations")
    }

    /// Fetches the merchant's subscriptions.
    ///
    /// # Errors
    ///
    /// See [`Resource::sub_resources`].
    pub fn get_subscriptions(&self) -> Result<OneOrMany<Subscription>, ResourceError> {
        self.sub_resources("subscriptions")
    }

    /// Fetches the merchant's users.
    ///
    /// # Errors
    ///
    /// See [`Resource::sub_resources`].
    pub fn get_users(&self) -> Result<OneOrMany<User>, ResourceError> {
        self.sub_resources("users")
    }

    /// Fetches the merchant's payouts.
    ///
    /// # Errors
    ///
    /// See [`Resource::sub_resources`].
    pub fn get_payouts(&self) -> Result<OneOrMany<Payout>, ResourceError> {
        self.sub_resources("payouts")
    }
}

impl Resource for Merchant {
    const NAME: &'static str = "Merchant";
    const ENDPOINT: Endpoint = Endpoint::new("/merchants/:id");
    const DATE_FIELDS: &'static [&'static str] = &["created_at", "next_payout_date"];
    const SUB_RESOURCES: &'static [SubResource] = &[
        SubResource::of::<Bill>("bills"),
        SubResource::of::<PreAuthorization>("pre_authorizations"),
        SubResource::of::<Subscription>("subscriptions"),
        SubResource::of::<User>("users"),
        SubResource::of::<Payout>("payouts"),
    ];

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
