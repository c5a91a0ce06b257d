//! Bill resource implementation.
//!
//! A [`Bill`] is a single payment from a user to a merchant. Bills are
//! created on their own or by a subscription or pre-authorization, recorded
//! in `source_type` / `source_id`.
//!
//! # Example
//!
//! ```rust,ignore
//! use gocardless::rest::Resource;
//! use gocardless::rest::resources::{Bill, BillStatus};
//!
//! let bill = Bill::find_with_client("0A1B2C3D", client)?;
//! if bill.status()? == Some(BillStatus::Failed) && bill.can_be_retried() == Some(true) {
//!     println!("{} can be retried", bill.id());
//! }
//! let merchant = bill.get_merchant()?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::resources::{Merchant, User};
use crate::rest::{Endpoint, Resource, ResourceData, ResourceError};

/// The status of a bill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    /// Submitted for collection.
    Pending,
    /// Collected from the user.
    Paid,
    /// Collection failed.
    Failed,
    /// Reversed by the user's bank.
    Chargedback,
    /// Cancelled before collection.
    Cancelled,
    /// Withdrawn to the merchant.
    Withdrawn,
    /// Refunded to the user.
    Refunded,
}

/// A GoCardless bill.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill(ResourceData);

impl Bill {
    /// The amount, as a decimal string (e.g., "44.0").
    #[must_use]
    pub fn amount(&self) -> Option<&str> {
        self.0.str_attribute("amount")
    }

    /// The ISO 4217 currency code.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.0.str_attribute("currency")
    }

    /// The collection status.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidAttribute`] for an unknown status.
    pub fn status(&self) -> Result<Option<BillStatus>, ResourceError> {
        self.0.attribute_as("status")
    }

    /// What created this bill (e.g., "subscription").
    #[must_use]
    pub fn source_type(&self) -> Option<&str> {
        self.0.str_attribute("source_type")
    }

    /// The id of the resource that created this bill.
    #[must_use]
    pub fn source_id(&self) -> Option<&str> {
        self.0.str_attribute("source_id")
    }

    /// Whether a failed bill can be retried.
    #[must_use]
    pub fn can_be_retried(&self) -> Option<bool> {
        self.0.bool_attribute("can_be_retried")
    }

    /// When the bill was paid.
    #[must_use]
    pub fn paid_at(&self) -> Option<&DateTime<Utc>> {
        self.0.timestamp("paid_at")
    }

    /// Looks up the merchant receiving this bill.
    ///
    /// # Errors
    ///
    /// See [`Resource::reference`].
    pub fn get_merchant(&self) -> Result<Option<Merchant>, ResourceError> {
        self.reference("merchant_id")
    }

    /// Looks up the user paying this bill.
    ///
    /// # Errors
    ///
    /// See [`Resource::reference`].
    pub fn get_user(&self) -> Result<Option<User>, ResourceError> {
        self.reference("user_id")
    }
}

impl Resource for Bill {
    const NAME: &'static str = "Bill";
    const ENDPOINT: Endpoint = Endpoint::new("/bills/:id");
    const DATE_FIELDS: &'static [&'static str] = &["created_at", "paid_at"];

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
