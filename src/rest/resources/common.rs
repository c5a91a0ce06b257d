//! Types shared by several resources.

use serde::{Deserialize, Serialize};

/// The unit of a billing interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IntervalUnit {
    /// Daily intervals.
    Day,
    /// Weekly intervals.
    Week,
    /// Monthly intervals.
    Month,
}

/// The status of a recurring agreement (subscription or pre-authorization).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AgreementStatus {
    /// Created but not yet authorised by the customer.
    Inactive,
    /// Authorised and collecting.
    Active,
    /// Cancelled by the merchant or customer.
    Cancelled,
    /// Past its expiry date.
    Expired,
}
