//! GoCardless resource implementations.
//!
//! Each resource wraps [`ResourceData`](crate::rest::ResourceData) and adds
//! typed getters for its attributes, typed `get_<relation>` methods for its
//! sub-resources and lookups for the resources it references by id.
//!
//! | Resource | Endpoint | Sub-resources | References |
//! |---|---|---|---|
//! | [`Merchant`] | `/merchants/:id` | bills, pre_authorizations, subscriptions, users, payouts | |
//! | [`Bill`] | `/bills/:id` | | merchant, user |
//! | [`Subscription`] | `/subscriptions/:id` | bills | merchant, user |
//! | [`PreAuthorization`] | `/pre_authorizations/:id` | bills | merchant, user |
//! | [`User`] | `/users/:id` | | |
//! | [`Payout`] | `/payouts/:id` | bills | |
//!
//! # Example
//!
//! ```rust,ignore
//! use gocardless::rest::Resource;
//! use gocardless::rest::resources::{AgreementStatus, Subscription};
//!
//! let subscription = Subscription::find("AJKH638A99")?;
//! if subscription.status()? == Some(AgreementStatus::Active) {
//!     for bill in subscription.get_bills()?.iter() {
//!         println!("{} {:?}", bill.id(), bill.status()?);
//!     }
//! }
//! ```

mod bill;
mod common;
mod merchant;
mod payout;
mod pre_authorization;
mod subscription;
mod user;

pub use bill::{Bill, BillStatus};
pub use common::{AgreementStatus, IntervalUnit};
pub use merchant::Merchant;
pub use payout::Payout;
pub use pre_authorization::PreAuthorization;
pub use subscription::Subscription;
pub use user::User;
