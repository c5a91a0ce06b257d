//! Integration tests for the GoCardless resources.
//!
//! Tests cover:
//! - Endpoint templates for every resource
//! - Typed sub-resource accessors (Merchant -> Bills, Subscription -> Bills)
//! - Reference lookups (Bill -> Merchant, Bill -> User)
//! - Date fields beyond `created_at`
//! - Downcasting results of name-based dispatch

mod common;

use chrono::{TimeZone, Utc};
use common::MockClient;
use gocardless::rest::resources::{
    AgreementStatus, Bill, BillStatus, IntervalUnit, Merchant, Payout, PreAuthorization,
    Subscription, User,
};
use gocardless::rest::{Resource, ResourceId};
use serde_json::json;

const MERCHANT_ID: &str = "WOQRUJU9OH2HH1";

fn merchant_client() -> MockClient {
    MockClient::new()
        .with_response(
            "/merchants/WOQRUJU9OH2HH1",
            json!({
                "id": MERCHANT_ID,
                "name": "Tom's Delicious Chicken Shop",
                "balance": "12.00",
                "created_at": "2011-11-18T17:07:09Z",
                "next_payout_date": "2011-11-25T00:00:00Z",
                "sub_resource_uris": {
                    "bills": "/merchants/WOQRUJU9OH2HH1/bills",
                    "subscriptions": "/merchants/WOQRUJU9OH2HH1/subscriptions",
                    "users": "/merchants/WOQRUJU9OH2HH1/users"
                }
            }),
        )
        .with_response(
            "/merchants/WOQRUJU9OH2HH1/bills",
            json!([
                {
                    "id": "PWSDXRYSCOKA7Z",
                    "amount": "44.0",
                    "status": "paid",
                    "merchant_id": MERCHANT_ID,
                    "user_id": "BWJ2GP659OXPAU",
                    "created_at": "2011-11-22T11:59:12Z",
                    "paid_at": "2011-11-27T09:00:00Z"
                },
                {
                    "id": "RWSDXRYSCOKA7Y",
                    "amount": "12.5",
                    "status": "pending",
                    "merchant_id": MERCHANT_ID,
                    "user_id": null,
                    "created_at": "2011-11-23T11:59:12Z",
                    "paid_at": null
                }
            ]),
        )
        .with_response(
            "/merchants/WOQRUJU9OH2HH1/subscriptions",
            json!([{
                "id": "AJKH638A99",
                "amount": "7.50",
                "interval_length": 1,
                "interval_unit": "month",
                "status": "active",
                "created_at": "2011-09-12T13:51:30Z",
                "sub_resource_uris": {"bills": "/subscriptions/AJKH638A99/bills"}
            }]),
        )
        .with_response(
            "/subscriptions/AJKH638A99/bills",
            json!({"id": "SUBBILL1", "amount": "7.50", "status": "pending"}),
        )
        .with_response(
            "/merchants/WOQRUJU9OH2HH1/users",
            json!([{"id": "BWJ2GP659OXPAU", "first_name": "Frank", "last_name": "Smith"}]),
        )
        .with_response(
            "/users/BWJ2GP659OXPAU",
            json!({"id": "BWJ2GP659OXPAU", "email": "frank@example.com"}),
        )
}

// ============================================================================
// Endpoint Tests
// ============================================================================

#[test]
fn test_every_resource_resolves_its_endpoint() {
    assert_eq!(Merchant::endpoint_for("M1"), "/merchants/M1");
    assert_eq!(Bill::endpoint_for("B1"), "/bills/B1");
    assert_eq!(Subscription::endpoint_for("S1"), "/subscriptions/S1");
    assert_eq!(PreAuthorization::endpoint_for("P1"), "/pre_authorizations/P1");
    assert_eq!(User::endpoint_for("U1"), "/users/U1");
    assert_eq!(Payout::endpoint_for("PO1"), "/payouts/PO1");
}

// ============================================================================
// Merchant Workflow Tests
// ============================================================================

#[test]
fn test_merchant_to_bills_workflow() {
    let (mock, client) = merchant_client().shared();

    let merchant = Merchant::find_with_client(MERCHANT_ID, client).unwrap();
    assert_eq!(merchant.name(), Some("Tom's Delicious Chicken Shop"));
    assert_eq!(
        merchant.next_payout_date(),
        Some(&Utc.with_ymd_and_hms(2011, 11, 25, 0, 0, 0).unwrap())
    );

    let bills = merchant.get_bills().unwrap();
    assert!(bills.is_many());
    assert_eq!(bills.len(), 2);

    let paid = &bills[0];
    assert_eq!(paid.status().unwrap(), Some(BillStatus::Paid));
    assert!(paid.paid_at().is_some());

    let pending = &bills[1];
    assert_eq!(pending.status().unwrap(), Some(BillStatus::Pending));
    assert!(pending.paid_at().is_none());

    assert_eq!(
        mock.requests(),
        vec![
            "/merchants/WOQRUJU9OH2HH1".to_string(),
            "/merchants/WOQRUJU9OH2HH1/bills".to_string()
        ]
    );
}

#[test]
fn test_bill_references_back_to_merchant_and_user() {
    let (mock, client) = merchant_client().shared();

    let merchant = Merchant::find_with_client(MERCHANT_ID, client).unwrap();
    let bills = merchant.get_bills().unwrap().into_vec();

    let owner = bills[0].get_merchant().unwrap().unwrap();
    assert_eq!(owner, merchant);

    let user = bills[0].get_user().unwrap().unwrap();
    assert_eq!(user.email(), Some("frank@example.com"));

    // A null reference is not looked up
    assert!(bills[1].get_user().unwrap().is_none());

    let requests = mock.requests();
    assert_eq!(requests.iter().filter(|u| u.starts_with("/users/")).count(), 1);
}

#[test]
fn test_nested_sub_resources() {
    let (_, client) = merchant_client().shared();

    let merchant = Merchant::find_with_client(MERCHANT_ID, client).unwrap();
    let subscriptions = merchant.get_subscriptions().unwrap();
    let subscription = &subscriptions[0];

    assert_eq!(subscription.interval_unit().unwrap(), Some(IntervalUnit::Month));
    assert_eq!(subscription.status().unwrap(), Some(AgreementStatus::Active));

    let bills = subscription.get_bills().unwrap();
    let bill = bills.into_one().unwrap();
    assert_eq!(bill.id(), &ResourceId::from("SUBBILL1"));
    assert_eq!(bill.get_endpoint(), "/bills/SUBBILL1");
}

#[test]
fn test_dispatch_by_name_downcasts() {
    let (_, client) = merchant_client().shared();

    let merchant = Merchant::find_with_client(MERCHANT_ID, client).unwrap();
    let users = merchant.get("users").unwrap();

    let user = users[0].downcast_ref::<User>().unwrap();
    assert_eq!(user.first_name(), Some("Frank"));
    assert!(users[0].downcast_ref::<Bill>().is_none());
    assert_eq!(users[0].resource_name(), "User");
}

#[test]
fn test_relations_absent_from_payload_have_no_accessor() {
    let (mock, client) = merchant_client().shared();

    let merchant = Merchant::find_with_client(MERCHANT_ID, client).unwrap();

    assert!(!merchant.data().has_accessor("get_payouts"));
    assert!(merchant.get_payouts().is_err());
    assert_eq!(mock.requests().len(), 1);
}
