//! HTTP API tests against the in-memory invoice store

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{Datelike, Utc};
use serde_json::{json, Value};

use interface_api::{config::ApiConfig, create_router};
use test_utils::{InMemoryInvoiceStore, TestInvoiceBuilder};

fn server() -> TestServer {
    server_with(InMemoryInvoiceStore::new())
}

fn server_with(store: InMemoryInvoiceStore) -> TestServer {
    let app = create_router(Arc::new(store), ApiConfig::default());
    TestServer::new(app).expect("router should build")
}

fn standard_body(address: &str) -> Value {
    json!({
        "address": address,
        "items": [
            { "description": "Website development", "quantity": 2, "rate": 100 },
            { "description": "Annual hosting", "quantity": 1, "rate": 50 }
        ]
    })
}

#[tokio::test]
async fn health_endpoints_respond() {
    let server = server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let response = server.get("/health/ready").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn create_invoice_returns_201_with_computed_fields() {
    let server = server();

    let response = server
        .post("/api/v1/invoices")
        .json(&standard_body("Patna, Bihar"))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    let year = Utc::now().year();
    assert_eq!(
        body["invoice_number"],
        format!("DWPL/{}/0001", year)
    );
    assert_eq!(body["sub_total"], "250.00");
    assert_eq!(body["cgst"], "22.50");
    assert_eq!(body["sgst"], "22.50");
    assert_eq!(body["igst"], "0.00");
    assert_eq!(body["gross_amount"], "295.00");
    assert_eq!(body["jurisdiction"], "Bihar");
    assert_eq!(body["items"][0]["serial_number"], "1");
    assert_eq!(body["items"][1]["serial_number"], "2");
}

#[tokio::test]
async fn out_of_state_invoice_charges_igst() {
    let server = server();

    let response = server
        .post("/api/v1/invoices")
        .json(&standard_body("Mumbai, Maharashtra"))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["cgst"], "0.00");
    assert_eq!(body["sgst"], "0.00");
    assert_eq!(body["igst"], "45.00");
    assert_eq!(body["gross_amount"], "295.00");
    assert_eq!(body["jurisdiction"], "Other");
}

#[tokio::test]
async fn empty_item_list_is_rejected_with_422() {
    let server = server();

    let response = server
        .post("/api/v1/invoices")
        .json(&json!({ "address": "Patna, Bihar", "items": [] }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["error"], "validation_error");

    // Nothing was stored
    let count: u64 = server.get("/api/v1/invoices/count").await.json();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn negative_quantity_is_rejected_with_422() {
    let server = server();

    let response = server
        .post("/api/v1/invoices")
        .json(&json!({
            "address": "Patna, Bihar",
            "items": [{ "description": "Bad row", "quantity": -1, "rate": 10 }]
        }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_description_is_rejected_with_422() {
    let server = server();

    let response = server
        .post("/api/v1/invoices")
        .json(&json!({
            "address": "Patna, Bihar",
            "items": [{ "description": "  ", "quantity": 1, "rate": 10 }]
        }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn numbering_race_surfaces_as_409_conflict() {
    // A store whose count is frozen below the stored invoices reproduces
    // two submissions reading the same count: the second insert collides
    // on the unique invoice number.
    let existing = TestInvoiceBuilder::new()
        .with_now(Utc::now())
        .with_prior_count(0)
        .build();
    let store = InMemoryInvoiceStore::seeded(vec![existing]).with_frozen_count(0);
    let server = server_with(store);

    let response = server
        .post("/api/v1/invoices")
        .json(&standard_body("Patna, Bihar"))
        .await;
    response.assert_status(StatusCode::CONFLICT);

    let body: Value = response.json();
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn listing_returns_newest_first() {
    let server = server();

    server
        .post("/api/v1/invoices")
        .json(&standard_body("Patna, Bihar"))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/api/v1/invoices")
        .json(&standard_body("Mumbai, Maharashtra"))
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = server.get("/api/v1/invoices").await.json();
    let listed = body.as_array().unwrap();
    let year = Utc::now().year();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["invoice_number"], format!("DWPL/{}/0002", year));
    assert_eq!(listed[1]["invoice_number"], format!("DWPL/{}/0001", year));
}

#[tokio::test]
async fn count_and_next_number_track_submissions() {
    let server = server();
    let year = Utc::now().year();

    let next: Value = server.get("/api/v1/invoices/next-number").await.json();
    assert_eq!(next["invoice_number"], format!("DWPL/{}/0001", year));
    assert_eq!(next["prior_count"], 0);

    server
        .post("/api/v1/invoices")
        .json(&standard_body("Patna, Bihar"))
        .await
        .assert_status(StatusCode::CREATED);

    let count: u64 = server.get("/api/v1/invoices/count").await.json();
    assert_eq!(count, 1);

    let next: Value = server.get("/api/v1/invoices/next-number").await.json();
    assert_eq!(next["invoice_number"], format!("DWPL/{}/0002", year));
}

#[tokio::test]
async fn get_by_number_roundtrips() {
    let server = server();

    let created: Value = server
        .post("/api/v1/invoices")
        .json(&standard_body("Patna, Bihar"))
        .await
        .json();
    let number = created["invoice_number"].as_str().unwrap();

    let encoded = number.replace('/', "%2F");
    let response = server.get(&format!("/api/v1/invoices/{}", encoded)).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["invoice_number"], number);
    assert_eq!(body["gross_amount"], "295.00");
}

#[tokio::test]
async fn unknown_number_is_404() {
    let server = server();

    let response = server
        .get("/api/v1/invoices/DWPL%2F2025%2F9999")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn print_view_renders_html() {
    let server = server();

    let created: Value = server
        .post("/api/v1/invoices")
        .json(&standard_body("Patna, Bihar"))
        .await
        .json();
    let number = created["invoice_number"].as_str().unwrap();

    let encoded = number.replace('/', "%2F");
    let response = server
        .get(&format!("/api/v1/invoices/{}/print", encoded))
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("TAX INVOICE"));
    assert!(html.contains(number));
    assert!(html.contains("295.00"));
    assert!(html.contains("PLACE OF SUPPLY"));
}
