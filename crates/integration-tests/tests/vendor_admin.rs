//! Integration tests for vendor onboarding and the vendor surface.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p hotplate-server)
//!
//! Run with: cargo test -p hotplate-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use hotplate_integration_tests::{base_url, unique_email};

/// Test helper: create a vendor through the admin surface.
async fn create_vendor(client: &Client, email: &str, password: &str) -> Value {
    let resp = client
        .post(format!("{}/admin/vendors", base_url()))
        .json(&json!({
            "name": "Test Kitchen",
            "owner_name": "Kit",
            "email": email,
            "phone": "+1 555 222 3333",
            "password": password,
            "address": "2 Plaza",
            "pincode": "94103",
            "food_types": ["test"],
        }))
        .send()
        .await
        .expect("Failed to create vendor");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to read vendor response")
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_admin_creates_vendor_without_secrets_in_body() {
    let client = Client::new();
    let email = unique_email("vendor");

    let vendor = create_vendor(&client, &email, "tandoori-42").await;

    assert_eq!(vendor["email"], email.as_str());
    assert_eq!(vendor["service_available"], false);
    // hashes and passwords never appear in responses
    assert!(vendor.get("password").is_none());
    assert!(vendor.get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_admin_duplicate_vendor_email_conflicts() {
    let client = Client::new();
    let email = unique_email("vendor-dup");

    create_vendor(&client, &email, "tandoori-42").await;

    let resp = client
        .post(format!("{}/admin/vendors", base_url()))
        .json(&json!({
            "name": "Copy Kitchen",
            "owner_name": "Kit",
            "email": email,
            "phone": "+1 555 222 3333",
            "password": "tandoori-42",
            "pincode": "94103",
            "address": "2 Plaza",
        }))
        .send()
        .await
        .expect("Failed to send duplicate vendor");

    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_admin_get_unknown_vendor_is_not_found() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/admin/vendors/999999", base_url()))
        .send()
        .await
        .expect("Failed to fetch vendor");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_vendor_login_and_menu_roundtrip() {
    let client = Client::new();
    let email = unique_email("vendor-menu");

    create_vendor(&client, &email, "tandoori-42").await;

    let resp = client
        .post(format!("{}/vendor/login", base_url()))
        .json(&json!({"email": email, "password": "tandoori-42"}))
        .send()
        .await
        .expect("Failed to login vendor");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("Failed to read login response");
    let token = body["token"].as_str().expect("vendor token");

    let resp = client
        .post(format!("{}/vendor/foods", base_url()))
        .bearer_auth(token)
        .json(&json!({
            "name": "Test Dish",
            "description": "Only for tests",
            "category": "main",
            "food_type": "veg",
            "ready_time": 15,
            "price": "9.50",
        }))
        .send()
        .await
        .expect("Failed to add food");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let foods: Value = client
        .get(format!("{}/vendor/foods", base_url()))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to list foods")
        .json()
        .await
        .expect("Failed to read foods");

    let list = foods.as_array().expect("food list");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Test Dish");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_customer_token_is_rejected_on_vendor_surface() {
    let client = Client::new();
    let email = unique_email("crossover");

    let resp = client
        .post(format!("{}/customer/signup", base_url()))
        .json(&json!({
            "email": email,
            "phone": "+1 555 000 1111",
            "password": "super-salsa",
        }))
        .send()
        .await
        .expect("Failed to sign up");
    let body: Value = resp.json().await.expect("Failed to read signup");
    let token = body["token"].as_str().expect("customer token");

    let resp = client
        .get(format!("{}/vendor/profile", base_url()))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to fetch vendor profile");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_service_toggle_flips_availability() {
    let client = Client::new();
    let email = unique_email("vendor-toggle");

    create_vendor(&client, &email, "tandoori-42").await;

    let body: Value = client
        .post(format!("{}/vendor/login", base_url()))
        .json(&json!({"email": email, "password": "tandoori-42"}))
        .send()
        .await
        .expect("Failed to login vendor")
        .json()
        .await
        .expect("Failed to read login");
    let token = body["token"].as_str().expect("vendor token");

    let profile: Value = client
        .patch(format!("{}/vendor/service", base_url()))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to toggle service")
        .json()
        .await
        .expect("Failed to read profile");
    assert_eq!(profile["service_available"], true);

    let profile: Value = client
        .patch(format!("{}/vendor/service", base_url()))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to toggle service")
        .json()
        .await
        .expect("Failed to read profile");
    assert_eq!(profile["service_available"], false);
}
