//! Integration tests for the public shopping surface.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations and demo seed applied
//!   (cargo run -p hp-cli -- migrate && cargo run -p hp-cli -- seed)
//! - The server running (cargo run -p hotplate-server)
//!
//! Run with: cargo test -p hotplate-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::Value;

use hotplate_integration_tests::base_url;

/// Pincode the demo seed populates.
const SEEDED_PINCODE: &str = "94103";

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_health() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), "ok");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_readiness() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/health/ready", base_url()))
        .send()
        .await
        .expect("Failed to reach readiness endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running server and seeded database"]
async fn test_availability_lists_restaurants_foods_categories() {
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/shopping/availability/{SEEDED_PINCODE}", base_url()))
        .send()
        .await
        .expect("Failed to fetch availability")
        .json()
        .await
        .expect("Failed to read availability");

    let restaurants = body["restaurants"].as_array().expect("restaurants");
    let foods = body["foods"].as_array().expect("foods");
    let categories = body["categories"].as_array().expect("categories");

    assert!(!restaurants.is_empty());
    assert!(!foods.is_empty());
    assert!(!categories.is_empty());

    // every listed restaurant is actually taking orders
    for restaurant in restaurants {
        assert_eq!(restaurant["service_available"], true);
        assert_eq!(restaurant["pincode"], SEEDED_PINCODE);
    }
}

#[tokio::test]
#[ignore = "Requires running server and seeded database"]
async fn test_availability_empty_pincode() {
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/shopping/availability/00000", base_url()))
        .send()
        .await
        .expect("Failed to fetch availability")
        .json()
        .await
        .expect("Failed to read availability");

    assert_eq!(body["restaurants"].as_array().expect("restaurants").len(), 0);
    assert_eq!(body["foods"].as_array().expect("foods").len(), 0);
}

#[tokio::test]
#[ignore = "Requires running server and seeded database"]
async fn test_ready_in_30_min_filters_slow_foods() {
    let client = Client::new();

    let body: Value = client
        .get(format!(
            "{}/shopping/ready-in-30-min/{SEEDED_PINCODE}",
            base_url()
        ))
        .send()
        .await
        .expect("Failed to fetch quick foods")
        .json()
        .await
        .expect("Failed to read quick foods");

    let foods = body.as_array().expect("foods");
    assert!(!foods.is_empty());
    for food in foods {
        assert!(food["ready_time"].as_i64().expect("ready_time") <= 30);
    }
}

#[tokio::test]
#[ignore = "Requires running server and seeded database"]
async fn test_search_matches_names() {
    let client = Client::new();

    let body: Value = client
        .get(format!(
            "{}/shopping/search/{SEEDED_PINCODE}?q=taco",
            base_url()
        ))
        .send()
        .await
        .expect("Failed to search")
        .json()
        .await
        .expect("Failed to read search results");

    let foods = body.as_array().expect("foods");
    assert!(!foods.is_empty());
    for food in foods {
        let name = food["name"].as_str().expect("name").to_lowercase();
        let description = food["description"].as_str().expect("description").to_lowercase();
        assert!(name.contains("taco") || description.contains("taco"));
    }
}

#[tokio::test]
#[ignore = "Requires running server and seeded database"]
async fn test_top_restaurants_capped_at_ten() {
    let client = Client::new();

    let body: Value = client
        .get(format!(
            "{}/shopping/top-restaurants/{SEEDED_PINCODE}",
            base_url()
        ))
        .send()
        .await
        .expect("Failed to fetch top restaurants")
        .json()
        .await
        .expect("Failed to read top restaurants");

    assert!(body.as_array().expect("restaurants").len() <= 10);
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_unknown_restaurant_is_not_found() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/shopping/restaurant/999999", base_url()))
        .send()
        .await
        .expect("Failed to fetch restaurant");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
