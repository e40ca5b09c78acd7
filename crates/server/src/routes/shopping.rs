//! Shopping route handlers.
//!
//! The public, unauthenticated surface the mobile client browses: what is
//! available in a pincode, who the top restaurants are, what is ready
//! quickly, and text search over the menus.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use hotplate_core::VendorId;

use crate::db::{FoodRepository, VendorRepository};
use crate::error::{AppError, Result};
use crate::routes::types::{FoodSummary, VendorSummary};
use crate::state::AppState;

/// How many restaurants the top-restaurants listing returns.
const TOP_RESTAURANT_LIMIT: i64 = 10;

/// Ready-time ceiling for the quick-foods listing, in minutes.
const QUICK_READY_MINUTES: i32 = 30;

/// Everything available in a pincode, in one response.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub restaurants: Vec<VendorSummary>,
    pub foods: Vec<FoodSummary>,
    pub categories: Vec<String>,
}

/// One restaurant with its menu.
#[derive(Debug, Serialize)]
pub struct RestaurantResponse {
    pub restaurant: VendorSummary,
    pub foods: Vec<FoodSummary>,
}

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Food availability for a pincode.
///
/// GET /shopping/availability/{pincode}
///
/// Restaurants come back best-rated first; categories are the distinct
/// menu categories on offer, for the client's section headers.
pub async fn availability(
    State(state): State<AppState>,
    Path(pincode): Path<String>,
) -> Result<Json<AvailabilityResponse>> {
    let vendors = VendorRepository::new(state.pool());
    let foods = FoodRepository::new(state.pool());

    let restaurants = vendors.available_by_pincode(&pincode).await?;
    let vendor_ids: Vec<VendorId> = restaurants.iter().map(|v| v.id).collect();
    let menu = foods.list_by_vendors(&vendor_ids).await?;

    let mut categories: Vec<String> = menu.iter().map(|f| f.category.clone()).collect();
    categories.sort();
    categories.dedup();

    Ok(Json(AvailabilityResponse {
        restaurants: restaurants.into_iter().map(VendorSummary::from).collect(),
        foods: menu.into_iter().map(FoodSummary::from).collect(),
        categories,
    }))
}

/// The highest-rated available restaurants in a pincode.
///
/// GET /shopping/top-restaurants/{pincode}
pub async fn top_restaurants(
    State(state): State<AppState>,
    Path(pincode): Path<String>,
) -> Result<Json<Vec<VendorSummary>>> {
    let vendors = VendorRepository::new(state.pool());

    let list = vendors.top_rated(&pincode, TOP_RESTAURANT_LIMIT).await?;

    Ok(Json(list.into_iter().map(VendorSummary::from).collect()))
}

/// Foods ready within 30 minutes in a pincode.
///
/// GET /shopping/ready-in-30-min/{pincode}
pub async fn ready_in_30_min(
    State(state): State<AppState>,
    Path(pincode): Path<String>,
) -> Result<Json<Vec<FoodSummary>>> {
    let foods = FoodRepository::new(state.pool());

    let list = foods.ready_within(&pincode, QUICK_READY_MINUTES).await?;

    Ok(Json(list.into_iter().map(FoodSummary::from).collect()))
}

/// Text search over menus in a pincode.
///
/// GET /shopping/search/{pincode}?q=...
///
/// An empty query returns every food available in the pincode.
pub async fn search(
    State(state): State<AppState>,
    Path(pincode): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<FoodSummary>>> {
    let foods = FoodRepository::new(state.pool());

    let list = foods.search(&pincode, params.q.trim()).await?;

    Ok(Json(list.into_iter().map(FoodSummary::from).collect()))
}

/// One restaurant with its full menu.
///
/// GET /shopping/restaurant/{id}
///
/// # Errors
///
/// Returns 404 if the restaurant does not exist.
pub async fn restaurant(
    State(state): State<AppState>,
    Path(vendor_id): Path<i32>,
) -> Result<Json<RestaurantResponse>> {
    let vendors = VendorRepository::new(state.pool());
    let foods = FoodRepository::new(state.pool());

    let vendor = vendors
        .get_by_id(VendorId::new(vendor_id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("restaurant {vendor_id} not found")))?;

    let menu = foods.list_by_vendor(vendor.id).await?;

    Ok(Json(RestaurantResponse {
        restaurant: vendor.into(),
        foods: menu.into_iter().map(FoodSummary::from).collect(),
    }))
}
