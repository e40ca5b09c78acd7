//! Vendor route handlers.
//!
//! Vendors are created by the admin surface; here they log in, manage
//! their profile and availability, and maintain their menu.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use hotplate_core::{Email, Phone, Price, VendorId};

use crate::db::foods::NewFood;
use crate::db::vendors::VendorProfileUpdate;
use crate::db::{FoodRepository, VendorRepository};
use crate::error::{AppError, Result};
use crate::middleware::RequireVendor;
use crate::routes::types::{FoodSummary, VendorSummary};
use crate::services::AuthService;
use crate::state::AppState;

// =============================================================================
// Request Types
// =============================================================================

/// Vendor login request body.
#[derive(Debug, Deserialize)]
pub struct VendorLoginRequest {
    pub email: String,
    pub password: String,
}

/// Vendor login response body.
#[derive(Debug, Serialize)]
pub struct VendorLoginResponse {
    pub token: String,
    pub email: Email,
}

/// Vendor profile edit request body.
#[derive(Debug, Deserialize)]
pub struct EditVendorProfileRequest {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub food_types: Vec<String>,
}

/// New menu item request body.
#[derive(Debug, Deserialize)]
pub struct AddFoodRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    pub food_type: String,
    pub ready_time: i32,
    pub price: Price,
}

// =============================================================================
// Handlers
// =============================================================================

/// Login with vendor email and password.
///
/// POST /vendor/login
///
/// # Errors
///
/// Returns 404 with a generic message for unknown email or wrong password.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<VendorLoginRequest>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.pool(), state.jwt(), state.config().otp_ttl_minutes);

    let (vendor, token) = auth.login_vendor(&req.email, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(VendorLoginResponse {
            token,
            email: vendor.email,
        }),
    ))
}

/// Fetch the logged-in vendor's profile.
///
/// GET /vendor/profile
pub async fn get_profile(
    State(state): State<AppState>,
    RequireVendor(claims): RequireVendor,
) -> Result<Json<VendorSummary>> {
    let vendors = VendorRepository::new(state.pool());

    let vendor = vendors
        .get_by_id(VendorId::new(claims.sub))
        .await?
        .ok_or_else(|| AppError::NotFound("vendor not found".to_owned()))?;

    Ok(Json(vendor.into()))
}

/// Edit the logged-in vendor's profile.
///
/// PATCH /vendor/profile
///
/// # Errors
///
/// Returns 400 if the phone number fails validation.
pub async fn edit_profile(
    State(state): State<AppState>,
    RequireVendor(claims): RequireVendor,
    Json(req): Json<EditVendorProfileRequest>,
) -> Result<Json<VendorSummary>> {
    let phone =
        Phone::parse(&req.phone).map_err(|e| AppError::BadRequest(format!("invalid phone: {e}")))?;

    let vendors = VendorRepository::new(state.pool());

    let vendor = vendors
        .update_profile(
            VendorId::new(claims.sub),
            &VendorProfileUpdate {
                name: req.name,
                address: req.address,
                phone,
                food_types: req.food_types,
            },
        )
        .await?;

    Ok(Json(vendor.into()))
}

/// Toggle the vendor's service availability.
///
/// PATCH /vendor/service
///
/// No body: each call flips the flag and returns the updated profile.
pub async fn toggle_service(
    State(state): State<AppState>,
    RequireVendor(claims): RequireVendor,
) -> Result<Json<VendorSummary>> {
    let vendors = VendorRepository::new(state.pool());
    let id = VendorId::new(claims.sub);

    let vendor = vendors
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("vendor not found".to_owned()))?;

    let vendor = vendors
        .set_service_available(id, !vendor.service_available)
        .await?;

    Ok(Json(vendor.into()))
}

/// Add a menu item.
///
/// POST /vendor/foods
pub async fn add_food(
    State(state): State<AppState>,
    RequireVendor(claims): RequireVendor,
    Json(req): Json<AddFoodRequest>,
) -> Result<impl IntoResponse> {
    if req.ready_time <= 0 {
        return Err(AppError::BadRequest(
            "ready_time must be positive".to_owned(),
        ));
    }

    let foods = FoodRepository::new(state.pool());

    let food = foods
        .create(&NewFood {
            vendor_id: VendorId::new(claims.sub),
            name: req.name,
            description: req.description,
            category: req.category,
            food_type: req.food_type,
            ready_time: req.ready_time,
            price: req.price,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(FoodSummary::from(food))))
}

/// List the vendor's menu, newest first.
///
/// GET /vendor/foods
pub async fn list_foods(
    State(state): State<AppState>,
    RequireVendor(claims): RequireVendor,
) -> Result<Json<Vec<FoodSummary>>> {
    let foods = FoodRepository::new(state.pool());

    let list = foods.list_by_vendor(VendorId::new(claims.sub)).await?;

    Ok(Json(list.into_iter().map(FoodSummary::from).collect()))
}
