//! Admin route handlers.
//!
//! Vendor onboarding and inspection. This surface carries no
//! authentication of its own and is expected to be deployed
//! network-isolated (private interface or VPN), mirroring how the ops
//! tooling reaches it.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use hotplate_core::VendorId;

use crate::db::VendorRepository;
use crate::error::{AppError, Result};
use crate::routes::types::VendorSummary;
use crate::services::AuthService;
use crate::services::auth::CreateVendor;
use crate::state::AppState;

/// New vendor request body.
#[derive(Debug, Deserialize)]
pub struct CreateVendorRequest {
    pub name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub address: String,
    pub pincode: String,
    #[serde(default)]
    pub food_types: Vec<String>,
}

/// Create a vendor.
///
/// POST /admin/vendors
///
/// # Errors
///
/// Returns 409 if the email is already registered, 400 on validation
/// failure.
pub async fn create_vendor(
    State(state): State<AppState>,
    Json(req): Json<CreateVendorRequest>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.pool(), state.jwt(), state.config().otp_ttl_minutes);

    let vendor = auth
        .create_vendor(CreateVendor {
            name: req.name,
            owner_name: req.owner_name,
            email: req.email,
            phone: req.phone,
            password: req.password,
            address: req.address,
            pincode: req.pincode,
            food_types: req.food_types,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(VendorSummary::from(vendor))))
}

/// List all vendors, newest first.
///
/// GET /admin/vendors
pub async fn list_vendors(State(state): State<AppState>) -> Result<Json<Vec<VendorSummary>>> {
    let vendors = VendorRepository::new(state.pool());

    let list = vendors.list().await?;

    Ok(Json(list.into_iter().map(VendorSummary::from).collect()))
}

/// Fetch one vendor.
///
/// GET /admin/vendors/{id}
///
/// # Errors
///
/// Returns 404 if the vendor does not exist.
pub async fn get_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<i32>,
) -> Result<Json<VendorSummary>> {
    let vendors = VendorRepository::new(state.pool());

    let vendor = vendors
        .get_by_id(VendorId::new(vendor_id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("vendor {vendor_id} not found")))?;

    Ok(Json(vendor.into()))
}
