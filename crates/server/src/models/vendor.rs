//! Vendor domain type.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use hotplate_core::{Email, Phone, VendorId};

/// A restaurant on the platform.
///
/// Vendors are created by the admin surface (password set there), log in
/// with email/password, and control their own availability and menu.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Vendor {
    /// Unique vendor ID.
    pub id: VendorId,
    /// Restaurant display name.
    pub name: String,
    /// Name of the owning operator.
    pub owner_name: String,
    /// Login email (unique).
    pub email: Email,
    /// Contact phone number.
    pub phone: Phone,
    /// Password hash in PHC string format (salt embedded).
    pub password_hash: String,
    /// Street address.
    pub address: String,
    /// Delivery area postal code; shopping queries filter on this.
    pub pincode: String,
    /// Cuisine tags (e.g., "vegan", "grill").
    pub food_types: Vec<String>,
    /// Whether the vendor is currently taking orders.
    pub service_available: bool,
    /// Aggregate customer rating.
    pub rating: Decimal,
    /// When the vendor was created.
    pub created_at: DateTime<Utc>,
    /// When the vendor was last updated.
    pub updated_at: DateTime<Utc>,
}
