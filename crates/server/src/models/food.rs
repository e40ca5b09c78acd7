//! Food (menu item) domain type.

use chrono::{DateTime, Utc};

use hotplate_core::{FoodId, Price, VendorId};

/// A menu item offered by a vendor.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Food {
    /// Unique food ID.
    pub id: FoodId,
    /// Vendor offering this item.
    pub vendor_id: VendorId,
    /// Item name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Menu category (e.g., "starter", "dessert").
    pub category: String,
    /// Dietary class (e.g., "veg", "non-veg").
    pub food_type: String,
    /// Preparation time in minutes; the 30-minute shopping filter uses this.
    pub ready_time: i32,
    /// Unit price.
    pub price: Price,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}
