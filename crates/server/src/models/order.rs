//! Order domain types.

use chrono::{DateTime, Utc};

use hotplate_core::{CustomerId, FoodId, OrderId, OrderStatus, Price};

/// A placed order.
///
/// The total is computed server-side from the priced lines at placement
/// time; later menu price changes do not affect existing orders.
#[derive(Debug, Clone)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Customer who placed the order.
    pub customer_id: CustomerId,
    /// Sum of line totals at placement time.
    pub total: Price,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Priced lines.
    pub items: Vec<OrderItem>,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
}

/// One priced line of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderItem {
    /// The ordered food.
    pub food_id: FoodId,
    /// Unit count (always positive; zero-unit lines are dropped before
    /// placement).
    pub unit: u32,
    /// Unit price captured at placement time.
    pub price: Price,
}

impl OrderItem {
    /// The line total (`price * unit`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.line_total(self.unit)
    }
}
