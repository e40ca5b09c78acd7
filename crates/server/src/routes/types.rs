//! Response DTOs shared across route groups.
//!
//! Domain models are projected into these before serialization so secret
//! fields (password hashes, OTP state) can never leak into a body.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use hotplate_core::{CustomerId, Email, FoodId, OrderId, OrderStatus, Phone, Price, VendorId};

use crate::models::{Customer, Food, Order, Vendor};

/// Body returned by signup, login, and OTP verification.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Whether the account has passed OTP verification.
    pub verified: bool,
    /// Account email.
    pub email: Email,
}

/// Generic message body (e.g., "OTP sent").
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Customer profile as returned to the customer.
#[derive(Debug, Serialize)]
pub struct CustomerProfile {
    pub id: CustomerId,
    pub email: Email,
    pub phone: Phone,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub verified: bool,
}

impl From<Customer> for CustomerProfile {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            email: customer.email,
            phone: customer.phone,
            first_name: customer.first_name,
            last_name: customer.last_name,
            address: customer.address,
            verified: customer.verified,
        }
    }
}

/// Vendor record as returned by the admin, vendor, and shopping surfaces.
#[derive(Debug, Serialize)]
pub struct VendorSummary {
    pub id: VendorId,
    pub name: String,
    pub owner_name: String,
    pub email: Email,
    pub phone: Phone,
    pub address: String,
    pub pincode: String,
    pub food_types: Vec<String>,
    pub service_available: bool,
    pub rating: Decimal,
}

impl From<Vendor> for VendorSummary {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id,
            name: vendor.name,
            owner_name: vendor.owner_name,
            email: vendor.email,
            phone: vendor.phone,
            address: vendor.address,
            pincode: vendor.pincode,
            food_types: vendor.food_types,
            service_available: vendor.service_available,
            rating: vendor.rating,
        }
    }
}

/// Menu item as returned by the vendor and shopping surfaces.
#[derive(Debug, Serialize)]
pub struct FoodSummary {
    pub id: FoodId,
    pub vendor_id: VendorId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub food_type: String,
    pub ready_time: i32,
    pub price: Price,
}

impl From<Food> for FoodSummary {
    fn from(food: Food) -> Self {
        Self {
            id: food.id,
            vendor_id: food.vendor_id,
            name: food.name,
            description: food.description,
            category: food.category,
            food_type: food.food_type,
            ready_time: food.ready_time,
            price: food.price,
        }
    }
}

/// One priced line of an order response.
#[derive(Debug, Serialize)]
pub struct OrderLineSummary {
    pub food_id: FoodId,
    pub unit: u32,
    pub price: Price,
    pub line_total: Price,
}

/// A placed order as returned to the customer.
#[derive(Debug, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub total: Price,
    pub status: OrderStatus,
    pub items: Vec<OrderLineSummary>,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderSummary {
    fn from(order: Order) -> Self {
        let items = order
            .items
            .iter()
            .map(|item| OrderLineSummary {
                food_id: item.food_id,
                unit: item.unit,
                price: item.price,
                line_total: item.line_total(),
            })
            .collect();

        Self {
            id: order.id,
            total: order.total,
            status: order.status,
            items,
            created_at: order.created_at,
        }
    }
}
