//! Domain models for the server.
//!
//! These are validated domain objects, separate from database row types
//! where the row shape does not match (nested OTP state, order lines).
//! Secret-bearing fields (`password_hash`, OTP state) never appear in
//! response bodies - route handlers project models into DTOs.

pub mod customer;
pub mod food;
pub mod order;
pub mod vendor;

pub use customer::Customer;
pub use food::Food;
pub use order::{Order, OrderItem};
pub use vendor::Vendor;
