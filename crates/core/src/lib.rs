//! Hotplate Core - Shared domain types.
//!
//! This crate provides common types used across all Hotplate components:
//! - `server` - The food-ordering HTTP API (customer, vendor, admin, shopping)
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere, including in clients that need to mirror the server's cart
//! semantics.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, contact details, prices,
//!   one-time passcodes, and statuses
//! - [`cart`] - The cart state container and its line-merge rules

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartLine};
pub use types::*;
