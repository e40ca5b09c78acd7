//! Core types for Hotplate.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod otp;
pub mod phone;
pub mod price;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use otp::Otp;
pub use phone::{Phone, PhoneError};
pub use price::Price;
pub use status::*;
