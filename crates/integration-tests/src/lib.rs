//! Integration tests for Hotplate.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p hp-cli -- migrate
//! cargo run -p hp-cli -- seed
//!
//! # Start the server
//! cargo run -p hotplate-server
//!
//! # Run integration tests
//! cargo test -p hotplate-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `customer_auth` - Signup, login, and OTP verification flows
//! - `vendor_admin` - Vendor onboarding and vendor surface
//! - `shopping` - Public browsing endpoints

/// Base URL for the server API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("HOTPLATE_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// A unique email for test isolation; each run registers fresh accounts.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@hotplate.test", uuid::Uuid::new_v4().simple())
}
