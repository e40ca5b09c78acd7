//! HTTP middleware stack for the server.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Request ID (add unique ID to each request)
//! 3. CORS (mobile clients call from any origin)
//! 4. Rate limiting (governor; strict on auth endpoints)
//!
//! Authentication itself is not a layer: handlers opt in through the
//! [`auth::RequireCustomer`] / [`auth::RequireVendor`] extractors.

pub mod auth;
pub mod rate_limit;
pub mod request_id;

pub use auth::{RequireCustomer, RequireVendor};
pub use rate_limit::{api_rate_limiter, auth_rate_limiter};
pub use request_id::request_id_middleware;
