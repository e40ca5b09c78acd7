//! HTTP route handlers for the server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//! GET  /health/ready                    - Readiness check (database ping)
//!
//! # Customer
//! POST   /customer/signup               - Register (issues OTP + token)
//! POST   /customer/login                - Login
//! PATCH  /customer/verify               - Verify account with OTP
//! GET    /customer/otp                  - Re-request an OTP
//! GET    /customer/profile              - Fetch profile
//! PATCH  /customer/profile              - Edit profile
//! POST   /customer/cart                 - Merge one line into the cart
//! GET    /customer/cart                 - Fetch the cart
//! DELETE /customer/cart                 - Empty the cart
//! POST   /customer/orders               - Place an order
//! GET    /customer/orders               - List own orders
//! GET    /customer/orders/{id}          - Fetch one own order
//!
//! # Vendor
//! POST   /vendor/login                  - Login
//! GET    /vendor/profile                - Fetch profile
//! PATCH  /vendor/profile                - Edit profile
//! PATCH  /vendor/service                - Toggle service availability
//! POST   /vendor/foods                  - Add a menu item
//! GET    /vendor/foods                  - List own menu
//!
//! # Admin (deploy network-isolated)
//! POST   /admin/vendors                 - Create a vendor
//! GET    /admin/vendors                 - List vendors
//! GET    /admin/vendors/{id}            - Fetch one vendor
//!
//! # Shopping (public)
//! GET    /shopping/availability/{pincode}    - Restaurants + foods + categories
//! GET    /shopping/top-restaurants/{pincode} - Best-rated available restaurants
//! GET    /shopping/ready-in-30-min/{pincode} - Quick foods
//! GET    /shopping/search/{pincode}?q=       - Menu text search
//! GET    /shopping/restaurant/{id}           - One restaurant with menu
//! ```

pub mod admin;
pub mod customers;
pub mod shopping;
pub mod types;
pub mod vendors;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::middleware::{api_rate_limiter, auth_rate_limiter};
use crate::state::AppState;

/// Create the full application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/customer", customer_routes())
        .nest("/vendor", vendor_routes())
        .nest("/admin", admin_routes())
        .nest("/shopping", shopping_routes())
}

/// Create the customer routes router.
///
/// Credential-bearing endpoints sit behind the strict auth limiter; the
/// rest share the general API limiter.
pub fn customer_routes() -> Router<AppState> {
    let auth = Router::new()
        .route("/signup", post(customers::signup))
        .route("/login", post(customers::login))
        .route("/verify", patch(customers::verify))
        .route("/otp", get(customers::request_otp))
        .layer(auth_rate_limiter());

    let account = Router::new()
        .route(
            "/profile",
            get(customers::get_profile).patch(customers::edit_profile),
        )
        .route(
            "/cart",
            post(customers::update_cart)
                .get(customers::get_cart)
                .delete(customers::clear_cart),
        )
        .route(
            "/orders",
            post(customers::create_order).get(customers::list_orders),
        )
        .route("/orders/{id}", get(customers::get_order))
        .layer(api_rate_limiter());

    auth.merge(account)
}

/// Create the vendor routes router.
pub fn vendor_routes() -> Router<AppState> {
    let auth = Router::new()
        .route("/login", post(vendors::login))
        .layer(auth_rate_limiter());

    let account = Router::new()
        .route(
            "/profile",
            get(vendors::get_profile).patch(vendors::edit_profile),
        )
        .route("/service", patch(vendors::toggle_service))
        .route("/foods", post(vendors::add_food).get(vendors::list_foods))
        .layer(api_rate_limiter());

    auth.merge(account)
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/vendors",
            post(admin::create_vendor).get(admin::list_vendors),
        )
        .route("/vendors/{id}", get(admin::get_vendor))
}

/// Create the shopping routes router.
pub fn shopping_routes() -> Router<AppState> {
    Router::new()
        .route("/availability/{pincode}", get(shopping::availability))
        .route(
            "/top-restaurants/{pincode}",
            get(shopping::top_restaurants),
        )
        .route(
            "/ready-in-30-min/{pincode}",
            get(shopping::ready_in_30_min),
        )
        .route("/search/{pincode}", get(shopping::search))
        .route("/restaurant/{id}", get(shopping::restaurant))
        .layer(api_rate_limiter())
}
