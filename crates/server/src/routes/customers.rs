//! Customer route handlers.
//!
//! Signup issues an unverified account plus an OTP; the follow-up verify
//! call flips the account and re-issues the token with `verified: true`.
//! Cart and order endpoints require a customer bearer token.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use hotplate_core::{Cart, CartLine, CustomerId, OrderId, Price};

use crate::db::{CustomerRepository, FoodRepository, OrderRepository};
use crate::error::{AppError, Result};
use crate::middleware::RequireCustomer;
use crate::models::OrderItem;
use crate::routes::types::{AuthResponse, CustomerProfile, MessageResponse, OrderSummary};
use crate::services::AuthService;
use crate::state::AppState;

// =============================================================================
// Request Types
// =============================================================================

/// Signup request body.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// OTP verification request body.
///
/// The passcode arrives as a string (mobile keyboards produce text); it is
/// parsed before comparison and a non-numeric submission simply fails
/// verification.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub otp: String,
}

/// Profile edit request body.
#[derive(Debug, Deserialize)]
pub struct EditProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
}

/// Cart update request body: one line, reducer semantics.
#[derive(Debug, Deserialize)]
pub struct CartUpdateRequest {
    pub food_id: i32,
    pub unit: u32,
}

/// Order placement request body.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<CartUpdateRequest>,
}

/// Cart response body.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
}

// =============================================================================
// Auth Handlers
// =============================================================================

/// Register a new customer account.
///
/// POST /customer/signup
///
/// # Errors
///
/// Returns 409 if the email is already registered, 400 on validation
/// failure.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.pool(), state.jwt(), state.config().otp_ttl_minutes);

    let (customer, token) = auth
        .signup_customer(&req.email, &req.phone, &req.password)
        .await?;

    state.sms().send_otp(&customer.phone, customer.otp);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            verified: customer.verified,
            email: customer.email,
        }),
    ))
}

/// Login with email and password.
///
/// POST /customer/login
///
/// # Errors
///
/// Returns 404 with a generic message for unknown email or wrong password.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.pool(), state.jwt(), state.config().otp_ttl_minutes);

    let (customer, token) = auth.login_customer(&req.email, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            verified: customer.verified,
            email: customer.email,
        }),
    ))
}

/// Verify the account with a delivered OTP.
///
/// PATCH /customer/verify
///
/// # Errors
///
/// Returns 400 if the passcode does not match or has expired.
pub async fn verify(
    State(state): State<AppState>,
    RequireCustomer(claims): RequireCustomer,
    Json(req): Json<VerifyRequest>,
) -> Result<impl IntoResponse> {
    let submitted = req
        .otp
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest("passcode must be numeric".to_owned()))?;

    let auth = AuthService::new(state.pool(), state.jwt(), state.config().otp_ttl_minutes);

    let (customer, token) = auth
        .verify_customer_otp(CustomerId::new(claims.sub), submitted)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            verified: customer.verified,
            email: customer.email,
        }),
    ))
}

/// Re-request an OTP for the logged-in account.
///
/// GET /customer/otp
///
/// # Errors
///
/// Returns 400 if the profile cannot be loaded.
pub async fn request_otp(
    State(state): State<AppState>,
    RequireCustomer(claims): RequireCustomer,
) -> Result<Json<MessageResponse>> {
    let auth = AuthService::new(state.pool(), state.jwt(), state.config().otp_ttl_minutes);

    let customer = auth.renew_customer_otp(CustomerId::new(claims.sub)).await?;

    state.sms().send_otp(&customer.phone, customer.otp);

    Ok(Json(MessageResponse::new(
        "OTP sent to your registered phone number",
    )))
}

// =============================================================================
// Profile Handlers
// =============================================================================

/// Fetch the logged-in customer's profile.
///
/// GET /customer/profile
///
/// # Errors
///
/// Returns 400 if the profile cannot be loaded.
pub async fn get_profile(
    State(state): State<AppState>,
    RequireCustomer(claims): RequireCustomer,
) -> Result<Json<CustomerProfile>> {
    let auth = AuthService::new(state.pool(), state.jwt(), state.config().otp_ttl_minutes);

    let customer = auth.customer_profile(CustomerId::new(claims.sub)).await?;

    Ok(Json(customer.into()))
}

/// Edit the logged-in customer's profile.
///
/// PATCH /customer/profile
///
/// # Errors
///
/// Returns 400 if the profile cannot be loaded.
pub async fn edit_profile(
    State(state): State<AppState>,
    RequireCustomer(claims): RequireCustomer,
    Json(req): Json<EditProfileRequest>,
) -> Result<Json<CustomerProfile>> {
    let auth = AuthService::new(state.pool(), state.jwt(), state.config().otp_ttl_minutes);

    let customer = auth
        .update_customer_profile(
            CustomerId::new(claims.sub),
            &req.first_name,
            &req.last_name,
            &req.address,
        )
        .await?;

    Ok(Json(customer.into()))
}

// =============================================================================
// Cart Handlers
// =============================================================================

/// Merge one line into the cart.
///
/// POST /customer/cart
///
/// An update for a food already in the cart replaces its unit count; a
/// zero-unit update removes the line.
pub async fn update_cart(
    State(state): State<AppState>,
    RequireCustomer(claims): RequireCustomer,
    Json(req): Json<CartUpdateRequest>,
) -> Result<Json<CartResponse>> {
    let customer_id = CustomerId::new(claims.sub);
    let customers = CustomerRepository::new(state.pool());

    let mut cart: Cart = customers.get_cart(customer_id).await?.into_iter().collect();
    cart.apply(CartLine::new(req.food_id.into(), req.unit));

    customers.replace_cart(customer_id, cart.lines()).await?;

    Ok(Json(CartResponse {
        lines: cart.into_iter().collect(),
    }))
}

/// Fetch the cart.
///
/// GET /customer/cart
pub async fn get_cart(
    State(state): State<AppState>,
    RequireCustomer(claims): RequireCustomer,
) -> Result<Json<CartResponse>> {
    let customers = CustomerRepository::new(state.pool());

    let lines = customers.get_cart(CustomerId::new(claims.sub)).await?;

    Ok(Json(CartResponse { lines }))
}

/// Empty the cart.
///
/// DELETE /customer/cart
pub async fn clear_cart(
    State(state): State<AppState>,
    RequireCustomer(claims): RequireCustomer,
) -> Result<Json<CartResponse>> {
    let customers = CustomerRepository::new(state.pool());

    customers.clear_cart(CustomerId::new(claims.sub)).await?;

    Ok(Json(CartResponse { lines: Vec::new() }))
}

// =============================================================================
// Order Handlers
// =============================================================================

/// Place an order.
///
/// POST /customer/orders
///
/// Submitted lines are folded through the cart merge first, so duplicate
/// food ids collapse to the latest unit count and zero-unit lines drop
/// out. Prices and the total are taken from the menu, never the request.
///
/// # Errors
///
/// Returns 400 if no orderable lines remain after the merge or if any food
/// id is unknown.
pub async fn create_order(
    State(state): State<AppState>,
    RequireCustomer(claims): RequireCustomer,
    Json(req): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse> {
    let cart = Cart::merged(
        req.items
            .iter()
            .map(|item| CartLine::new(item.food_id.into(), item.unit)),
    );

    if cart.is_empty() {
        return Err(AppError::BadRequest("order has no items".to_owned()));
    }

    let foods = FoodRepository::new(state.pool());
    let food_ids: Vec<_> = cart.lines().iter().map(|line| line.food_id).collect();
    let priced = foods.get_many(&food_ids).await?;

    let items: Vec<OrderItem> = cart
        .lines()
        .iter()
        .map(|line| {
            priced
                .iter()
                .find(|food| food.id == line.food_id)
                .map(|food| OrderItem {
                    food_id: line.food_id,
                    unit: line.unit,
                    price: food.price,
                })
                .ok_or_else(|| {
                    AppError::BadRequest(format!("unknown food id {}", line.food_id))
                })
        })
        .collect::<Result<_>>()?;

    let total: Price = items.iter().map(OrderItem::line_total).sum();

    let orders = OrderRepository::new(state.pool());
    let order = orders
        .create(CustomerId::new(claims.sub), &items, total)
        .await?;

    Ok((StatusCode::CREATED, Json(OrderSummary::from(order))))
}

/// List the customer's orders, newest first.
///
/// GET /customer/orders
pub async fn list_orders(
    State(state): State<AppState>,
    RequireCustomer(claims): RequireCustomer,
) -> Result<Json<Vec<OrderSummary>>> {
    let orders = OrderRepository::new(state.pool());

    let list = orders
        .list_for_customer(CustomerId::new(claims.sub))
        .await?;

    Ok(Json(list.into_iter().map(OrderSummary::from).collect()))
}

/// Fetch one of the customer's orders.
///
/// GET /customer/orders/{id}
///
/// # Errors
///
/// Returns 404 if the order does not exist or belongs to someone else.
pub async fn get_order(
    State(state): State<AppState>,
    RequireCustomer(claims): RequireCustomer,
    Path(order_id): Path<i32>,
) -> Result<Json<OrderSummary>> {
    let orders = OrderRepository::new(state.pool());

    let order = orders
        .get_for_customer(CustomerId::new(claims.sub), OrderId::new(order_id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {order_id} not found")))?;

    Ok(Json(order.into()))
}
