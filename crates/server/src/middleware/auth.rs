//! Authentication extractors.
//!
//! Handlers require a principal by taking [`RequireCustomer`] or
//! [`RequireVendor`] as an argument. Both read the `Authorization: Bearer`
//! header, validate the token against the state's signing keys, and check
//! the role claim so a customer token cannot drive the vendor surface (or
//! vice versa).

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::error::AppError;
use crate::services::jwt::{Claims, Role};
use crate::state::AppState;

/// Extractor that requires a customer bearer token.
///
/// # Example
///
/// ```rust,ignore
/// async fn profile(
///     RequireCustomer(claims): RequireCustomer,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", claims.email)
/// }
/// ```
pub struct RequireCustomer(pub Claims);

impl FromRequestParts<AppState> for RequireCustomer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = bearer_claims(parts, state)?;

        if claims.role != Role::Customer {
            return Err(AppError::Unauthorized(
                "customer token required".to_owned(),
            ));
        }

        Ok(Self(claims))
    }
}

/// Extractor that requires a vendor bearer token.
pub struct RequireVendor(pub Claims);

impl FromRequestParts<AppState> for RequireVendor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = bearer_claims(parts, state)?;

        if claims.role != Role::Vendor {
            return Err(AppError::Unauthorized("vendor token required".to_owned()));
        }

        Ok(Self(claims))
    }
}

/// Pull and validate the bearer token from the request headers.
fn bearer_claims(parts: &Parts, state: &AppState) -> Result<Claims, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing authorization header".to_owned()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("malformed authorization header".to_owned()))?;

    state
        .jwt()
        .decode(token)
        .map_err(|_| AppError::Unauthorized("invalid or expired token".to_owned()))
}
