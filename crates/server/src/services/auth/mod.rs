//! Authentication service.
//!
//! Owns the account flows for both surfaces: customer signup/login/OTP
//! verification and vendor login (vendors are created by the admin
//! surface). Handlers stay thin; everything that touches password hashes,
//! passcodes, or token issuance goes through here.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use rand::Rng;
use sqlx::PgPool;

use hotplate_core::{CustomerId, Email, Otp, Phone};

use crate::db::vendors::NewVendor;
use crate::db::{CustomerRepository, RepositoryError, VendorRepository};
use crate::models::{Customer, Vendor};
use crate::services::jwt::{JwtKeys, Role};

/// Minimum password length (matches the signup form contract).
const MIN_PASSWORD_LENGTH: usize = 6;

/// Fields for creating a vendor through the admin surface.
#[derive(Debug)]
pub struct CreateVendor {
    pub name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub address: String,
    pub pincode: String,
    pub food_types: Vec<String>,
}

/// Authentication service.
pub struct AuthService<'a> {
    customers: CustomerRepository<'a>,
    vendors: VendorRepository<'a>,
    jwt: &'a JwtKeys,
    otp_ttl: Duration,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(pool: &'a PgPool, jwt: &'a JwtKeys, otp_ttl_minutes: i64) -> Self {
        Self {
            customers: CustomerRepository::new(pool),
            vendors: VendorRepository::new(pool),
            jwt,
            otp_ttl: Duration::minutes(otp_ttl_minutes),
        }
    }

    // =========================================================================
    // Customer flows
    // =========================================================================

    /// Register a new customer.
    ///
    /// The account starts unverified, holding a fresh OTP for the caller to
    /// deliver. The returned token already authenticates the account (it is
    /// needed to call the verify endpoint) but carries `verified: false`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail`/`InvalidPhone`/`WeakPassword` on
    /// validation failure and `AuthError::EmailTaken` if the email is
    /// already registered.
    pub async fn signup_customer(
        &self,
        email: &str,
        phone: &str,
        password: &str,
    ) -> Result<(Customer, String), AuthError> {
        let email = Email::parse(email)?;
        let phone = Phone::parse(phone)?;
        validate_password(password)?;

        let password_hash = hash_password(password)?;
        let otp = self.generate_otp();

        let customer = self
            .customers
            .create(&email, &phone, &password_hash, otp)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Repository(other),
            })?;

        let token = self.issue_customer_token(&customer)?;

        Ok((customer, token))
    }

    /// Login with customer email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::LoginFailed` for unknown email or wrong password;
    /// the two cases are indistinguishable to the caller.
    pub async fn login_customer(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(Customer, String), AuthError> {
        let email = Email::parse(email)?;

        let customer = self
            .customers
            .get_by_email(&email)
            .await?
            .ok_or(AuthError::LoginFailed)?;

        verify_password(password, &customer.password_hash).map_err(|_| AuthError::LoginFailed)?;

        let token = self.issue_customer_token(&customer)?;

        Ok((customer, token))
    }

    /// Verify a customer account with a submitted OTP.
    ///
    /// On success the account is marked verified and a fresh token carrying
    /// `verified: true` is issued.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::OtpRejected` if the code does not match or has
    /// expired, and `AuthError::ProfileUnavailable` if the account is gone.
    pub async fn verify_customer_otp(
        &self,
        id: CustomerId,
        submitted: i32,
    ) -> Result<(Customer, String), AuthError> {
        let customer = self
            .customers
            .get_by_id(id)
            .await?
            .ok_or(AuthError::ProfileUnavailable)?;

        if !customer.otp.accepts(submitted, Utc::now()) {
            return Err(AuthError::OtpRejected);
        }

        let customer = self.customers.mark_verified(id).await.map_err(|e| match e {
            RepositoryError::NotFound => AuthError::ProfileUnavailable,
            other => AuthError::Repository(other),
        })?;

        let token = self.issue_customer_token(&customer)?;

        Ok((customer, token))
    }

    /// Issue a fresh OTP for an existing customer (re-request flow).
    ///
    /// Returns the updated customer; the caller delivers the new passcode.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::ProfileUnavailable` if the account is gone.
    pub async fn renew_customer_otp(&self, id: CustomerId) -> Result<Customer, AuthError> {
        let mut customer = self
            .customers
            .get_by_id(id)
            .await?
            .ok_or(AuthError::ProfileUnavailable)?;

        let otp = self.generate_otp();
        self.customers.set_otp(id, otp).await.map_err(|e| match e {
            RepositoryError::NotFound => AuthError::ProfileUnavailable,
            other => AuthError::Repository(other),
        })?;

        customer.otp = otp;
        Ok(customer)
    }

    /// Load a customer profile.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::ProfileUnavailable` if the account is gone.
    pub async fn customer_profile(&self, id: CustomerId) -> Result<Customer, AuthError> {
        self.customers
            .get_by_id(id)
            .await?
            .ok_or(AuthError::ProfileUnavailable)
    }

    /// Update a customer's profile fields.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::ProfileUnavailable` if the account is gone.
    pub async fn update_customer_profile(
        &self,
        id: CustomerId,
        first_name: &str,
        last_name: &str,
        address: &str,
    ) -> Result<Customer, AuthError> {
        self.customers
            .update_profile(id, first_name, last_name, address)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => AuthError::ProfileUnavailable,
                other => AuthError::Repository(other),
            })
    }

    // =========================================================================
    // Vendor flows
    // =========================================================================

    /// Create a vendor account (admin surface).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail`/`InvalidPhone`/`WeakPassword` on
    /// validation failure and `AuthError::EmailTaken` if the email is
    /// already registered.
    pub async fn create_vendor(&self, input: CreateVendor) -> Result<Vendor, AuthError> {
        let email = Email::parse(&input.email)?;
        let phone = Phone::parse(&input.phone)?;
        validate_password(&input.password)?;

        let password_hash = hash_password(&input.password)?;

        let vendor = self
            .vendors
            .create(&NewVendor {
                name: input.name,
                owner_name: input.owner_name,
                email,
                phone,
                password_hash,
                address: input.address,
                pincode: input.pincode,
                food_types: input.food_types,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Repository(other),
            })?;

        Ok(vendor)
    }

    /// Login with vendor email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::LoginFailed` for unknown email or wrong password.
    pub async fn login_vendor(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(Vendor, String), AuthError> {
        let email = Email::parse(email)?;

        let vendor = self
            .vendors
            .get_by_email(&email)
            .await?
            .ok_or(AuthError::LoginFailed)?;

        verify_password(password, &vendor.password_hash).map_err(|_| AuthError::LoginFailed)?;

        let token = self.jwt.issue(
            vendor.id.as_i32(),
            vendor.email.as_str(),
            true,
            Role::Vendor,
            Utc::now(),
        )?;

        Ok((vendor, token))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn issue_customer_token(&self, customer: &Customer) -> Result<String, AuthError> {
        Ok(self.jwt.issue(
            customer.id.as_i32(),
            customer.email.as_str(),
            customer.verified,
            Role::Customer,
            Utc::now(),
        )?)
    }

    fn generate_otp(&self) -> Otp {
        generate_otp(self.otp_ttl)
    }
}

/// Generate a six-digit OTP expiring `ttl` from now.
#[must_use]
pub fn generate_otp(ttl: Duration) -> Otp {
    let code = rand::rng().random_range(Otp::MIN_CODE..Otp::MAX_CODE);
    Otp::new(code, Utc::now() + ttl)
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
///
/// The salt is generated here and rides inside the PHC string, so there is
/// no separate salt column to keep in sync.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored PHC hash.
pub(crate) fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::LoginFailed)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::LoginFailed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("kitchen-door-42").unwrap();
        assert!(verify_password("kitchen-door-42", &hash).is_ok());
        assert!(verify_password("wrong-password", &hash).is_err());
    }

    #[test]
    fn test_hashes_are_salted() {
        // same password, different salt, different PHC string
        let a = hash_password("kitchen-door-42").unwrap();
        let b = hash_password("kitchen-door-42").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_validate_password_rejects_short() {
        assert!(matches!(
            validate_password("short"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(validate_password("longer-than-six").is_ok());
    }

    #[test]
    fn test_generate_otp_shape() {
        let otp = generate_otp(Duration::minutes(30));
        assert!((Otp::MIN_CODE..Otp::MAX_CODE).contains(&otp.code));
        assert!(!otp.is_expired(Utc::now()));
    }
}
