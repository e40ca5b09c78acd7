//! Vendor account management commands.
//!
//! # Usage
//!
//! ```bash
//! hp-cli vendor create -e tacos@example.com -n "Taco Cart" --owner "Dana" \
//!     --phone "+1 555 867 5309" --password "secret-sauce" \
//!     --address "1 Plaza" --pincode 94103 --food-type mexican
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string

use secrecy::SecretString;
use thiserror::Error;

use hotplate_core::{Email, Phone};
use hotplate_server::db::vendors::NewVendor;
use hotplate_server::db::{self, RepositoryError, VendorRepository};
use hotplate_server::services::auth::hash_password;

/// Errors that can occur during vendor operations.
#[derive(Debug, Error)]
pub enum VendorError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] hotplate_core::EmailError),

    /// Invalid phone number.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(#[from] hotplate_core::PhoneError),

    /// Vendor already exists.
    #[error("Vendor already exists with email: {0}")]
    VendorExists(String),

    /// Password hashing failure.
    #[error("Failed to hash password")]
    PasswordHash,

    /// Repository error.
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

/// Arguments for creating a vendor.
#[derive(Debug)]
pub struct CreateVendorArgs {
    pub email: String,
    pub name: String,
    pub owner: String,
    pub phone: String,
    pub password: String,
    pub address: String,
    pub pincode: String,
    pub food_types: Vec<String>,
}

/// Create a new vendor account.
///
/// # Returns
///
/// The ID of the created vendor.
///
/// # Errors
///
/// Returns `VendorError` if validation fails, the email is taken, or the
/// database is unreachable.
pub async fn create(args: CreateVendorArgs) -> Result<i32, VendorError> {
    dotenvy::dotenv().ok();

    let email = Email::parse(&args.email)?;
    let phone = Phone::parse(&args.phone)?;

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| VendorError::MissingEnvVar("DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Creating vendor: {} ({})", args.name, email);

    let password_hash = hash_password(&args.password).map_err(|_| VendorError::PasswordHash)?;

    let vendors = VendorRepository::new(&pool);
    let vendor = vendors
        .create(&NewVendor {
            name: args.name,
            owner_name: args.owner,
            email,
            phone,
            password_hash,
            address: args.address,
            pincode: args.pincode,
            food_types: args.food_types,
        })
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => VendorError::VendorExists(args.email.clone()),
            other => VendorError::Repository(other),
        })?;

    tracing::info!(
        "Vendor created successfully! ID: {}, Email: {}",
        vendor.id,
        vendor.email
    );
    tracing::info!("The vendor starts unavailable; toggle service via PATCH /vendor/service.");

    Ok(vendor.id.as_i32())
}
