//! Vendor repository for database operations.

use sqlx::PgPool;

use hotplate_core::{Email, Phone, VendorId};

use super::RepositoryError;
use crate::models::Vendor;

const VENDOR_COLUMNS: &str = "id, name, owner_name, email, phone, password_hash, address, \
     pincode, food_types, service_available, rating, created_at, updated_at";

/// Fields for creating a vendor (admin surface).
#[derive(Debug)]
pub struct NewVendor {
    pub name: String,
    pub owner_name: String,
    pub email: Email,
    pub phone: Phone,
    pub password_hash: String,
    pub address: String,
    pub pincode: String,
    pub food_types: Vec<String>,
}

/// Profile fields a vendor may edit.
#[derive(Debug)]
pub struct VendorProfileUpdate {
    pub name: String,
    pub address: String,
    pub phone: Phone,
    pub food_types: Vec<String>,
}

/// Repository for vendor database operations.
pub struct VendorRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> VendorRepository<'a> {
    /// Create a new vendor repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new vendor.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, vendor: &NewVendor) -> Result<Vendor, RepositoryError> {
        let sql = format!(
            "INSERT INTO vendor (name, owner_name, email, phone, password_hash, address, \
             pincode, food_types)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {VENDOR_COLUMNS}"
        );
        sqlx::query_as::<_, Vendor>(&sql)
            .bind(&vendor.name)
            .bind(&vendor.owner_name)
            .bind(&vendor.email)
            .bind(&vendor.phone)
            .bind(&vendor.password_hash)
            .bind(&vendor.address)
            .bind(&vendor.pincode)
            .bind(&vendor.food_types)
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    return RepositoryError::Conflict("email already exists".to_owned());
                }
                RepositoryError::Database(e)
            })
    }

    /// List all vendors, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Vendor>, RepositoryError> {
        let sql = format!("SELECT {VENDOR_COLUMNS} FROM vendor ORDER BY created_at DESC");
        Ok(sqlx::query_as::<_, Vendor>(&sql)
            .fetch_all(self.pool)
            .await?)
    }

    /// Get a vendor by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: VendorId) -> Result<Option<Vendor>, RepositoryError> {
        let sql = format!("SELECT {VENDOR_COLUMNS} FROM vendor WHERE id = $1");
        Ok(sqlx::query_as::<_, Vendor>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?)
    }

    /// Get a vendor by login email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<Vendor>, RepositoryError> {
        let sql = format!("SELECT {VENDOR_COLUMNS} FROM vendor WHERE email = $1");
        Ok(sqlx::query_as::<_, Vendor>(&sql)
            .bind(email)
            .fetch_optional(self.pool)
            .await?)
    }

    /// Update a vendor's profile fields and return the updated record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the vendor doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_profile(
        &self,
        id: VendorId,
        update: &VendorProfileUpdate,
    ) -> Result<Vendor, RepositoryError> {
        let sql = format!(
            "UPDATE vendor
             SET name = $1, address = $2, phone = $3, food_types = $4, updated_at = now()
             WHERE id = $5
             RETURNING {VENDOR_COLUMNS}"
        );
        sqlx::query_as::<_, Vendor>(&sql)
            .bind(&update.name)
            .bind(&update.address)
            .bind(&update.phone)
            .bind(&update.food_types)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    /// Set the service-availability flag and return the updated record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the vendor doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_service_available(
        &self,
        id: VendorId,
        available: bool,
    ) -> Result<Vendor, RepositoryError> {
        let sql = format!(
            "UPDATE vendor
             SET service_available = $1, updated_at = now()
             WHERE id = $2
             RETURNING {VENDOR_COLUMNS}"
        );
        sqlx::query_as::<_, Vendor>(&sql)
            .bind(available)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    /// Vendors in a pincode currently taking orders, best-rated first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn available_by_pincode(
        &self,
        pincode: &str,
    ) -> Result<Vec<Vendor>, RepositoryError> {
        let sql = format!(
            "SELECT {VENDOR_COLUMNS} FROM vendor
             WHERE pincode = $1 AND service_available = TRUE
             ORDER BY rating DESC, id ASC"
        );
        Ok(sqlx::query_as::<_, Vendor>(&sql)
            .bind(pincode)
            .fetch_all(self.pool)
            .await?)
    }

    /// The highest-rated available vendors in a pincode.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn top_rated(
        &self,
        pincode: &str,
        limit: i64,
    ) -> Result<Vec<Vendor>, RepositoryError> {
        let sql = format!(
            "SELECT {VENDOR_COLUMNS} FROM vendor
             WHERE pincode = $1 AND service_available = TRUE
             ORDER BY rating DESC, id ASC
             LIMIT $2"
        );
        Ok(sqlx::query_as::<_, Vendor>(&sql)
            .bind(pincode)
            .bind(limit)
            .fetch_all(self.pool)
            .await?)
    }
}
