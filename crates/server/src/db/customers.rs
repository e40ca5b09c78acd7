//! Customer repository for database operations.
//!
//! Covers the customer account itself plus the customer's cart lines
//! (`cart_item` rows, one per customer/food pair).

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use hotplate_core::{CartLine, CustomerId, Email, FoodId, Otp, Phone};

use super::RepositoryError;
use crate::models::Customer;

/// Database row shape for a customer.
///
/// OTP state is stored as two scalar columns and folded into [`Otp`] when
/// mapping to the domain type.
#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: CustomerId,
    email: Email,
    phone: Phone,
    password_hash: String,
    first_name: String,
    last_name: String,
    address: String,
    verified: bool,
    otp_code: i32,
    otp_expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            phone: row.phone,
            password_hash: row.password_hash,
            first_name: row.first_name,
            last_name: row.last_name,
            address: row.address,
            verified: row.verified,
            otp: Otp::new(row.otp_code, row.otp_expires_at),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const CUSTOMER_COLUMNS: &str = "id, email, phone, password_hash, first_name, last_name, \
     address, verified, otp_code, otp_expires_at, created_at, updated_at";

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new, unverified customer.
    ///
    /// Profile fields start empty; the OTP is the one generated at signup.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        email: &Email,
        phone: &Phone,
        password_hash: &str,
        otp: Otp,
    ) -> Result<Customer, RepositoryError> {
        let sql = format!(
            "INSERT INTO customer (email, phone, password_hash, otp_code, otp_expires_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {CUSTOMER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(email)
            .bind(phone)
            .bind(password_hash)
            .bind(otp.code)
            .bind(otp.expires_at)
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    return RepositoryError::Conflict("email already exists".to_owned());
                }
                RepositoryError::Database(e)
            })?;

        Ok(row.into())
    }

    /// Get a customer by email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<Customer>, RepositoryError> {
        let sql = format!("SELECT {CUSTOMER_COLUMNS} FROM customer WHERE email = $1");
        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(email)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Get a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let sql = format!("SELECT {CUSTOMER_COLUMNS} FROM customer WHERE id = $1");
        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Replace the customer's held OTP (re-request flow).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the customer doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_otp(&self, id: CustomerId, otp: Otp) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE customer
             SET otp_code = $1, otp_expires_at = $2, updated_at = now()
             WHERE id = $3",
        )
        .bind(otp.code)
        .bind(otp.expires_at)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Mark a customer verified and return the updated record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the customer doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn mark_verified(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        let sql = format!(
            "UPDATE customer
             SET verified = TRUE, updated_at = now()
             WHERE id = $1
             RETURNING {CUSTOMER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Update profile fields and return the updated record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the customer doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_profile(
        &self,
        id: CustomerId,
        first_name: &str,
        last_name: &str,
        address: &str,
    ) -> Result<Customer, RepositoryError> {
        let sql = format!(
            "UPDATE customer
             SET first_name = $1, last_name = $2, address = $3, updated_at = now()
             WHERE id = $4
             RETURNING {CUSTOMER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(first_name)
            .bind(last_name)
            .bind(address)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Get the customer's cart lines in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored unit count is
    /// not positive.
    pub async fn get_cart(&self, id: CustomerId) -> Result<Vec<CartLine>, RepositoryError> {
        let rows = sqlx::query_as::<_, (FoodId, i32)>(
            "SELECT food_id, unit FROM cart_item WHERE customer_id = $1 ORDER BY id ASC",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|(food_id, unit)| {
                let unit = u32::try_from(unit).map_err(|_| {
                    RepositoryError::DataCorruption(format!(
                        "negative cart unit for food {food_id}"
                    ))
                })?;
                Ok(CartLine::new(food_id, unit))
            })
            .collect()
    }

    /// Replace the customer's cart with the given lines.
    ///
    /// Callers pass the post-merge state, so every line has a positive
    /// unit count.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the transaction fails.
    pub async fn replace_cart(
        &self,
        id: CustomerId,
        lines: &[CartLine],
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM cart_item WHERE customer_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for line in lines {
            sqlx::query("INSERT INTO cart_item (customer_id, food_id, unit) VALUES ($1, $2, $3)")
                .bind(id)
                .bind(line.food_id)
                .bind(i32::try_from(line.unit).unwrap_or(i32::MAX))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Remove every line from the customer's cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn clear_cart(&self, id: CustomerId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_item WHERE customer_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
