//! Food (menu item) repository for database operations.

use sqlx::PgPool;

use hotplate_core::{FoodId, Price, VendorId};

use super::RepositoryError;
use crate::models::Food;

const FOOD_COLUMNS: &str = "id, vendor_id, name, description, category, food_type, \
     ready_time, price, created_at, updated_at";

/// Fields for creating a menu item.
#[derive(Debug)]
pub struct NewFood {
    pub vendor_id: VendorId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub food_type: String,
    pub ready_time: i32,
    pub price: Price,
}

/// Repository for food database operations.
pub struct FoodRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FoodRepository<'a> {
    /// Create a new food repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a menu item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, food: &NewFood) -> Result<Food, RepositoryError> {
        let sql = format!(
            "INSERT INTO food (vendor_id, name, description, category, food_type, \
             ready_time, price)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {FOOD_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Food>(&sql)
            .bind(food.vendor_id)
            .bind(&food.name)
            .bind(&food.description)
            .bind(&food.category)
            .bind(&food.food_type)
            .bind(food.ready_time)
            .bind(food.price)
            .fetch_one(self.pool)
            .await?)
    }

    /// All menu items for one vendor, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_vendor(&self, vendor_id: VendorId) -> Result<Vec<Food>, RepositoryError> {
        let sql = format!(
            "SELECT {FOOD_COLUMNS} FROM food WHERE vendor_id = $1 ORDER BY created_at DESC"
        );
        Ok(sqlx::query_as::<_, Food>(&sql)
            .bind(vendor_id)
            .fetch_all(self.pool)
            .await?)
    }

    /// Menu items for a set of vendors (shopping availability listing).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_vendors(
        &self,
        vendor_ids: &[VendorId],
    ) -> Result<Vec<Food>, RepositoryError> {
        let ids: Vec<i32> = vendor_ids.iter().map(|id| id.as_i32()).collect();
        let sql = format!(
            "SELECT {FOOD_COLUMNS} FROM food WHERE vendor_id = ANY($1) ORDER BY vendor_id, id"
        );
        Ok(sqlx::query_as::<_, Food>(&sql)
            .bind(&ids)
            .fetch_all(self.pool)
            .await?)
    }

    /// Look up a batch of foods by ID (order pricing).
    ///
    /// Unknown IDs are simply absent from the result; the caller decides
    /// whether that is an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_many(&self, food_ids: &[FoodId]) -> Result<Vec<Food>, RepositoryError> {
        let ids: Vec<i32> = food_ids.iter().map(|id| id.as_i32()).collect();
        let sql = format!("SELECT {FOOD_COLUMNS} FROM food WHERE id = ANY($1)");
        Ok(sqlx::query_as::<_, Food>(&sql)
            .bind(&ids)
            .fetch_all(self.pool)
            .await?)
    }

    /// Foods from available vendors in a pincode ready within `minutes`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn ready_within(
        &self,
        pincode: &str,
        minutes: i32,
    ) -> Result<Vec<Food>, RepositoryError> {
        let sql = "SELECT f.id, f.vendor_id, f.name, f.description, f.category, f.food_type, \
             f.ready_time, f.price, f.created_at, f.updated_at
             FROM food f
             JOIN vendor v ON v.id = f.vendor_id
             WHERE v.pincode = $1 AND v.service_available = TRUE AND f.ready_time <= $2
             ORDER BY f.ready_time ASC, f.id ASC";
        Ok(sqlx::query_as::<_, Food>(sql)
            .bind(pincode)
            .bind(minutes)
            .fetch_all(self.pool)
            .await?)
    }

    /// Case-insensitive name/description search over available vendors in a
    /// pincode.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn search(&self, pincode: &str, query: &str) -> Result<Vec<Food>, RepositoryError> {
        let pattern = format!("%{}%", query.replace('%', "\\%").replace('_', "\\_"));
        let sql = "SELECT f.id, f.vendor_id, f.name, f.description, f.category, f.food_type, \
             f.ready_time, f.price, f.created_at, f.updated_at
             FROM food f
             JOIN vendor v ON v.id = f.vendor_id
             WHERE v.pincode = $1 AND v.service_available = TRUE
               AND (f.name ILIKE $2 OR f.description ILIKE $2)
             ORDER BY f.id ASC";
        Ok(sqlx::query_as::<_, Food>(sql)
            .bind(pincode)
            .bind(&pattern)
            .fetch_all(self.pool)
            .await?)
    }
}
