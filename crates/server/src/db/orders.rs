//! Order repository for database operations.
//!
//! Orders span two tables (`customer_order` and `order_item`); creation is
//! transactional and reads stitch the lines back onto their orders.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use hotplate_core::{CustomerId, FoodId, OrderId, OrderStatus, Price};

use super::RepositoryError;
use crate::models::{Order, OrderItem};

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    customer_id: CustomerId,
    total: Price,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow, Clone, Copy)]
struct ItemRow {
    order_id: OrderId,
    food_id: FoodId,
    unit: i32,
    price: Price,
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> Result<Order, RepositoryError> {
        let status: OrderStatus = self
            .status
            .parse()
            .map_err(RepositoryError::DataCorruption)?;

        Ok(Order {
            id: self.id,
            customer_id: self.customer_id,
            total: self.total,
            status,
            items,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl ItemRow {
    fn into_item(self) -> Result<OrderItem, RepositoryError> {
        let unit = u32::try_from(self.unit).map_err(|_| {
            RepositoryError::DataCorruption(format!(
                "negative unit count on order {}",
                self.order_id
            ))
        })?;

        Ok(OrderItem {
            food_id: self.food_id,
            unit,
            price: self.price,
        })
    }
}

const ORDER_COLUMNS: &str = "id, customer_id, total, status, created_at, updated_at";

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create an order with its priced lines in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the transaction fails.
    pub async fn create(
        &self,
        customer_id: CustomerId,
        items: &[OrderItem],
        total: Price,
    ) -> Result<Order, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            "INSERT INTO customer_order (customer_id, total, status)
             VALUES ($1, $2, $3)
             RETURNING {ORDER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(customer_id)
            .bind(total)
            .bind(OrderStatus::Pending.as_str())
            .fetch_one(&mut *tx)
            .await?;

        for item in items {
            sqlx::query(
                "INSERT INTO order_item (order_id, food_id, unit, price) VALUES ($1, $2, $3, $4)",
            )
            .bind(row.id)
            .bind(item.food_id)
            .bind(i32::try_from(item.unit).unwrap_or(i32::MAX))
            .bind(item.price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        row.into_order(items.to_vec())
    }

    /// All orders for a customer, newest first, lines included.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored status or unit
    /// count is invalid.
    pub async fn list_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Order>, RepositoryError> {
        let sql = format!(
            "SELECT {ORDER_COLUMNS} FROM customer_order
             WHERE customer_id = $1
             ORDER BY created_at DESC"
        );
        let rows = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(customer_id)
            .fetch_all(self.pool)
            .await?;

        let order_ids: Vec<i32> = rows.iter().map(|r| r.id.as_i32()).collect();
        let item_rows = sqlx::query_as::<_, ItemRow>(
            "SELECT order_id, food_id, unit, price FROM order_item
             WHERE order_id = ANY($1)
             ORDER BY id ASC",
        )
        .bind(&order_ids)
        .fetch_all(self.pool)
        .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let items = item_rows
                .iter()
                .filter(|item| item.order_id == row.id)
                .map(|item| item.into_item())
                .collect::<Result<Vec<_>, _>>()?;
            orders.push(row.into_order(items)?);
        }

        Ok(orders)
    }

    /// One order, scoped to its owning customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored status or unit
    /// count is invalid.
    pub async fn get_for_customer(
        &self,
        customer_id: CustomerId,
        order_id: OrderId,
    ) -> Result<Option<Order>, RepositoryError> {
        let sql = format!(
            "SELECT {ORDER_COLUMNS} FROM customer_order WHERE customer_id = $1 AND id = $2"
        );
        let Some(row) = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(customer_id)
            .bind(order_id)
            .fetch_optional(self.pool)
            .await?
        else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, ItemRow>(
            "SELECT order_id, food_id, unit, price FROM order_item
             WHERE order_id = $1
             ORDER BY id ASC",
        )
        .bind(row.id)
        .fetch_all(self.pool)
        .await?
        .into_iter()
        .map(ItemRow::into_item)
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(row.into_order(items)?))
    }
}
