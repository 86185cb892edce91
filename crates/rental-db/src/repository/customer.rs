//! # Customer Repository
//!
//! Single-row customer CRUD. Each operation is one statement committed on its
//! own; there is no multi-statement transaction surface here.
//!
//! ## Update Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Partial updates (PUT /customers/{id})                                  │
//! │                                                                         │
//! │  1. Fetch current row               ── NotFound if missing              │
//! │  2. Overlay present payload fields  ── absent fields keep old values    │
//! │  3. Write the full row back         ── rows_affected guard              │
//! │                                                                         │
//! │  Read-then-write keeps the SQL static; last write wins, which is       │
//! │  acceptable for back-office customer edits.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use rental_core::{Customer, CustomerUpdate, NewCustomer};

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Lists every customer, ordered by identity.
    pub async fn list_all(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT customer_id, store_id, first_name, last_name, email,
                   address_id, active, create_date, last_update
            FROM customer
            ORDER BY customer_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }

    /// Gets a customer by ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Customer))` - Customer found
    /// * `Ok(None)` - Customer not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT customer_id, store_id, first_name, last_name, email,
                   address_id, active, create_date, last_update
            FROM customer
            WHERE customer_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Inserts a new customer.
    ///
    /// The store generates the identity and timestamps; the returned value
    /// is the complete persisted row.
    ///
    /// ## Errors
    /// * `DbError::ForeignKeyViolation` - store_id or address_id doesn't exist
    pub async fn insert(&self, input: &NewCustomer) -> DbResult<Customer> {
        debug!(
            first_name = %input.first_name,
            last_name = %input.last_name,
            "Inserting customer"
        );

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO customer (
                store_id, first_name, last_name, email,
                address_id, active, create_date, last_update
            ) VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?6)
            "#,
        )
        .bind(input.store_id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(input.address_id)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Customer", id))
    }

    /// Applies a partial update to an existing customer.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - Customer doesn't exist
    pub async fn update(&self, id: i64, patch: &CustomerUpdate) -> DbResult<Customer> {
        debug!(id, "Updating customer");

        let current = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Customer", id))?;

        let first_name = patch.first_name.clone().unwrap_or(current.first_name);
        let last_name = patch.last_name.clone().unwrap_or(current.last_name);
        let email = patch.email.clone().or(current.email);
        let active = patch.active.unwrap_or(current.active);
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE customer SET
                first_name = ?2,
                last_name = ?3,
                email = ?4,
                active = ?5,
                last_update = ?6
            WHERE customer_id = ?1
            "#,
        )
        .bind(id)
        .bind(&first_name)
        .bind(&last_name)
        .bind(&email)
        .bind(active)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Customer", id))
    }

    /// Deletes a customer.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - Customer doesn't exist
    /// * `DbError::ForeignKeyViolation` - Customer still has rentals/payments
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting customer");

        let result = sqlx::query("DELETE FROM customer WHERE customer_id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id));
        }

        Ok(())
    }

    /// Counts customers (for diagnostics and the seed binary).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customer")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    /// Minimal reference rows so customer FKs resolve.
    async fn seed_reference_rows(db: &Database) {
        let now = Utc::now();
        for sql in [
            "INSERT INTO country (country, last_update) VALUES ('Canada', ?1)",
            "INSERT INTO city (city, country_id, last_update) VALUES ('Lethbridge', 1, ?1)",
            "INSERT INTO address (address, city_id, last_update) VALUES ('47 MySakila Drive', 1, ?1)",
            "INSERT INTO store (address_id, last_update) VALUES (1, ?1)",
        ] {
            sqlx::query(sql).bind(now).execute(db.pool()).await.unwrap();
        }
    }

    fn new_customer() -> NewCustomer {
        NewCustomer {
            store_id: 1,
            first_name: "MARY".to_string(),
            last_name: "SMITH".to_string(),
            email: Some("mary.smith@example.org".to_string()),
            address_id: 1,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_round_trip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_reference_rows(&db).await;

        let created = db.customers().insert(&new_customer()).await.unwrap();
        assert!(created.customer_id > 0);
        assert!(created.active);

        let fetched = db.customers().get_by_id(created.customer_id).await.unwrap();
        assert_eq!(fetched.unwrap().first_name, "MARY");
    }

    #[tokio::test]
    async fn test_insert_rejects_unknown_store() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_reference_rows(&db).await;

        let mut input = new_customer();
        input.store_id = 99;
        let err = db.customers().insert(&input).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_partial_update_keeps_absent_fields() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_reference_rows(&db).await;
        let created = db.customers().insert(&new_customer()).await.unwrap();

        let patch = CustomerUpdate {
            last_name: Some("JONES".to_string()),
            ..CustomerUpdate::default()
        };
        let updated = db.customers().update(created.customer_id, &patch).await.unwrap();

        assert_eq!(updated.last_name, "JONES");
        assert_eq!(updated.first_name, "MARY");
        assert_eq!(updated.email.as_deref(), Some("mary.smith@example.org"));
    }

    #[tokio::test]
    async fn test_update_missing_customer_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_reference_rows(&db).await;

        let err = db
            .customers()
            .update(9999, &CustomerUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_reference_rows(&db).await;
        let created = db.customers().insert(&new_customer()).await.unwrap();

        db.customers().delete(created.customer_id).await.unwrap();
        assert!(db
            .customers()
            .get_by_id(created.customer_id)
            .await
            .unwrap()
            .is_none());

        let err = db.customers().delete(created.customer_id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
