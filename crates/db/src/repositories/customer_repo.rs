//! Repository for the `customers` table.

use customers_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{ColumnChange, CreateCustomer, Customer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, fname, lname, email, company, message, created_at";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row with its assigned
    /// `id` and `created_at`.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (fname, lname, email, company, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.fname)
            .bind(&input.lname)
            .bind(&input.email)
            .bind(&input.company)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all customers ordered by ascending ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY id");
        sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await
    }

    /// Apply a partial update. Only the columns in `changes` are written.
    ///
    /// Returns `None` if no row with the given `id` exists. An empty change
    /// set issues a plain lookup instead of an UPDATE.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &[ColumnChange<'_>],
    ) -> Result<Option<Customer>, sqlx::Error> {
        if changes.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let query = format!(
            "UPDATE customers SET {} WHERE id = $1 RETURNING {COLUMNS}",
            build_set_clause(changes)
        );

        let mut q = sqlx::query_as::<_, Customer>(&query).bind(id);
        for change in changes {
            q = q.bind(change.value);
        }

        q.fetch_optional(pool).await
    }

    /// Delete a customer by ID, returning the removed row's ID if one existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("DELETE FROM customers WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Build `col = $n, ...` for the given changes. `$1` is reserved for the row ID.
fn build_set_clause(changes: &[ColumnChange<'_>]) -> String {
    changes
        .iter()
        .enumerate()
        .map(|(i, change)| format!("{} = ${}", change.column.as_str(), i + 2))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::customer::CustomerColumn;

    #[test]
    fn set_clause_numbers_placeholders_after_id() {
        let changes = [
            ColumnChange {
                column: CustomerColumn::Fname,
                value: Some("F"),
            },
            ColumnChange {
                column: CustomerColumn::Company,
                value: None,
            },
        ];
        assert_eq!(build_set_clause(&changes), "fname = $2, company = $3");
    }

    #[test]
    fn set_clause_single_column() {
        let changes = [ColumnChange {
            column: CustomerColumn::Message,
            value: Some("hello'; DROP TABLE customers; --"),
        }];
        // Values never reach the statement text.
        assert_eq!(build_set_clause(&changes), "message = $2");
    }
}
