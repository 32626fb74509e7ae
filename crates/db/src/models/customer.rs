//! Customer entity model and DTOs.

use customers_core::error::CoreError;
use customers_core::types::{DbId, Timestamp};
use customers_core::Patch;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new customer. `id` and `created_at` are assigned by storage.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomer {
    pub fname: String,
    pub lname: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    pub message: String,
}

/// DTO for partially updating a customer.
///
/// Omitted keys are left untouched. `company` may be sent as `null` to clear it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCustomer {
    pub fname: Patch<String>,
    pub lname: Patch<String>,
    pub email: Patch<String>,
    pub company: Patch<String>,
    pub message: Patch<String>,
}

/// Columns a partial update is allowed to touch.
///
/// SET clauses are assembled only from [`CustomerColumn::as_str`], never from
/// request keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerColumn {
    Fname,
    Lname,
    Email,
    Company,
    Message,
}

impl CustomerColumn {
    pub fn as_str(self) -> &'static str {
        match self {
            CustomerColumn::Fname => "fname",
            CustomerColumn::Lname => "lname",
            CustomerColumn::Email => "email",
            CustomerColumn::Company => "company",
            CustomerColumn::Message => "message",
        }
    }

    /// Whether the column accepts `NULL`.
    pub fn is_nullable(self) -> bool {
        matches!(self, CustomerColumn::Company)
    }
}

/// One column assignment of a partial update. `value: None` writes `NULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnChange<'a> {
    pub column: CustomerColumn,
    pub value: Option<&'a str>,
}

impl UpdateCustomer {
    /// True when no field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, field)| field.is_absent())
    }

    /// Collect the supplied fields as column assignments, in table column order.
    ///
    /// Fails if a `NOT NULL` column was explicitly sent as `null`.
    pub fn changes(&self) -> Result<Vec<ColumnChange<'_>>, CoreError> {
        let mut changes = Vec::new();
        for (column, field) in self.fields() {
            let Some(value) = field.as_update() else {
                continue;
            };
            if value.is_none() && !column.is_nullable() {
                return Err(CoreError::Validation(format!(
                    "{} may not be null",
                    column.as_str()
                )));
            }
            changes.push(ColumnChange {
                column,
                value: value.map(String::as_str),
            });
        }
        Ok(changes)
    }

    fn fields(&self) -> [(CustomerColumn, &Patch<String>); 5] {
        [
            (CustomerColumn::Fname, &self.fname),
            (CustomerColumn::Lname, &self.lname),
            (CustomerColumn::Email, &self.email),
            (CustomerColumn::Company, &self.company),
            (CustomerColumn::Message, &self.message),
        ]
    }
}
