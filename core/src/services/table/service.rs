//! Table service implementation

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::domain::entities::{NewTable, Table, TablePatch};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::TableRepository;

use super::allocator::{allocate, verify_allocation, QUANTITY_ERROR};

/// Service managing the restaurant's table inventory
pub struct TableService<R: TableRepository> {
    repository: Arc<R>,
}

impl<R: TableRepository> TableService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create `quantity` tables numbered by the allocator
    ///
    /// Reads the existing numbers, allocates, and inserts the whole batch in
    /// one repository call. There is no lock around the read and the write:
    /// a concurrent create that picked the same numbers makes this batch fail
    /// as a unit on the store's unique number constraint.
    ///
    /// # Returns
    /// The created tables, ascending by number
    pub async fn create_tables(&self, quantity: u32) -> DomainResult<Vec<Table>> {
        if quantity == 0 {
            return Err(DomainError::validation(QUANTITY_ERROR));
        }

        let existing = self.repository.table_numbers().await?;
        let numbers = allocate(&existing, quantity).ok_or_else(|| {
            error!(quantity, "Table numbers exhausted");
            DomainError::internal("No table numbers left to allocate")
        })?;

        if !verify_allocation(&existing, quantity, &numbers) {
            error!(quantity, "Table number allocation produced an invalid plan");
            return Err(DomainError::internal("Table number allocation failed"));
        }

        debug!(?numbers, "Allocated table numbers");

        let now = Utc::now();
        let new_tables: Vec<Table> = numbers
            .into_iter()
            .map(|number| NewTable::new(number, now).into_table())
            .collect();

        let mut created = self.repository.insert_many(new_tables).await?;
        created.sort_by_key(|t| t.table_number);

        info!(count = created.len(), "Created tables");
        Ok(created)
    }

    /// All tables ascending by number; an empty inventory is `NotFound`
    pub async fn list_tables(&self) -> DomainResult<Vec<Table>> {
        let tables = self.repository.find_all().await?;
        if tables.is_empty() {
            return Err(DomainError::not_found("No tables found"));
        }
        Ok(tables)
    }

    /// Apply the non-empty fields of `patch` to a table
    pub async fn update_table(&self, id: Uuid, patch: TablePatch) -> DomainResult<Table> {
        let mut table = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Table not found"))?;

        patch.apply(&mut table);
        let updated = self.repository.update(table).await?;

        info!(table_id = %id, table_number = updated.table_number, "Updated table");
        Ok(updated)
    }

    /// Delete a table; other tables keep their numbers
    pub async fn delete_table(&self, id: Uuid) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found("Table not found"));
        }

        info!(table_id = %id, "Deleted table");
        Ok(())
    }
}
