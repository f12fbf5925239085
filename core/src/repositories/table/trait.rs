//! Table repository trait defining the interface for table persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Table;
use crate::errors::DomainError;

/// Repository trait for restaurant table persistence
///
/// Implementations must keep `table_number` unique across stored tables and
/// must insert a batch atomically: either every table of the batch is stored
/// or none is.
#[async_trait]
pub trait TableRepository: Send + Sync {
    /// All tables, ascending by table number
    async fn find_all(&self) -> Result<Vec<Table>, DomainError>;

    /// Numbers of every stored table, in no particular order
    async fn table_numbers(&self) -> Result<Vec<u32>, DomainError>;

    /// Find a table by its identifier
    ///
    /// # Returns
    /// * `Ok(Some(Table))` - Table found
    /// * `Ok(None)` - No table with the given id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Table>, DomainError>;

    /// Insert a batch of new tables as one unit
    async fn insert_many(&self, tables: Vec<Table>) -> Result<Vec<Table>, DomainError>;

    /// Persist the mutable fields of an existing table
    async fn update(&self, table: Table) -> Result<Table, DomainError>;

    /// Delete a table
    ///
    /// # Returns
    /// * `Ok(true)` - Table was deleted
    /// * `Ok(false)` - Table not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
