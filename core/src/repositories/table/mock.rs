//! Mock implementation of TableRepository for testing

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Table;
use crate::errors::DomainError;

use super::trait_::TableRepository;

/// In-memory table repository enforcing unique table numbers
pub struct MockTableRepository {
    tables: Arc<RwLock<HashMap<Uuid, Table>>>,
    fail_writes: AtomicBool,
    calls: AtomicUsize,
}

impl MockTableRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(HashMap::new())),
            fail_writes: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a repository already holding `tables`
    pub fn with_tables(tables: Vec<Table>) -> Self {
        let stored = tables.into_iter().map(|t| (t.id, t)).collect();
        Self {
            tables: Arc::new(RwLock::new(stored)),
            ..Self::new()
        }
    }

    /// Make every subsequent write fail with a persistence error
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of repository calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of stored tables
    pub async fn len(&self) -> usize {
        self.tables.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tables.read().await.is_empty()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::persistence("simulated write failure"));
        }
        Ok(())
    }
}

impl Default for MockTableRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TableRepository for MockTableRepository {
    async fn find_all(&self) -> Result<Vec<Table>, DomainError> {
        self.record_call();
        let tables = self.tables.read().await;
        let mut all: Vec<Table> = tables.values().cloned().collect();
        all.sort_by_key(|t| t.table_number);
        Ok(all)
    }

    async fn table_numbers(&self) -> Result<Vec<u32>, DomainError> {
        self.record_call();
        let tables = self.tables.read().await;
        Ok(tables.values().map(|t| t.table_number).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Table>, DomainError> {
        self.record_call();
        let tables = self.tables.read().await;
        Ok(tables.get(&id).cloned())
    }

    async fn insert_many(&self, new_tables: Vec<Table>) -> Result<Vec<Table>, DomainError> {
        self.record_call();
        self.check_writable()?;
        let mut tables = self.tables.write().await;

        // Validate the whole batch before touching the map
        let mut taken: HashSet<u32> = tables.values().map(|t| t.table_number).collect();
        for table in &new_tables {
            if !taken.insert(table.table_number) {
                return Err(DomainError::persistence(format!(
                    "Duplicate table number {}",
                    table.table_number
                )));
            }
        }

        for table in &new_tables {
            tables.insert(table.id, table.clone());
        }
        Ok(new_tables)
    }

    async fn update(&self, table: Table) -> Result<Table, DomainError> {
        self.record_call();
        self.check_writable()?;
        let mut tables = self.tables.write().await;

        if !tables.contains_key(&table.id) {
            return Err(DomainError::not_found("Table not found"));
        }

        tables.insert(table.id, table.clone());
        Ok(table)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.record_call();
        self.check_writable()?;
        let mut tables = self.tables.write().await;
        Ok(tables.remove(&id).is_some())
    }
}
