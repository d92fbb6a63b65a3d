use async_trait::async_trait;
use std::sync::Mutex;

use crate::db::employee::EmployeeStore;
use crate::errors::StorageError;
use crate::models::employee::{EmployeeRecord, NewEmployeeRecord};

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: Vec<EmployeeRecord>,
}

/// Process-local store with the same contract as the Postgres one.
/// Ids start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryEmployeeStore {
    table: Mutex<Table>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn save(&self, record: NewEmployeeRecord) -> Result<EmployeeRecord, StorageError> {
        let mut table = self
            .table
            .lock()
            .map_err(|_| StorageError::Unavailable("employee table lock poisoned".to_string()))?;
        table.last_id += 1;
        let saved = record.with_id(table.last_id);
        table.rows.push(saved.clone());
        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<EmployeeRecord>, StorageError> {
        let table = self
            .table
            .lock()
            .map_err(|_| StorageError::Unavailable("employee table lock poisoned".to_string()))?;
        Ok(table.rows.clone())
    }
}
