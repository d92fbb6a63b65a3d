use std::sync::Arc;

use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::{EmployeeDto, NewEmployeeRecord};

/// The create and list-all use cases over a storage gateway.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Stores the employee as given. No field is validated.
    pub async fn create_employee(&self, employee: EmployeeDto) -> Result<(), AppError> {
        let record = NewEmployeeRecord::from(employee);
        let saved = self.store.save(record).await.map_err(|err| {
            log::error!("Failed to save employee: {}", err);
            AppError::from(err)
        })?;
        log::debug!("Created employee {}", saved.id);
        Ok(())
    }

    pub async fn list_employees(&self) -> Result<Vec<EmployeeDto>, AppError> {
        let records = self.store.find_all().await.map_err(|err| {
            log::error!("Failed to list employees: {}", err);
            AppError::from(err)
        })?;
        Ok(records.into_iter().map(EmployeeDto::from).collect())
    }
}
