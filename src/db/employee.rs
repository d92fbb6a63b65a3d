use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::StorageError;
use crate::models::employee::{EmployeeRecord, NewEmployeeRecord};

/// Storage gateway for employee rows.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Persist a new row; the store assigns the id.
    async fn save(&self, record: NewEmployeeRecord) -> Result<EmployeeRecord, StorageError>;

    /// Every persisted row, in insertion order.
    async fn find_all(&self) -> Result<Vec<EmployeeRecord>, StorageError>;
}

pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn save(&self, record: NewEmployeeRecord) -> Result<EmployeeRecord, StorageError> {
        let saved = sqlx::query_as::<_, EmployeeRecord>(
            r#"
            INSERT INTO tb_employee (name, age, cpf, celullar, office, sector, wage)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, age, cpf, celullar, office, sector, wage
            "#,
        )
        .bind(record.name)
        .bind(record.age)
        .bind(record.cpf)
        .bind(record.celullar)
        .bind(record.office)
        .bind(record.sector)
        .bind(record.wage)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<EmployeeRecord>, StorageError> {
        let records = sqlx::query_as::<_, EmployeeRecord>(
            "SELECT id, name, age, cpf, celullar, office, sector, wage FROM tb_employee ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
