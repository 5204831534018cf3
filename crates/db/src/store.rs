//! PostgreSQL implementation of [`EmployeeStore`].

use async_trait::async_trait;
use hrm_core::employee::{Employee, NewEmployee};
use hrm_core::store::{BatchCommit, EmployeeStore, StoreError};
use hrm_core::types::DbId;

use crate::repositories::EmployeeRepo;
use crate::{health_check, DbPool};

/// Name of the unique constraint guarding `employees.employee_code`.
pub const EMPLOYEE_CODE_CONSTRAINT: &str = "uq_employees_employee_code";

/// PostgreSQL unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// [`EmployeeStore`] over the `employees` table.
#[derive(Clone)]
pub struct PgEmployeeStore {
    pool: DbPool,
}

impl PgEmployeeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Whether `err` is a violation of the employee-code unique constraint.
pub fn is_code_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(EMPLOYEE_CODE_CONSTRAINT)
        }
        _ => false,
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "Database error");
    StoreError::Backend(err.to_string())
}

fn classify_write(err: sqlx::Error, input: &NewEmployee) -> StoreError {
    if is_code_violation(&err) {
        StoreError::DuplicateCode(input.employee_code.clone())
    } else {
        backend(err)
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn create(&self, input: &NewEmployee) -> Result<Employee, StoreError> {
        EmployeeRepo::create(&self.pool, input)
            .await
            .map(Employee::from)
            .map_err(|e| classify_write(e, input))
    }

    async fn get(&self, id: DbId) -> Result<Employee, StoreError> {
        EmployeeRepo::find_by_id(&self.pool, id)
            .await
            .map_err(backend)?
            .map(Employee::from)
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let rows = EmployeeRepo::list(&self.pool).await.map_err(backend)?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn update(&self, id: DbId, input: &NewEmployee) -> Result<Employee, StoreError> {
        EmployeeRepo::update(&self.pool, id, input)
            .await
            .map_err(|e| classify_write(e, input))?
            .map(Employee::from)
            .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        if EmployeeRepo::delete(&self.pool, id).await.map_err(backend)? {
            Ok(())
        } else {
            Err(StoreError::NotFound(id))
        }
    }

    async fn create_batch(&self, inputs: &[NewEmployee]) -> Result<BatchCommit, StoreError> {
        if inputs.is_empty() {
            return Ok(BatchCommit::Committed(0));
        }
        match EmployeeRepo::create_batch(&self.pool, inputs).await {
            Ok(rows) => Ok(BatchCommit::Committed(rows.len())),
            Err(err) if is_code_violation(&err) => Ok(BatchCommit::CodeCollision),
            Err(err) => Err(backend(err)),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        health_check(&self.pool).await.map_err(backend)
    }
}
