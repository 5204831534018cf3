//! The employee record store contract.
//!
//! Every backing store (PostgreSQL in `hrm-db`, the in-process map in
//! [`memory`]) enforces `employee_code` uniqueness itself. Callers never
//! pre-check for an existing code before writing.

mod memory;

pub use memory::InMemoryEmployeeStore;

use async_trait::async_trait;

use crate::employee::{Employee, NewEmployee};
use crate::types::DbId;

/// Failures reported by an [`EmployeeStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Employee with id {0} not found")]
    NotFound(DbId),

    #[error("Employee code '{0}' already exists")]
    DuplicateCode(String),

    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Result of an atomic batch insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchCommit {
    /// Every staged record was written.
    Committed(usize),
    /// At least one code already existed; nothing was written.
    CodeCollision,
}

/// Persistent collection of employees keyed by a store-assigned id.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Insert one employee, assigning its id.
    async fn create(&self, input: &NewEmployee) -> Result<Employee, StoreError>;

    /// Fetch one employee by id.
    async fn get(&self, id: DbId) -> Result<Employee, StoreError>;

    /// All employees ordered by id.
    async fn list(&self) -> Result<Vec<Employee>, StoreError>;

    /// Replace every mutable field of an existing employee.
    async fn update(&self, id: DbId, input: &NewEmployee) -> Result<Employee, StoreError>;

    /// Remove an employee.
    async fn delete(&self, id: DbId) -> Result<(), StoreError>;

    /// Insert all records or none of them.
    ///
    /// A uniqueness violation is reported as [`BatchCommit::CodeCollision`]
    /// rather than an error; it does not name the colliding record.
    async fn create_batch(&self, inputs: &[NewEmployee]) -> Result<BatchCommit, StoreError>;

    /// Cheap liveness probe for health checks.
    async fn ping(&self) -> Result<(), StoreError>;
}
