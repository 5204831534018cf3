use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BatchCommit, EmployeeStore, StoreError};
use crate::employee::{Employee, NewEmployee};
use crate::types::DbId;

#[derive(Default)]
struct Tables {
    next_id: DbId,
    by_id: BTreeMap<DbId, Employee>,
    code_to_id: HashMap<String, DbId>,
}

impl Tables {
    fn insert(&mut self, input: &NewEmployee) -> Employee {
        self.next_id += 1;
        let now = chrono::Utc::now();
        let employee = Employee {
            id: self.next_id,
            employee_code: input.employee_code.clone(),
            name: input.name.clone(),
            position: input.position.clone(),
            department: input.department.clone(),
            salary: input.salary,
            created_at: now,
            updated_at: now,
        };
        self.code_to_id
            .insert(employee.employee_code.clone(), employee.id);
        self.by_id.insert(employee.id, employee.clone());
        employee
    }
}

/// Process-local [`EmployeeStore`] backed by two maps under one lock.
///
/// Writes hold the lock for their whole duration, so `create_batch` is
/// atomic with respect to every other operation on the same instance.
/// Contents are lost when the instance is dropped.
#[derive(Default)]
pub struct InMemoryEmployeeStore {
    tables: RwLock<Tables>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn create(&self, input: &NewEmployee) -> Result<Employee, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.code_to_id.contains_key(&input.employee_code) {
            return Err(StoreError::DuplicateCode(input.employee_code.clone()));
        }
        Ok(tables.insert(input))
    }

    async fn get(&self, id: DbId) -> Result<Employee, StoreError> {
        self.tables
            .read()
            .await
            .by_id
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.tables.read().await.by_id.values().cloned().collect())
    }

    async fn update(&self, id: DbId, input: &NewEmployee) -> Result<Employee, StoreError> {
        let mut tables = self.tables.write().await;
        let old_code = match tables.by_id.get(&id) {
            Some(existing) => existing.employee_code.clone(),
            None => return Err(StoreError::NotFound(id)),
        };

        if old_code != input.employee_code {
            if tables.code_to_id.contains_key(&input.employee_code) {
                return Err(StoreError::DuplicateCode(input.employee_code.clone()));
            }
            tables.code_to_id.remove(&old_code);
            tables.code_to_id.insert(input.employee_code.clone(), id);
        }

        let employee = tables
            .by_id
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        employee.employee_code = input.employee_code.clone();
        employee.name = input.name.clone();
        employee.position = input.position.clone();
        employee.department = input.department.clone();
        employee.salary = input.salary;
        employee.updated_at = chrono::Utc::now();
        Ok(employee.clone())
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let removed = tables.by_id.remove(&id).ok_or(StoreError::NotFound(id))?;
        tables.code_to_id.remove(&removed.employee_code);
        Ok(())
    }

    async fn create_batch(&self, inputs: &[NewEmployee]) -> Result<BatchCommit, StoreError> {
        let mut tables = self.tables.write().await;

        let mut seen = HashSet::with_capacity(inputs.len());
        for input in inputs {
            let code = input.employee_code.as_str();
            if tables.code_to_id.contains_key(code) || !seen.insert(code) {
                return Ok(BatchCommit::CodeCollision);
            }
        }

        for input in inputs {
            tables.insert(input);
        }
        Ok(BatchCommit::Committed(inputs.len()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
