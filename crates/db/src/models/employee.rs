//! Employee row model.

use hrm_core::employee::Employee;
use hrm_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An employee row from the `employees` table.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub id: DbId,
    pub employee_code: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            employee_code: row.employee_code,
            name: row.name,
            position: row.position,
            department: row.department,
            salary: row.salary,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
