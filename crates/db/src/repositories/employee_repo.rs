//! Repository for the `employees` table.

use hrm_core::employee::NewEmployee;
use hrm_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::EmployeeRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, employee_code, name, position, department, salary, created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewEmployee) -> Result<EmployeeRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (employee_code, name, position, department, salary)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(&input.employee_code)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.department)
            .bind(input.salary)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EmployeeRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all employees ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<EmployeeRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees ORDER BY id");
        sqlx::query_as::<_, EmployeeRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable column of an employee.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewEmployee,
    ) -> Result<Option<EmployeeRow>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                employee_code = $2,
                name = $3,
                position = $4,
                department = $5,
                salary = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id)
            .bind(&input.employee_code)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.department)
            .bind(input.salary)
            .fetch_optional(pool)
            .await
    }

    /// Delete an employee by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert many employees within a single transaction.
    ///
    /// Any failure (including a unique violation on `employee_code`) rolls
    /// back every insert of the batch.
    pub async fn create_batch(
        pool: &PgPool,
        inputs: &[NewEmployee],
    ) -> Result<Vec<EmployeeRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut results = Vec::with_capacity(inputs.len());

        let query = format!(
            "INSERT INTO employees (employee_code, name, position, department, salary)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );

        for input in inputs {
            let row = sqlx::query_as::<_, EmployeeRow>(&query)
                .bind(&input.employee_code)
                .bind(&input.name)
                .bind(&input.position)
                .bind(&input.department)
                .bind(input.salary)
                .fetch_one(&mut *tx)
                .await?;
            results.push(row);
        }

        tx.commit().await?;
        Ok(results)
    }
}
