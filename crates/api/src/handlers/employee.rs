//! Handlers for single-record employee CRUD.
//!
//! Payloads are trimmed and validated before reaching the store; code
//! uniqueness is left to the store itself.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hrm_core::employee::{validate_new_employee, Employee, NewEmployee};
use hrm_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Employee>>>> {
    let employees = state.employees.list().await?;
    Ok(Json(DataResponse { data: employees }))
}

/// GET /api/v1/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Employee>>> {
    let employee = state.employees.get(id).await?;
    Ok(Json(DataResponse { data: employee }))
}

/// POST /api/v1/employees
///
/// Returns 409 when the employee code is already taken.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewEmployee>,
) -> AppResult<(StatusCode, Json<DataResponse<Employee>>)> {
    let input = validate_new_employee(input)?;
    let employee = state.employees.create(&input).await?;

    tracing::info!(
        employee_id = employee.id,
        employee_code = %employee.employee_code,
        "Employee created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: employee })))
}

/// PUT /api/v1/employees/{id}
///
/// Full replace. The record may keep its own code; taking another
/// employee's code returns 409.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<NewEmployee>,
) -> AppResult<Json<DataResponse<Employee>>> {
    let input = validate_new_employee(input)?;
    let employee = state.employees.update(id, &input).await?;

    tracing::info!(employee_id = id, "Employee updated");

    Ok(Json(DataResponse { data: employee }))
}

/// DELETE /api/v1/employees/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.employees.delete(id).await?;

    tracing::info!(employee_id = id, "Employee deleted");

    Ok(StatusCode::NO_CONTENT)
}
