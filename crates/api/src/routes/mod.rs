pub mod employee;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /employees                                       list, create
/// /employees/import                                bulk CSV import (multipart)
/// /employees/{id}                                  get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/employees", employee::router())
}
