//! Route definitions for the employee registry.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{employee, importer};
use crate::state::AppState;

/// Routes mounted at `/employees`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// POST   /import            -> import_employees (multipart, field `file`)
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(employee::list).post(employee::create))
        .route("/import", post(importer::import_employees))
        .route(
            "/{id}",
            get(employee::get_by_id)
                .put(employee::update)
                .delete(employee::delete),
        )
}
