//! Shared response envelope types for API handlers.
//!
//! Employee endpoints use a `{ "data": ... }` envelope. The import endpoint
//! returns its report unwrapped.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: employees }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
