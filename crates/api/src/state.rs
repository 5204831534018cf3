use std::sync::Arc;

use hrm_core::store::EmployeeStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The employee record store (PostgreSQL or in-memory).
    pub employees: Arc<dyn EmployeeStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
