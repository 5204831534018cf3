//! Request handlers.
//!
//! Handlers delegate to the [`EmployeeStore`](hrm_core::store::EmployeeStore)
//! held in [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod employee;
pub mod importer;
