//! Domain types and logic for the HRM backend.
//!
//! Nothing in this crate talks to a database directly. Persistence goes
//! through the [`store::EmployeeStore`] trait, which `hrm-db` implements for
//! PostgreSQL and [`store::InMemoryEmployeeStore`] implements in-process.

pub mod employee;
pub mod error;
pub mod importer;
pub mod store;
pub mod types;
