//! Sample data for local development.

use hrm_core::employee::NewEmployee;
use hrm_core::store::{EmployeeStore, StoreError};

/// The two employees the service ships with for demos.
pub fn sample_employees() -> Vec<NewEmployee> {
    vec![
        NewEmployee {
            name: "王小明".to_string(),
            employee_code: "E001".to_string(),
            position: "軟體工程師".to_string(),
            department: "研發部".to_string(),
            salary: 80_000,
        },
        NewEmployee {
            name: "林美玲".to_string(),
            employee_code: "E002".to_string(),
            position: "人力資源經理".to_string(),
            department: "人資部".to_string(),
            salary: 95_000,
        },
    ]
}

/// Insert the sample employees when the store is empty.
///
/// Returns the number of records created.
pub async fn seed_sample_employees(store: &dyn EmployeeStore) -> Result<usize, StoreError> {
    if !store.list().await?.is_empty() {
        tracing::info!("Store already has employees, skipping sample data");
        return Ok(0);
    }

    let mut created = 0;
    for employee in sample_employees() {
        match store.create(&employee).await {
            Ok(_) => created += 1,
            // Another instance seeded concurrently.
            Err(StoreError::DuplicateCode(_)) => {}
            Err(e) => return Err(e),
        }
    }

    tracing::info!(created, "Seeded sample employees");
    Ok(created)
}
