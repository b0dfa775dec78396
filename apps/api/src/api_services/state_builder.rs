use std::sync::Arc;

use roster_application::{EmployeeRepository, EmployeeService};
use roster_infrastructure::{InMemoryEmployeeRepository, PostgresEmployeeRepository};
use sqlx::PgPool;

use crate::state::AppState;

/// Wires the employee service to the selected store.
///
/// A pool means PostgreSQL; without one the in-memory store is used.
pub fn build_app_state(pool: Option<PgPool>) -> AppState {
    let employee_repository: Arc<dyn EmployeeRepository> = match pool.clone() {
        Some(pool) => Arc::new(PostgresEmployeeRepository::new(pool)),
        None => Arc::new(InMemoryEmployeeRepository::new()),
    };

    AppState {
        employee_service: EmployeeService::new(employee_repository),
        postgres_pool: pool,
    }
}
