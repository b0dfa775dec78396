use roster_application::EmployeeService;
use sqlx::PgPool;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: EmployeeService,
    pub postgres_pool: Option<PgPool>,
}
