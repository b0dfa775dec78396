//! PostgreSQL-backed employee repository.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;

use roster_application::EmployeeRepository;
use roster_core::{AppError, AppResult};
use roster_domain::{Employee, EmployeeId, NewEmployee};

/// PostgreSQL implementation of the employee repository port.
///
/// Email uniqueness is backed by the `employees_email_key` constraint, so a
/// duplicate insert or update is rejected atomically by the database.
#[derive(Clone)]
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = AppError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let id = EmployeeId::new(row.id);
        Employee::from_parts(id, row.first_name, row.last_name, row.email).map_err(|error| {
            AppError::Internal(format!("stored employee '{id}' is invalid: {error}"))
        })
    }
}

mod lookup;
mod write;

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn find_by_id(&self, id: EmployeeId) -> AppResult<Option<Employee>> {
        self.find_by_id_impl(id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        self.find_by_email_impl(email).await
    }

    async fn insert(&self, employee: NewEmployee) -> AppResult<Employee> {
        self.insert_impl(employee).await
    }

    async fn update(&self, employee: Employee) -> AppResult<Option<Employee>> {
        self.update_impl(employee).await
    }

    async fn delete(&self, id: EmployeeId) -> AppResult<bool> {
        self.delete_impl(id).await
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        self.list_impl().await
    }
}

fn internal(error: sqlx::Error, operation: &str) -> AppError {
    warn!(%error, operation, "employee store query failed");
    AppError::Internal(format!("failed to {operation}: {error}"))
}

fn email_conflict_or_internal(error: sqlx::Error, operation: &str) -> AppError {
    if let sqlx::Error::Database(ref database_error) = error
        && database_error.is_unique_violation()
    {
        return AppError::Conflict("an employee with this email already exists".to_owned());
    }

    internal(error, operation)
}
