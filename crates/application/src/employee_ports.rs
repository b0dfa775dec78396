use async_trait::async_trait;
use roster_core::AppResult;
use roster_domain::{Employee, EmployeeId, NewEmployee};

/// Unvalidated employee fields as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeInput {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email, unique across employees.
    pub email: String,
}

/// Repository port for employee persistence.
///
/// Each call is atomic on its own; no transaction spans multiple calls.
/// Implementations must reject an insert or update that would give two
/// records the same email with [`roster_core::AppError::Conflict`].
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Finds an employee by identifier.
    async fn find_by_id(&self, id: EmployeeId) -> AppResult<Option<Employee>>;

    /// Finds an employee by exact email match.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>>;

    /// Inserts a new employee and returns it with its assigned identifier.
    async fn insert(&self, employee: NewEmployee) -> AppResult<Employee>;

    /// Overwrites the mutable fields of an existing employee.
    ///
    /// Returns `None` when no record carries the employee's identifier.
    async fn update(&self, employee: Employee) -> AppResult<Option<Employee>>;

    /// Deletes an employee. Returns whether a record was removed.
    async fn delete(&self, id: EmployeeId) -> AppResult<bool>;

    /// Lists every employee in ascending identifier order.
    async fn list(&self) -> AppResult<Vec<Employee>>;
}
