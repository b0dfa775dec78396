//! Employee application service.
//!
//! Owns the invariants the record store cannot express alone: an email
//! belongs to at most one employee, and updates only apply to employees that
//! exist. The service is stateless and re-reads the store on every call.

use std::sync::Arc;

use roster_core::{AppError, AppResult};
use roster_domain::{Employee, EmployeeId, NewEmployee};

use crate::employee_ports::{EmployeeInput, EmployeeRepository};

const EMAIL_TAKEN_MESSAGE: &str = "an employee with this email already exists";

/// Application service for employee lifecycle operations.
#[derive(Clone)]
pub struct EmployeeService {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Creates a new employee service.
    #[must_use]
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            employee_repository,
        }
    }

    /// Creates an employee after checking that its email is not in use.
    ///
    /// The repository enforces the same rule atomically, so a concurrent
    /// create that slips past the lookup still fails with a conflict.
    pub async fn create_employee(&self, input: EmployeeInput) -> AppResult<Employee> {
        let candidate = NewEmployee::new(input.first_name, input.last_name, input.email)?;

        if self
            .employee_repository
            .find_by_email(candidate.email().as_str())
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(EMAIL_TAKEN_MESSAGE.to_owned()));
        }

        self.employee_repository.insert(candidate).await
    }

    /// Lists all employees.
    pub async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.employee_repository.list().await
    }

    /// Returns an employee by identifier, if it exists.
    pub async fn find_employee(&self, id: EmployeeId) -> AppResult<Option<Employee>> {
        self.employee_repository.find_by_id(id).await
    }

    /// Returns an employee by identifier or a not-found error.
    pub async fn get_employee(&self, id: EmployeeId) -> AppResult<Employee> {
        self.find_employee(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replaces the mutable fields of an existing employee.
    ///
    /// Fails with not-found before validating or writing when the employee is
    /// missing, and with a conflict when another employee already holds the
    /// new email.
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        input: EmployeeInput,
    ) -> AppResult<Employee> {
        let existing = self.get_employee(id).await?;
        let details = NewEmployee::new(input.first_name, input.last_name, input.email)?;

        if let Some(holder) = self
            .employee_repository
            .find_by_email(details.email().as_str())
            .await?
            && holder.id() != id
        {
            return Err(AppError::Conflict(EMAIL_TAKEN_MESSAGE.to_owned()));
        }

        self.employee_repository
            .update(existing.replace_details(details))
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes an employee.
    ///
    /// Deleting an identifier that does not exist succeeds without effect.
    /// Returns whether a record was actually removed.
    pub async fn delete_employee(&self, id: EmployeeId) -> AppResult<bool> {
        self.employee_repository.delete(id).await
    }
}

fn not_found(id: EmployeeId) -> AppError {
    AppError::NotFound(format!("employee '{id}' does not exist"))
}
