use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use roster_application::EmployeeRepository;
use roster_core::{AppError, AppResult};
use roster_domain::{Employee, EmployeeId, NewEmployee};
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory employee repository implementation.
///
/// All writes run under a single write guard, so the email check and the
/// insert or update it protects happen atomically.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    table: RwLock<EmployeeTable>,
}

#[derive(Debug, Default)]
struct EmployeeTable {
    records: BTreeMap<EmployeeId, Employee>,
    email_index: HashMap<String, EmployeeId>,
    last_id: i64,
}

impl EmployeeTable {
    fn email_holder(&self, email: &str) -> Option<EmployeeId> {
        self.email_index.get(email).copied()
    }
}

impl InMemoryEmployeeRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self.table.read().await.records.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        let table = self.table.read().await;
        Ok(table
            .email_holder(email)
            .and_then(|id| table.records.get(&id))
            .cloned())
    }

    async fn insert(&self, employee: NewEmployee) -> AppResult<Employee> {
        let mut table = self.table.write().await;

        if table.email_holder(employee.email().as_str()).is_some() {
            return Err(AppError::Conflict(
                "an employee with this email already exists".to_owned(),
            ));
        }

        table.last_id += 1;
        let stored = employee.with_id(EmployeeId::new(table.last_id));
        table
            .email_index
            .insert(stored.email().as_str().to_owned(), stored.id());
        table.records.insert(stored.id(), stored.clone());

        debug!(employee_id = %stored.id(), "inserted in-memory employee");
        Ok(stored)
    }

    async fn update(&self, employee: Employee) -> AppResult<Option<Employee>> {
        let mut table = self.table.write().await;

        let Some(previous_email) = table
            .records
            .get(&employee.id())
            .map(|stored| stored.email().as_str().to_owned())
        else {
            return Ok(None);
        };

        if let Some(holder) = table.email_holder(employee.email().as_str())
            && holder != employee.id()
        {
            return Err(AppError::Conflict(
                "an employee with this email already exists".to_owned(),
            ));
        }

        table.email_index.remove(&previous_email);
        table
            .email_index
            .insert(employee.email().as_str().to_owned(), employee.id());
        table.records.insert(employee.id(), employee.clone());

        Ok(Some(employee))
    }

    async fn delete(&self, id: EmployeeId) -> AppResult<bool> {
        let mut table = self.table.write().await;

        let Some(removed) = table.records.remove(&id) else {
            return Ok(false);
        };
        table.email_index.remove(removed.email().as_str());

        Ok(true)
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(self.table.read().await.records.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests;
