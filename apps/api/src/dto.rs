mod common;
mod employees;

pub use common::{HealthResponse, StoreHealth};
pub use employees::{EmployeeRequest, EmployeeResponse};
