use roster_application::EmployeeInput;
use roster_domain::Employee;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for employee create and update.
///
/// Missing fields deserialize as empty strings so they fail domain
/// validation with a 400 instead of a body rejection. Any `id` in the body
/// is ignored.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct EmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// API representation of an employee.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EmployeeResponse {
    #[ts(type = "number")]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<EmployeeRequest> for EmployeeInput {
    fn from(value: EmployeeRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
        }
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id().as_i64(),
            first_name: employee.first_name().as_str().to_owned(),
            last_name: employee.last_name().as_str().to_owned(),
            email: employee.email().as_str().to_owned(),
        }
    }
}
