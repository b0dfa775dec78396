//! Application services and ports.

#![forbid(unsafe_code)]

mod employee_ports;
mod employee_service;

pub use employee_ports::{EmployeeInput, EmployeeRepository};
pub use employee_service::EmployeeService;
