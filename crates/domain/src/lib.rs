//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod employee;

pub use employee::{EmailAddress, Employee, EmployeeId, NewEmployee};
