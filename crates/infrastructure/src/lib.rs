//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_employee_repository;
mod postgres_employee_repository;

pub use in_memory_employee_repository::InMemoryEmployeeRepository;
pub use postgres_employee_repository::PostgresEmployeeRepository;
