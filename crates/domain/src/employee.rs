//! Employee domain types and validation rules.
//!
//! An employee is identified by a store-assigned [`EmployeeId`] and carries a
//! first name, a last name, and an email address that must be unique across
//! all employees. Uniqueness itself is enforced by the application service
//! and the backing store; this module only guarantees well-formed values.

use std::fmt::{Display, Formatter};

use roster_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of an employee record.
///
/// Identifiers are handed out by the record store on insert and are never
/// reused, even after the record is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for EmployeeId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Non-blank email address.
///
/// The value is kept byte-for-byte as submitted, so two addresses are the
/// same only when they are exactly equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates an email address, rejecting empty or whitespace-only input.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "email address must not be empty".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the stored email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for EmailAddress {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Candidate employee that has not been persisted yet.
///
/// Also used as the full set of mutable fields when replacing an existing
/// record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    first_name: NonEmptyString,
    last_name: NonEmptyString,
    email: EmailAddress,
}

impl NewEmployee {
    /// Validates raw input into a candidate employee.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> AppResult<Self> {
        let first_name = NonEmptyString::new(first_name)
            .map_err(|_| AppError::Validation("first name must not be empty".to_owned()))?;
        let last_name = NonEmptyString::new(last_name)
            .map_err(|_| AppError::Validation("last name must not be empty".to_owned()))?;

        Ok(Self {
            first_name,
            last_name,
            email: EmailAddress::new(email)?,
        })
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &NonEmptyString {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &NonEmptyString {
        &self.last_name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Attaches a store-assigned identifier, producing a persisted employee.
    #[must_use]
    pub fn with_id(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

/// Persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    first_name: NonEmptyString,
    last_name: NonEmptyString,
    email: EmailAddress,
}

impl Employee {
    /// Rebuilds a persisted employee from stored column values.
    pub fn from_parts(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(NewEmployee::new(first_name, last_name, email)?.with_id(id))
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &NonEmptyString {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &NonEmptyString {
        &self.last_name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Replaces every mutable field while keeping the identifier.
    #[must_use]
    pub fn replace_details(self, details: NewEmployee) -> Self {
        details.with_id(self.id)
    }
}
