//! Roster validation.
//!
//! Checks a roster before it drives a planning grid. Detects:
//! - Duplicate names (rows are matched by name, case-insensitively, when
//!   saved plannings are loaded)
//! - Blank names
//! - Missing or malformed e-mail addresses (the planning is mailed to them)
//! - Employees without a contract (no paid-leave credit, no deviation check)
//!
//! Every issue is collected; validation never stops at the first one.

use std::collections::HashSet;

use crate::models::Employee;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Roster index of the offending employee.
    pub index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two employees share a name (ignoring case and surrounding spaces).
    DuplicateName,
    /// Name is empty after trimming.
    EmptyName,
    /// No e-mail address.
    MissingEmail,
    /// E-mail address without a single `@` between non-empty parts.
    InvalidEmail,
    /// No contract assigned.
    MissingContract,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }
}

/// Validates a roster.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(employees: &[Employee]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, employee) in employees.iter().enumerate() {
        let name = employee.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                index,
                format!("Employee at row {index} has no name"),
            ));
        } else if !seen.insert(name.to_lowercase()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                index,
                format!("Duplicate employee name: {name}"),
            ));
        }

        let email = employee.email.trim();
        if email.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingEmail,
                index,
                format!("Employee '{name}' has no e-mail address"),
            ));
        } else if !is_plausible_email(email) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidEmail,
                index,
                format!("Employee '{name}' has an invalid e-mail address: {email}"),
            ));
        }

        if employee.contract.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingContract,
                index,
                format!("Employee '{name}' has no contract"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
