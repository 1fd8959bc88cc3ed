//! Field rules shared by every aggregate that validates free-text input.
//!
//! Each rule takes the field name used in the message and returns the first
//! violation as a [`DomainError::ValidationError`]. Lengths are counted in
//! characters, not bytes.

use super::errors::DomainError;
use validator::ValidateLength;

pub fn not_null(value: Option<&str>, field: &str) -> Result<(), DomainError> {
    match value {
        Some(_) => Ok(()),
        None => Err(DomainError::ValidationError(format!(
            "{field} should not be null"
        ))),
    }
}

pub fn not_null_or_empty(value: Option<&str>, field: &str) -> Result<(), DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(DomainError::ValidationError(format!(
            "{field} should not be null or empty"
        ))),
    }
}

pub fn min_length(value: &str, min: u64, field: &str) -> Result<(), DomainError> {
    if value.validate_length(Some(min), None, None) {
        Ok(())
    } else {
        Err(DomainError::ValidationError(format!(
            "{field} should be at least {min} characters long"
        )))
    }
}

pub fn max_length(value: &str, max: u64, field: &str) -> Result<(), DomainError> {
    if value.validate_length(None, Some(max), None) {
        Ok(())
    } else {
        Err(DomainError::ValidationError(format!(
            "{field} should be less or equal {max} characters long"
        )))
    }
}
