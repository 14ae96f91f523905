//! Field validators shared by the entity mutators.
//!
//! Every validated mutator calls one of these before touching state, so a failed
//! call never leaves a partial change behind.

use crate::error::{DomainError, DomainResult};

/// Reject empty or whitespace-only text.
pub fn non_blank(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Reject negative, NaN and infinite amounts.
pub fn non_negative(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::validation(format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(DomainError::validation(format!("{field} cannot be negative")));
    }
    Ok(())
}

/// Reject zero, negative, NaN and infinite amounts.
pub fn positive(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::validation(format!("{field} must be a finite number")));
    }
    if value <= 0.0 {
        return Err(DomainError::validation(format!(
            "{field} must be greater than zero"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_rejects_whitespace() {
        assert!(non_blank("name", "  \t").is_err());
        assert!(non_blank("name", "Urea").is_ok());
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert!(non_negative("quantity", 0.0).is_ok());
        assert!(non_negative("quantity", -0.5).is_err());
        assert!(non_negative("quantity", f64::NAN).is_err());
        assert!(non_negative("quantity", f64::INFINITY).is_err());
    }

    #[test]
    fn positive_rejects_zero() {
        match positive("amount", 0.0).unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("greater than zero")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert!(positive("amount", 0.25).is_ok());
    }
}
