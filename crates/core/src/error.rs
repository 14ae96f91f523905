//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, key conflicts). Storage concerns belong to `agrostock-infra`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A value failed validation (negative number, blank required string, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An insert used a key that is already present.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// An operation targeted a key that does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A stock withdrawal exceeded the quantity on hand.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: f64, available: f64 },

    /// The entity is still referenced and cannot be removed.
    #[error("still in use: {0}")]
    InUse(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::DuplicateKey(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn insufficient_stock(requested: f64, available: f64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn in_use(msg: impl Into<String>) -> Self {
        Self::InUse(msg.into())
    }
}
