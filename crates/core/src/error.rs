//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Coarse classification of a [`DomainError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A numeric value fell outside its permitted interval.
    Range,
    /// A required value was missing or blank.
    Value,
}

/// Domain-level error.
///
/// Both variants carry the exact, caller-facing message. `Display` renders that
/// message unchanged, since callers match on its content.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A numeric value is outside its allowed range (ids, prices, quantities,
    /// negative adjustments).
    #[error("{0}")]
    OutOfRange(String),

    /// A value failed validation (e.g. a blank name).
    #[error("{0}")]
    InvalidValue(String),
}

impl DomainError {
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::OutOfRange(_) => ErrorKind::Range,
            DomainError::InvalidValue(_) => ErrorKind::Value,
        }
    }

    /// The message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            DomainError::OutOfRange(msg) | DomainError::InvalidValue(msg) => msg,
        }
    }
}
