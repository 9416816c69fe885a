//! Guard helpers for invariant checks.
//!
//! Each guard returns `Ok(())` when the value satisfies the rule and the given
//! error otherwise, so call sites read as a flat sequence of `?` checks.

use crate::error::{DomainError, DomainResult};

/// Require `min <= value <= max` (inclusive on both ends).
pub fn ensure_within<T: PartialOrd>(value: &T, min: &T, max: &T, msg: &str) -> DomainResult<()> {
    if value < min || value > max {
        return Err(DomainError::out_of_range(msg));
    }
    Ok(())
}

/// Require `value >= 0`. Zero passes.
pub fn ensure_non_negative(value: i64, msg: &str) -> DomainResult<()> {
    if value < 0 {
        return Err(DomainError::out_of_range(msg));
    }
    Ok(())
}

/// Require at least one non-whitespace character.
pub fn ensure_not_blank(value: &str, msg: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_value(msg));
    }
    Ok(())
}
