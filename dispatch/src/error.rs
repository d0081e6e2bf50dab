//! Errors raised when an operation or condition is selected by name at runtime.

use thiserror::Error;

/// Runtime selection failed because the name is outside the closed variant set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("unknown operation `{0}` (expected one of: add, sub)")]
    UnknownOperation(String),

    #[error("unknown condition `{0}` (expected one of: even, odd, gt50, prime)")]
    UnknownCondition(String),
}
