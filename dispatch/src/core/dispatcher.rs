//! Dispatch of a selected binary operation.

use serde::Serialize;

use crate::core::operation::Operation;

/// Invoke `op` with `(a, b)` and return its result.
///
/// Accepts anything callable with the operation signature: a [`BinaryOp`]
/// pointer, a plain `fn` item, or a closure.
///
/// [`BinaryOp`]: crate::core::operation::BinaryOp
pub fn dispatch<F>(op: F, a: i32, b: i32) -> i32
where
    F: Fn(i32, i32) -> i32,
{
    op(a, b)
}

/// One completed dispatch, kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DispatchRecord {
    pub operation: Operation,
    pub a: i32,
    pub b: i32,
    pub result: i32,
}

impl DispatchRecord {
    /// Dispatch `operation` on `(a, b)` and capture the inputs with the result.
    pub fn evaluate(operation: Operation, a: i32, b: i32) -> Self {
        Self {
            operation,
            a,
            b,
            result: operation.apply(a, b),
        }
    }
}
