//! Integer binary operations and the function-pointer type they share.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::dispatcher::dispatch;
use crate::error::SelectError;

/// A function from `(i32, i32)` to `i32`.
pub type BinaryOp = fn(i32, i32) -> i32;

/// `a + b`, wrapping on overflow.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// `a - b`, wrapping on overflow.
pub fn sub(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Closed set of selectable operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Sub,
}

impl Operation {
    /// Every operation, in listing order.
    pub const ALL: [Operation; 2] = [Operation::Add, Operation::Sub];

    /// Resolve the variant to the function it stands for.
    pub fn as_fn(self) -> BinaryOp {
        match self {
            Self::Add => add,
            Self::Sub => sub,
        }
    }

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
        }
    }

    /// Dispatch `(a, b)` through this operation's function pointer.
    pub fn apply(self, a: i32, b: i32) -> i32 {
        dispatch(self.as_fn(), a, b)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "addition" | "plus" | "+" => Ok(Self::Add),
            "sub" | "subtract" | "subtraction" | "minus" | "-" => Ok(Self::Sub),
            _ => Err(SelectError::UnknownOperation(s.to_string())),
        }
    }
}
