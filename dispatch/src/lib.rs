//! Function-pointer indirection over integer operations.
//!
//! The crate keeps the same split throughout:
//!
//! - **[`core`]**: Pure, deterministic logic (operations, dispatch, predicate
//!   filtering). No I/O, no logging, fully testable in isolation.
//! - **[`demo`]**: The reference program and condition listing, streamed to
//!   any writer for the CLI.
//!
//! ```
//! use opdispatch::core::dispatcher::dispatch;
//! use opdispatch::core::operation::{Operation, add};
//!
//! assert_eq!(dispatch(add, 1, 2), 3);
//! assert_eq!(Operation::Sub.apply(1, 2), -1);
//! ```

pub mod core;
pub mod demo;
pub mod error;
pub mod exit_codes;
pub mod logging;
#[cfg(test)]
mod test_support;
