//! Deterministic, pure logic.
//!
//! Core modules must be free of I/O side effects. Every function here returns
//! the same output for the same input and touches no shared state.

pub mod condition;
pub mod dispatcher;
pub mod operation;
