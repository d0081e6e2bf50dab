//! The reference program and condition listing, written line by line.

use std::io::Write;
use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::condition::{Condition, elements_where};
use crate::core::dispatcher::DispatchRecord;
use crate::core::operation::Operation;

/// Operands used by both reference dispatches.
pub const REFERENCE_OPERANDS: (i32, i32) = (1, 2);

/// Range filtered by `opdispatch filter` when no bounds are given.
pub const DEFAULT_FILTER_RANGE: RangeInclusive<i32> = 1..=100;

/// Dispatch addition, then subtraction, on [`REFERENCE_OPERANDS`].
pub fn reference_dispatches() -> [DispatchRecord; 2] {
    let (a, b) = REFERENCE_OPERANDS;
    let mut operation = Operation::Add;
    let first = DispatchRecord::evaluate(operation, a, b);
    operation = Operation::Sub;
    let second = DispatchRecord::evaluate(operation, a, b);
    debug!(first = first.result, second = second.result, "reference dispatches");
    [first, second]
}

/// Write the reference program output: one result per dispatch.
pub fn write_reference<W: Write>(out: &mut W) -> Result<()> {
    for record in reference_dispatches() {
        writeln!(out, "{}", record.result).context("write reference result")?;
    }
    Ok(())
}

/// For each condition, write every matching item of `range` followed by a
/// blank line. Items are written as they are produced.
pub fn write_filter<W: Write>(
    out: &mut W,
    conditions: &[Condition],
    range: RangeInclusive<i32>,
) -> Result<()> {
    for condition in conditions {
        let mut matches = 0u64;
        for item in elements_where(range.clone(), condition.as_predicate()) {
            writeln!(out, "{}", item)
                .with_context(|| format!("write `{}` match", condition))?;
            matches += 1;
        }
        writeln!(out).context("write condition separator")?;
        debug!(%condition, matches, "filtered range");
    }
    Ok(())
}
