//! Function-pointer dispatch demo.
//!
//! With no arguments, runs the reference program: addition then subtraction
//! of `(1, 2)`, one result per line.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use opdispatch::core::condition::Condition;
use opdispatch::core::dispatcher::DispatchRecord;
use opdispatch::core::operation::Operation;
use opdispatch::demo::{DEFAULT_FILTER_RANGE, write_filter, write_reference};
use opdispatch::{exit_codes, logging};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "opdispatch",
    version,
    about = "Dispatch integer operations through function pointers"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Dispatch one operation selected by name (add, sub).
    Run {
        operation: String,
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
        /// Print the dispatch as a JSON record.
        #[arg(long)]
        json: bool,
    },
    /// Print the elements of a range matching each condition.
    Filter {
        /// Condition to apply (even, odd, gt50, prime). Repeatable; defaults to all.
        #[arg(short, long = "condition", value_name = "NAME")]
        conditions: Vec<String>,
        #[arg(long, default_value_t = *DEFAULT_FILTER_RANGE.start(), allow_negative_numbers = true)]
        start: i32,
        #[arg(long, default_value_t = *DEFAULT_FILTER_RANGE.end(), allow_negative_numbers = true)]
        end: i32,
    },
    /// List available operations and conditions.
    List,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        if is_broken_pipe(&err) {
            debug!("stdout closed by reader");
            std::process::exit(exit_codes::OK);
        }
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.command {
        None => write_reference(&mut out)?,
        Some(Command::Run {
            operation,
            a,
            b,
            json,
        }) => cmd_run(&mut out, &operation, a, b, json)?,
        Some(Command::Filter {
            conditions,
            start,
            end,
        }) => cmd_filter(&mut out, &conditions, start, end)?,
        Some(Command::List) => cmd_list(&mut out)?,
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn cmd_run<W: Write>(out: &mut W, operation: &str, a: i32, b: i32, json: bool) -> Result<()> {
    let operation: Operation = operation.parse().context("select operation")?;
    let record = DispatchRecord::evaluate(operation, a, b);
    debug!(%operation, a, b, result = record.result, "dispatched");
    if json {
        serde_json::to_writer(&mut *out, &record).context("serialize dispatch record")?;
        writeln!(out).context("write dispatch record")?;
    } else {
        writeln!(out, "{}", record.result).context("write dispatch result")?;
    }
    Ok(())
}

fn cmd_filter<W: Write>(out: &mut W, names: &[String], start: i32, end: i32) -> Result<()> {
    if start > end {
        bail!("empty range: --start {} is greater than --end {}", start, end);
    }
    let conditions = parse_conditions(names)?;
    write_filter(out, &conditions, start..=end)
}

fn cmd_list<W: Write>(out: &mut W) -> Result<()> {
    let operations: Vec<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
    let conditions: Vec<&str> = Condition::ALL.iter().map(|c| c.name()).collect();
    writeln!(out, "operations: {}", operations.join(", ")).context("write operations")?;
    writeln!(out, "conditions: {}", conditions.join(", ")).context("write conditions")?;
    Ok(())
}

/// True when the failure is the reader closing stdout early (`| head`).
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
    })
}

/// Parse condition names, defaulting to every condition when none are given.
fn parse_conditions(names: &[String]) -> Result<Vec<Condition>> {
    if names.is_empty() {
        return Ok(Condition::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| name.parse::<Condition>().context("select condition"))
        .collect()
}
