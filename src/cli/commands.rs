//! Command implementation for the CLI

use crate::{
    cli::Args,
    core::{add, parse_operand},
    error::Result,
};
use anyhow::Context;
use std::io::Write;
use tracing::{debug, instrument};

/// Printed when the operand count is wrong
pub const USAGE: &str = "calculator <int> <int>";

/// Write the outcome for the given arguments to `out`.
///
/// Usage and parse errors are reported as text, never as an `Err`; only a
/// failed write is an error.
#[instrument(skip(out))]
pub fn execute_command<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<()> {
    let text = render(&args.operands);

    out.write_all(text.as_bytes()).context("Failed to write output")?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}

/// Text the CLI prints for the given operands, without a trailing newline
pub fn render(operands: &[String]) -> String {
    let [a, b] = operands else {
        debug!("Expected 2 operands, got {}", operands.len());
        return USAGE.to_string();
    };

    match sum(a, b) {
        Ok(result) => {
            debug!("{a} + {b} = {result}");
            result.to_string()
        }
        Err(e) => {
            debug!("Rejected operands: {e}");
            e.to_string()
        }
    }
}

fn sum(a: &str, b: &str) -> Result<i64> {
    let a = parse_operand(a)?;
    let b = parse_operand(b)?;
    Ok(add(a, b))
}
