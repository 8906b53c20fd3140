//! Simple four-function calculator

use crate::calc::{self, CalcError};
use crate::console::Console;
use crate::error::Result;
use std::io::{BufRead, Write};
use tracing::debug;

/// Read `number operator number`, then print the result or a diagnostic.
///
/// The operator is only validated once both operands are in, matching the
/// order in which the prompts appear.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    writeln!(console, "=== SIMPLE CALCULATOR ===")?;

    let lhs = console
        .ask_float("Enter first number: ", "the first number")
        .or_else(|e| console.report(e))?;
    let op = console
        .ask_char("Enter operation (+, -, *, /): ", "an operation")
        .or_else(|e| console.report(e))?;
    let rhs = console
        .ask_float("Enter second number: ", "the second number")
        .or_else(|e| console.report(e))?;

    match calc::evaluate(lhs, op, rhs) {
        Ok(calculation) => {
            debug!(lhs, %op, rhs, result = calculation.result, "Calculation complete");
            writeln!(console, "{calculation}")?;
            Ok(())
        }
        Err(err @ CalcError::UnknownOperator(_)) => {
            let outcome = console.report(err.into());
            writeln!(console, "Please use +, -, *, or /")?;
            outcome
        }
        Err(err) => console.report(err.into()),
    }
}
