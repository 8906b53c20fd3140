//! The console programs
//!
//! Every program takes a [`Console`] and runs start to finish. Input and
//! domain problems are printed as diagnostics and returned as recoverable
//! [`PrimerError`](crate::error::PrimerError)s; the caller decides whether they fail the process.

pub mod calculator;
pub mod grades;
pub mod hello;
pub mod variables;

pub use grades::ReportFormat;
pub use hello::HelloStyle;
pub use variables::Showcase;

use crate::console::Console;
use crate::error::Result;
use std::io::{BufRead, Write};
use tracing::debug;

/// Entry in the program listing
#[derive(Debug, Clone, Copy)]
pub struct ProgramInfo {
    pub command: &'static str,
    pub summary: &'static str,
}

pub const CATALOG: &[ProgramInfo] = &[
    ProgramInfo {
        command: "hello classic",
        summary: "The classic \"Hello, World!\"",
    },
    ProgramInfo {
        command: "hello enhanced",
        summary: "Several greetings, escape sequences and ASCII art",
    },
    ProgramInfo {
        command: "hello functions",
        summary: "Output organized into helper functions",
    },
    ProgramInfo {
        command: "hello interactive",
        summary: "Reads your name and greets you",
    },
    ProgramInfo {
        command: "hello messages",
        summary: "Prints several messages in a row",
    },
    ProgramInfo {
        command: "variables basic",
        summary: "Integer, float and character variables",
    },
    ProgramInfo {
        command: "variables profile",
        summary: "A student profile built from variables",
    },
    ProgramInfo {
        command: "variables tour",
        summary: "Sizes, ranges, conversions and formatting of every scalar type",
    },
    ProgramInfo {
        command: "calc",
        summary: "Four-function calculator: number, operator, number",
    },
    ProgramInfo {
        command: "grades",
        summary: "Averages three test scores into a letter grade",
    },
];

/// Print the program catalog
pub fn list<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    writeln!(console, "Available programs:")?;
    let width = CATALOG.iter().map(|p| p.command.len()).max().unwrap_or(0);
    for program in CATALOG {
        writeln!(console, "  {:<width$}  {}", program.command, program.summary)?;
    }
    Ok(())
}

/// Turn a recoverable read failure into `None`, keeping fatal errors.
///
/// Used where a program checks each read and simply skips the lines that
/// depend on it.
pub(crate) fn optional<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_recoverable() => {
            debug!("Skipping optional input: {}", err.message());
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::{console, output};
    use crate::error::{ErrorCode, PrimerError};

    #[test]
    fn test_list_shows_every_program() {
        let mut c = console("");
        list(&mut c).unwrap();
        let out = output(c);
        for program in CATALOG {
            assert!(out.contains(program.command));
            assert!(out.contains(program.summary));
        }
    }

    #[test]
    fn test_optional_swallows_only_recoverable_errors() {
        let ok: Result<i64> = Ok(3);
        assert_eq!(optional(ok).unwrap(), Some(3));

        let recoverable: Result<i64> = Err(PrimerError::input(ErrorCode::INPUT_MISSING, "gone"));
        assert_eq!(optional(recoverable).unwrap(), None);

        let fatal: Result<i64> = Err(PrimerError::io(ErrorCode::IO_WRITE_FAILED, "pipe"));
        assert!(optional(fatal).is_err());
    }
}
