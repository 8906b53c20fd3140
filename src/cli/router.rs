//! Command routing and execution
//!
//! This module wires each subcommand to its program, chooses the input
//! source, and applies the strict/lenient exit policy.

use crate::app::AppConfig;
use crate::cli::args::Commands;
use crate::cli::help::generate_help;
use crate::config::PrimerConfig;
use crate::console::Console;
use crate::error::Result as PrimerResult;
use crate::programs::{self, calculator, grades, hello, variables, ReportFormat};
use anyhow::Result;
use std::io::{self, BufRead, Cursor, Write};
use tracing::debug;

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(command: Option<Commands>, config: &AppConfig) -> Result<()> {
    let settings = &config.settings;

    let outcome = match command {
        None => write_help(),
        Some(Commands::Hello { style }) => run_program(settings, &[], |c| hello::run(c, style)),
        Some(Commands::Variables { showcase }) => {
            run_program(settings, &[], |c| variables::run(c, showcase))
        }
        Some(Commands::Calc { expression }) => {
            run_program(settings, &expression, calculator::run)
        }
        Some(Commands::Grades { scores, json }) => {
            let format = if json {
                ReportFormat::Json
            } else {
                ReportFormat::Text
            };
            run_program(settings, &scores, |c| grades::run(c, format))
        }
        Some(Commands::List) => run_program(settings, &[], programs::list),
    };

    settle(outcome, settings.strict)
}

type StdConsole = Console<Box<dyn BufRead>, io::StdoutLock<'static>>;

/// Run a program against stdout, reading from `inline` tokens when given and
/// from stdin otherwise.
fn run_program<F>(settings: &PrimerConfig, inline: &[String], program: F) -> PrimerResult<()>
where
    F: FnOnce(&mut StdConsole) -> PrimerResult<()>,
{
    let (reader, prompts): (Box<dyn BufRead>, bool) = if inline.is_empty() {
        (Box::new(io::stdin().lock()), settings.prompts)
    } else {
        debug!(tokens = ?inline, "Reading input from command-line tokens");
        (Box::new(Cursor::new(inline.join(" "))), false)
    };

    let mut console = Console::new(reader, io::stdout().lock()).with_prompts(prompts);
    let result = program(&mut console);
    console.flush_output()?;
    result
}

fn write_help() -> PrimerResult<()> {
    let mut out = io::stdout().lock();
    write!(out, "{}", generate_help())?;
    out.flush()?;
    Ok(())
}

/// Decide whether a program's error should fail the process.
///
/// Recoverable errors were already printed by the program; outside strict
/// mode they end the run with a success status. A closed stdout ends the run
/// quietly.
pub fn settle(outcome: PrimerResult<()>, strict: bool) -> Result<()> {
    match outcome {
        Ok(()) => Ok(()),
        Err(err) if err.is_broken_pipe() => {
            debug!("Stdout was closed by the reader; stopping");
            Ok(())
        }
        Err(err) if err.is_recoverable() && !strict => {
            debug!(
                code = err.code(),
                "Program reported a recoverable error; exiting successfully"
            );
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
