//! Help text generation

use crate::cli::args::Cli;
use clap::CommandFactory;

/// Generate the top-level help shown when no subcommand is given
pub fn generate_help() -> String {
    Cli::command().render_help().to_string()
}
