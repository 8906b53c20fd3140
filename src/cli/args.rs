//! CLI argument structures
//!
//! This module defines the command-line interface used by Primer: global
//! flags plus one subcommand per program family.

use crate::programs::{HelloStyle, Showcase};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Run small introductory console programs
#[derive(Parser)]
#[command(name = "primer")]
#[command(about = "primer - Introductory console programs: greetings, variables, a calculator and grades", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./primer.toml when present)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with a non-zero status when a program reports bad input
    #[arg(long, global = true)]
    pub strict: bool,

    /// Do not print prompts before reading input
    #[arg(long, global = true)]
    pub no_prompt: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a "Hello, World" greeting
    #[command(name = "hello")]
    Hello {
        /// Which variant to run
        #[arg(value_enum, default_value_t = HelloStyle::Classic)]
        style: HelloStyle,
    },

    /// Show variables and data types in action
    #[command(name = "variables", alias = "vars")]
    Variables {
        /// Which showcase to run
        #[arg(value_enum, default_value_t = Showcase::Basic)]
        showcase: Showcase,
    },

    /// Simple calculator: number, operator, number
    #[command(name = "calc")]
    Calc {
        /// Expression tokens (e.g. `10 + 3`); read from stdin when omitted
        #[arg(
            value_name = "TOKEN",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        expression: Vec<String>,
    },

    /// Average three test scores into a letter grade
    #[command(name = "grades")]
    Grades {
        /// The three scores; read from stdin when omitted
        #[arg(value_name = "SCORE", allow_negative_numbers = true)]
        scores: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every available program
    #[command(name = "list")]
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_hello_defaults_to_classic() {
        let cli = Cli::try_parse_from(["primer", "hello"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Hello {
                style: HelloStyle::Classic
            })
        ));
    }

    #[test]
    fn test_calc_accepts_negative_tokens() {
        let cli = Cli::try_parse_from(["primer", "calc", "-4", "-", "-2"]).unwrap();
        match cli.command {
            Some(Commands::Calc { expression }) => assert_eq!(expression, ["-4", "-", "-2"]),
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["primer", "grades", "--strict", "-vv", "--json", "90"]).unwrap();
        assert!(cli.strict);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Grades { scores, json }) => {
                assert!(json);
                assert_eq!(scores, ["90"]);
            }
            _ => panic!("expected grades"),
        }
    }

    #[test]
    fn test_grades_accepts_negative_scores() {
        let cli = Cli::try_parse_from(["primer", "grades", "-5", "50", "-0.5"]).unwrap();
        match cli.command {
            Some(Commands::Grades { scores, json }) => {
                assert!(!json);
                assert_eq!(scores, ["-5", "50", "-0.5"]);
            }
            _ => panic!("expected grades"),
        }
        assert!(Cli::try_parse_from(["primer", "grades", "-x"]).is_err());
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        assert!(Cli::try_parse_from(["primer", "hello", "loud"]).is_err());
    }
}
