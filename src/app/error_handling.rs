//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `PrimerError`: shows the user message, plus the developer message in verbose mode
/// - For other errors: shows the error and its chain in verbose mode, exits with 1
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    std::process::exit(report_fatal_error(&error, verbose))
}

/// Print a fatal error to stderr and return the exit status it maps to
pub fn report_fatal_error(error: &anyhow::Error, verbose: u8) -> i32 {
    use crate::error::{describe_error_code, PrimerError};

    error!("Fatal error: {}", error);

    if let Some(primer_err) = error.downcast_ref::<PrimerError>() {
        eprintln!("{}", primer_err.user_message());

        if verbose >= 1 {
            let code = primer_err.code();
            eprintln!("\nCode: E{:04} ({})", code, describe_error_code(code));
            eprintln!("Context Chain:\n{}", primer_err.developer_message());
        }

        primer_err.exit_code()
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        1
    }
}
