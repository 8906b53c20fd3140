//! "Hello, World" variants

use crate::console::Console;
use crate::error::Result;
use clap::ValueEnum;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HelloStyle {
    /// The classic single greeting
    #[default]
    Classic,
    /// Several greetings, escape sequences and a bit of ASCII art
    Enhanced,
    /// Output organized into small helper functions
    Functions,
    /// Ask for a name and greet it
    Interactive,
    /// Four lines, one after another
    Messages,
}

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, style: HelloStyle) -> Result<()> {
    debug!(?style, "Running hello program");
    match style {
        HelloStyle::Classic => classic(console),
        HelloStyle::Enhanced => enhanced(console),
        HelloStyle::Functions => functions(console),
        HelloStyle::Interactive => interactive(console),
        HelloStyle::Messages => messages(console),
    }
}

fn classic<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    writeln!(console, "Hello, World!")?;
    Ok(())
}

fn enhanced<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    writeln!(console, "Hello, World!")?;
    writeln!(console, "Welcome to Rust programming!")?;
    writeln!(console, "This is my first enhanced Rust program.")?;

    writeln!(console)?;
    writeln!(console, "Here are some formatting examples:")?;
    writeln!(console, "Tab-separated:\tHello\tWorld")?;
    writeln!(console, "Quoted text: \"Hello, World!\"")?;
    writeln!(console, "Backslash: C:\\Program Files\\")?;

    writeln!(console)?;
    for width in (1..=9).step_by(2) {
        let pad = (9 - width) / 2;
        writeln!(
            console,
            "{}{}{}",
            " ".repeat(pad),
            "*".repeat(width),
            " ".repeat(pad)
        )?;
    }

    writeln!(console, "\nProgram completed successfully!")?;
    Ok(())
}

const SEPARATOR: &str = "----------------------------------------";

fn functions<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    print_welcome_banner(console)?;
    writeln!(console, "{SEPARATOR}")?;
    print_greeting(console)?;
    writeln!(console, "{SEPARATOR}")?;
    print_program_info(console)?;

    writeln!(console, "\nThank you for running this program!")?;
    Ok(())
}

fn print_welcome_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "╔════════════════════════════════════╗")?;
    writeln!(out, "║       WELCOME TO RUST WORLD!       ║")?;
    writeln!(out, "║         Hello, World! Demo         ║")?;
    writeln!(out, "╚════════════════════════════════════╝")?;
    Ok(())
}

fn print_greeting<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Hello, World!")?;
    writeln!(out, "Greetings from the world of Rust programming!")?;
    writeln!(out, "This message comes from a separate function.")?;
    Ok(())
}

fn print_program_info<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Program: Multi-Function Hello World")?;
    writeln!(out, "Language: Rust")?;
    writeln!(out, "Functions used: 4 (including the entry point)")?;
    writeln!(out, "Purpose: Demonstrate function organization")?;
    Ok(())
}

fn interactive<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    writeln!(console, "Hello! Welcome to Rust programming.")?;
    let name = console
        .ask_word("What is your name? ", "your name")
        .or_else(|e| console.report(e))?;

    writeln!(console, "\nNice to meet you, {name}!")?;
    writeln!(
        console,
        "Hello, {name}! Welcome to the world of Rust programming."
    )?;
    writeln!(console, "I hope you enjoy learning Rust, {name}!")?;

    writeln!(console, "\n=== Program Information ===")?;
    writeln!(console, "Language: Rust")?;
    writeln!(console, "Your name: {name}")?;
    writeln!(console, "Status: First interactive program complete!")?;
    Ok(())
}

fn messages<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    writeln!(console, "Hello, World!")?;
    writeln!(console, "I am learning Rust programming!")?;
    writeln!(console, "This is my second program.")?;
    writeln!(console, "Programming is fun!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::{console, output};
    use crate::error::ErrorCode;

    fn run_style(style: HelloStyle, input: &str) -> (Result<()>, String) {
        let mut c = console(input);
        let result = run(&mut c, style);
        (result, output(c))
    }

    #[test]
    fn test_classic() {
        let (result, out) = run_style(HelloStyle::Classic, "");
        assert!(result.is_ok());
        assert_eq!(out, "Hello, World!\n");
    }

    #[test]
    fn test_enhanced_draws_tree() {
        let (result, out) = run_style(HelloStyle::Enhanced, "");
        assert!(result.is_ok());
        assert!(out.contains("Tab-separated:\tHello\tWorld\n"));
        assert!(out.contains("\n    *    \n   ***   \n  *****  \n ******* \n*********\n"));
        assert!(out.ends_with("Program completed successfully!\n"));
    }

    #[test]
    fn test_functions_uses_separators() {
        let (result, out) = run_style(HelloStyle::Functions, "");
        assert!(result.is_ok());
        assert_eq!(out.matches(SEPARATOR).count(), 2);
        assert!(out.contains("This message comes from a separate function."));
    }

    #[test]
    fn test_interactive_greets_first_word() {
        let (result, out) = run_style(HelloStyle::Interactive, "Grace Hopper\n");
        assert!(result.is_ok());
        assert!(out.contains("What is your name? "));
        assert!(out.contains("Nice to meet you, Grace!"));
        assert!(out.contains("Your name: Grace"));
    }

    #[test]
    fn test_interactive_without_name_reports() {
        let (result, out) = run_style(HelloStyle::Interactive, "");
        let err = result.unwrap_err();
        assert_eq!(err.code(), ErrorCode::INPUT_MISSING);
        assert!(out.contains("Error: expected your name, but the input ended"));
        assert!(!out.contains("Nice to meet you"));
    }

    #[test]
    fn test_messages() {
        let (_, out) = run_style(HelloStyle::Messages, "");
        assert_eq!(out.lines().count(), 4);
        assert!(out.ends_with("Programming is fun!\n"));
    }
}
