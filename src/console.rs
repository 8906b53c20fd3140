//! Console wiring shared by every program
//!
//! A `Console` owns the input [`Scanner`], the output sink, and the prompt
//! policy. It implements [`Write`], so programs print with `writeln!`.

use crate::error::{ErrorCode, PrimerError, Result};
use crate::input::Scanner;
use std::io::{self, BufRead, Write};
use tracing::{trace, warn};

pub struct Console<R, W> {
    scanner: Scanner<R>,
    out: W,
    prompts: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self {
            scanner: Scanner::new(reader),
            out,
            prompts: true,
        }
    }

    /// Enable or disable prompt text before reads
    pub fn with_prompts(mut self, prompts: bool) -> Self {
        self.prompts = prompts;
        self
    }

    /// Write prompt text without a newline and flush it
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        if self.prompts {
            write!(self.out, "{text}")?;
            self.flush_output()?;
        }
        Ok(())
    }

    pub fn ask_int(&mut self, prompt: &str, expected: &'static str) -> Result<i64> {
        self.prompt(prompt)?;
        let value = self.scanner.read_int(expected)?;
        trace!(value, expected, "read integer");
        Ok(value)
    }

    pub fn ask_float(&mut self, prompt: &str, expected: &'static str) -> Result<f64> {
        self.prompt(prompt)?;
        let value = self.scanner.read_float(expected)?;
        trace!(value, expected, "read float");
        Ok(value)
    }

    pub fn ask_char(&mut self, prompt: &str, expected: &'static str) -> Result<char> {
        self.prompt(prompt)?;
        let value = self.scanner.read_char(expected)?;
        trace!(%value, expected, "read character");
        Ok(value)
    }

    pub fn ask_word(&mut self, prompt: &str, expected: &'static str) -> Result<String> {
        self.prompt(prompt)?;
        let value = self.scanner.read_word(expected)?;
        trace!(%value, expected, "read word");
        Ok(value)
    }

    /// Print the diagnostic for a recoverable error and hand it back.
    ///
    /// Non-recoverable errors are returned untouched; nothing is printed.
    pub fn report<T>(&mut self, err: PrimerError) -> Result<T> {
        if err.is_recoverable() {
            warn!(code = err.code(), "{}", err.message());
            writeln!(self.out, "Error: {}", err.message())?;
        }
        Err(err)
    }

    /// Flush buffered output, e.g. before the process exits
    pub fn flush_output(&mut self) -> Result<()> {
        self.out.flush().map_err(|e| {
            PrimerError::io(ErrorCode::IO_FLUSH_FAILED, e.to_string()).with_source(e)
        })
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<R, W: Write> Write for Console<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{console, output};
    use super::*;

    /// Accepts nothing: the reading end has gone away
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn test_prompt_is_written_without_newline() {
        let mut c = console("42\n");
        assert_eq!(c.ask_int("Enter your age: ", "your age").unwrap(), 42);
        assert_eq!(output(c), "Enter your age: ");
    }

    #[test]
    fn test_prompts_can_be_disabled() {
        let mut c = console("1.5").with_prompts(false);
        assert_eq!(c.ask_float("Enter height: ", "height").unwrap(), 1.5);
        assert_eq!(output(c), "");
    }

    #[test]
    fn test_parse_failure_becomes_input_error() {
        let mut c = console("abc");
        let err = c.ask_float("", "a number").unwrap_err();
        assert_eq!(err.code(), ErrorCode::INPUT_MALFORMED);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_report_prints_recoverable_diagnostic() {
        let mut c = console("").with_prompts(false);
        let err = c.ask_char("", "an operator").unwrap_err();
        let result: Result<()> = c.report(err);
        assert!(result.is_err());
        assert_eq!(output(c), "Error: expected an operator, but the input ended\n");
    }

    #[test]
    fn test_report_is_silent_for_fatal_errors() {
        let mut c = console("");
        let result: Result<()> = c.report(PrimerError::other("boom"));
        assert!(result.is_err());
        assert_eq!(output(c), "");
    }

    #[test]
    fn test_flush_failure_has_its_own_code() {
        let mut c = Console::new(io::Cursor::new(String::new()), ClosedPipe);
        let err = c.flush_output().unwrap_err();
        assert_eq!(err.code(), ErrorCode::IO_FLUSH_FAILED);
        assert!(err.is_broken_pipe());
    }

    #[test]
    fn test_write_to_closed_pipe_is_broken_pipe() {
        let mut c = Console::new(io::Cursor::new(String::new()), ClosedPipe);
        let err: PrimerError = writeln!(c, "Hello, World!").unwrap_err().into();
        assert_eq!(err.code(), ErrorCode::IO_WRITE_FAILED);
        assert!(err.is_broken_pipe());
    }

    #[test]
    fn test_console_is_a_writer() {
        let mut c = console("");
        writeln!(c, "Hello, World!").unwrap();
        assert_eq!(output(c), "Hello, World!\n");
    }
}
