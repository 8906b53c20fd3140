//! Typed scalar input acquisition
//!
//! `Scanner` reads integers, floats, single characters and words from a
//! line-oriented stream the way the classic `scanf` conversions do: leading
//! whitespace (including newlines) is skipped, then the longest valid prefix
//! is consumed. Every read returns a `Result`, so a value can only be used
//! after its parse has been checked.

use std::io::BufRead;
use thiserror::Error;

/// Why a scalar could not be read
#[derive(Debug, Error)]
pub enum InputError {
    #[error("expected {expected}, but the input ended")]
    Missing { expected: &'static str },

    #[error("expected {expected}, found '{found}'")]
    Malformed {
        expected: &'static str,
        found: String,
    },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// scanf-style reader over any buffered input
pub struct Scanner<R> {
    reader: R,
    line: String,
    pos: usize,
    exhausted: bool,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
            exhausted: false,
        }
    }

    /// Read a signed decimal integer (`%d`)
    pub fn read_int(&mut self, expected: &'static str) -> Result<i64, InputError> {
        self.scan_with(expected, int_prefix_len, |s| s.parse::<i64>().ok())
    }

    /// Read a decimal floating-point number (`%f`)
    pub fn read_float(&mut self, expected: &'static str) -> Result<f64, InputError> {
        self.scan_with(expected, float_prefix_len, |s| s.parse::<f64>().ok())
    }

    /// Read the next non-whitespace character (`" %c"`)
    pub fn read_char(&mut self, expected: &'static str) -> Result<char, InputError> {
        if !self.skip_whitespace()? {
            return Err(InputError::Missing { expected });
        }
        // skip_whitespace guarantees at least one char remains on the line
        match self.line[self.pos..].chars().next() {
            Some(c) => {
                self.pos += c.len_utf8();
                Ok(c)
            }
            None => Err(InputError::Missing { expected }),
        }
    }

    /// Read a whitespace-delimited word (`%s`)
    pub fn read_word(&mut self, expected: &'static str) -> Result<String, InputError> {
        if !self.skip_whitespace()? {
            return Err(InputError::Missing { expected });
        }
        Ok(self.take_run())
    }

    fn scan_with<T>(
        &mut self,
        expected: &'static str,
        prefix_len: fn(&str) -> usize,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T, InputError> {
        if !self.skip_whitespace()? {
            return Err(InputError::Missing { expected });
        }

        let rest = &self.line[self.pos..];
        let len = prefix_len(rest);
        if len == 0 {
            let found = self.take_run();
            return Err(InputError::Malformed { expected, found });
        }

        let token = &rest[..len];
        match parse(token) {
            Some(value) => {
                self.pos += len;
                Ok(value)
            }
            None => {
                let found = self.take_run();
                Err(InputError::Malformed { expected, found })
            }
        }
    }

    /// Advance past whitespace, pulling new lines as needed.
    /// Returns false once the input is exhausted.
    fn skip_whitespace(&mut self) -> Result<bool, InputError> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();
            if self.pos < self.line.len() {
                return Ok(true);
            }
            if self.exhausted {
                return Ok(false);
            }

            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                self.exhausted = true;
                return Ok(false);
            }
        }
    }

    /// Consume the run of non-whitespace characters at the cursor
    fn take_run(&mut self) -> String {
        let rest = &self.line[self.pos..];
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let run = rest[..len].to_string();
        self.pos += len;
        run
    }
}

fn digits_from(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of the `[+-]?[0-9]+` prefix of `s`, or 0
fn int_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = digits_from(bytes, sign);
    if digits == 0 {
        0
    } else {
        sign + digits
    }
}

/// Length of the longest decimal float prefix of `s`, or 0
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = digits_from(bytes, i);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = digits_from(bytes, i + 1);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = digits_from(bytes, j);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scanner(input: &str) -> Scanner<Cursor<String>> {
        Scanner::new(Cursor::new(input.to_string()))
    }

    #[test]
    fn test_reads_calculator_sequence_across_lines() {
        let mut s = scanner("10\n+\n3\n");
        assert_eq!(s.read_float("first").unwrap(), 10.0);
        assert_eq!(s.read_char("op").unwrap(), '+');
        assert_eq!(s.read_float("second").unwrap(), 3.0);
    }

    #[test]
    fn test_reads_packed_expression_without_spaces() {
        let mut s = scanner("10-3.5");
        assert_eq!(s.read_float("first").unwrap(), 10.0);
        assert_eq!(s.read_char("op").unwrap(), '-');
        assert_eq!(s.read_float("second").unwrap(), 3.5);
    }

    #[test]
    fn test_float_forms() {
        let mut s = scanner("-2.5 .5 7. 1e3 4E-2 +8");
        assert_eq!(s.read_float("x").unwrap(), -2.5);
        assert_eq!(s.read_float("x").unwrap(), 0.5);
        assert_eq!(s.read_float("x").unwrap(), 7.0);
        assert_eq!(s.read_float("x").unwrap(), 1000.0);
        assert_eq!(s.read_float("x").unwrap(), 0.04);
        assert_eq!(s.read_float("x").unwrap(), 8.0);
    }

    #[test]
    fn test_dangling_exponent_is_left_unread() {
        let mut s = scanner("5e+ x");
        assert_eq!(s.read_float("x").unwrap(), 5.0);
        assert_eq!(s.read_word("rest").unwrap(), "e+");
    }

    #[test]
    fn test_malformed_number_reports_token() {
        let mut s = scanner("abc 4");
        match s.read_float("a number") {
            Err(InputError::Malformed { expected, found }) => {
                assert_eq!(expected, "a number");
                assert_eq!(found, "abc");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        // the bad token is consumed, the next one is still readable
        assert_eq!(s.read_float("a number").unwrap(), 4.0);
    }

    #[test]
    fn test_lone_sign_is_malformed() {
        let mut s = scanner("- 1");
        assert!(matches!(
            s.read_float("n"),
            Err(InputError::Malformed { .. })
        ));
    }

    #[test]
    fn test_missing_input() {
        let mut s = scanner("   \n\n");
        assert!(matches!(
            s.read_int("your age"),
            Err(InputError::Missing { expected: "your age" })
        ));
        // stays exhausted
        assert!(matches!(s.read_char("c"), Err(InputError::Missing { .. })));
    }

    #[test]
    fn test_int_reads_prefix_only() {
        let mut s = scanner("12.75");
        assert_eq!(s.read_int("n").unwrap(), 12);
        assert_eq!(s.read_float("rest").unwrap(), 0.75);
    }

    #[test]
    fn test_int_overflow_is_malformed() {
        let mut s = scanner("99999999999999999999");
        assert!(matches!(s.read_int("n"), Err(InputError::Malformed { .. })));
    }

    #[test]
    fn test_read_word_and_unicode_char() {
        let mut s = scanner("  Ada Lovelace\n é");
        assert_eq!(s.read_word("name").unwrap(), "Ada");
        assert_eq!(s.read_word("name").unwrap(), "Lovelace");
        assert_eq!(s.read_char("c").unwrap(), 'é');
    }

    #[test]
    fn test_prefix_lengths() {
        assert_eq!(int_prefix_len("-42x"), 3);
        assert_eq!(int_prefix_len("+"), 0);
        assert_eq!(float_prefix_len("."), 0);
        assert_eq!(float_prefix_len("3.14abc"), 4);
        assert_eq!(float_prefix_len("1e"), 1);
    }
}
