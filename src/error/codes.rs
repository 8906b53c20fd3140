/// Error code registry for Primer
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Input acquisition errors
/// - 3000-3999: Domain errors (values that parsed but cannot be used)
/// - 4000-4999: Console I/O errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_PARSE_ERROR: u16 = 1002;
    pub const CONFIG_READ_ERROR: u16 = 1003;
    pub const CONFIG_INVALID_VALUE: u16 = 1004;

    // Input errors (2000-2999)
    pub const INPUT_GENERIC: u16 = 2000;
    pub const INPUT_MISSING: u16 = 2001;
    pub const INPUT_MALFORMED: u16 = 2002;
    pub const INPUT_READ_FAILED: u16 = 2003;

    // Domain errors (3000-3999)
    pub const DOMAIN_GENERIC: u16 = 3000;
    pub const DOMAIN_DIVIDE_BY_ZERO: u16 = 3001;
    pub const DOMAIN_UNKNOWN_OPERATOR: u16 = 3002;

    // I/O errors (4000-4999)
    pub const IO_GENERIC: u16 = 4000;
    pub const IO_WRITE_FAILED: u16 = 4001;
    pub const IO_FLUSH_FAILED: u16 = 4002;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Configuration errors
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Failed to parse configuration",
        1003 => "Failed to read configuration file",
        1004 => "Invalid value in configuration",

        // Input errors
        2000 => "Generic input error",
        2001 => "Expected input was not supplied",
        2002 => "Input could not be parsed as the expected type",
        2003 => "Failed to read from the input stream",

        // Domain errors
        3000 => "Generic domain error",
        3001 => "Division by zero",
        3002 => "Unrecognized operator",

        // I/O errors
        4000 => "Generic console I/O error",
        4001 => "Failed to write program output",
        4002 => "Failed to flush program output",

        // Other errors
        9000 => "Generic error",

        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_ranges() {
        assert!(ErrorCode::CONFIG_GENERIC >= 1000 && ErrorCode::CONFIG_GENERIC < 2000);
        assert!(ErrorCode::INPUT_GENERIC >= 2000 && ErrorCode::INPUT_GENERIC < 3000);
        assert!(ErrorCode::DOMAIN_GENERIC >= 3000 && ErrorCode::DOMAIN_GENERIC < 4000);
        assert!(ErrorCode::IO_GENERIC >= 4000 && ErrorCode::IO_GENERIC < 5000);
        assert!(ErrorCode::OTHER_GENERIC >= 9000 && ErrorCode::OTHER_GENERIC < 10000);
    }

    #[test]
    fn test_error_code_descriptions() {
        assert_eq!(describe_error_code(1001), "Configuration file not found");
        assert_eq!(describe_error_code(3001), "Division by zero");
        assert_eq!(describe_error_code(65535), "Unknown error code");
    }
}
