use std::path::PathBuf;
use thiserror::Error;

use crate::calc::CalcError;
use crate::input::InputError;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};


/// The unified error type for the entire Primer application
#[derive(Error, Debug)]
pub enum PrimerError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Input error: {message}")]
    Input {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Domain error: {message}")]
    Domain {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Console I/O error: {message}")]
    Io {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PrimerError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a configuration error with specific code and file path
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create an input error with specific code
    pub fn input(code: u16, message: impl Into<String>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a domain error with specific code
    pub fn domain(code: u16, message: impl Into<String>) -> Self {
        Self::Domain {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a console I/O error with specific code
    pub fn io(code: u16, message: impl Into<String>) -> Self {
        Self::Io {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Input { source: src, .. }
            | Self::Domain { source: src, .. }
            | Self::Io { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Input { .. } => 3,
            Self::Domain { .. } => 4,
            Self::Io { .. } => 5,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Input { code, .. }
            | Self::Domain { code, .. }
            | Self::Io { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// The bare message, without code or category
    pub fn message(&self) -> &str {
        match self {
            Self::Config { message, .. }
            | Self::Input { message, .. }
            | Self::Domain { message, .. }
            | Self::Io { message, .. }
            | Self::Other { message, .. } => message,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, path, .. } => {
                if let Some(p) = path {
                    format!("Configuration problem in {}: {}", p.display(), message)
                } else {
                    format!("Configuration problem: {}", message)
                }
            }
            Self::Input { message, .. } => format!("Input error: {}", message),
            Self::Domain { message, .. } => format!("Error: {}", message),
            Self::Io { message, .. } => format!("Console error: {}", message),
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        format!("{:#}", self)
    }

    /// Check if this is a recoverable error
    ///
    /// Input and domain errors have already been reported by the program that
    /// hit them; whether they also fail the process depends on strict mode.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Input { .. } | Self::Domain { .. })
    }

    /// True when output failed because the reader closed stdout (`| head`)
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Io {
                source: Some(source),
                ..
            } => source
                .downcast_ref::<std::io::Error>()
                .is_some_and(|e| e.kind() == std::io::ErrorKind::BrokenPipe),
            _ => false,
        }
    }
}

impl From<InputError> for PrimerError {
    fn from(err: InputError) -> Self {
        let code = match &err {
            InputError::Missing { .. } => ErrorCode::INPUT_MISSING,
            InputError::Malformed { .. } => ErrorCode::INPUT_MALFORMED,
            InputError::Io(_) => ErrorCode::INPUT_READ_FAILED,
        };
        PrimerError::input(code, err.to_string()).with_source(err)
    }
}

impl From<CalcError> for PrimerError {
    fn from(err: CalcError) -> Self {
        let code = match &err {
            CalcError::DivisionByZero => ErrorCode::DOMAIN_DIVIDE_BY_ZERO,
            CalcError::UnknownOperator(_) => ErrorCode::DOMAIN_UNKNOWN_OPERATOR,
        };
        PrimerError::domain(code, err.to_string()).with_source(err)
    }
}

impl From<std::io::Error> for PrimerError {
    fn from(err: std::io::Error) -> Self {
        PrimerError::io(ErrorCode::IO_WRITE_FAILED, err.to_string()).with_source(err)
    }
}

/// Type alias for Results using PrimerError
pub type Result<T> = std::result::Result<T, PrimerError>;
