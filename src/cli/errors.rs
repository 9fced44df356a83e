//! CLI-specific error types

use std::fmt;
use std::io;

use crate::footnotes::FootnoteError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Request line is not a valid request
    InvalidRequest,
    /// Lookup of an absent reference id
    NotFound,
    /// Collision shift would exceed the largest id
    IdOverflow,
    /// Positional access outside the store
    OutOfRange,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "FTN_CLI_CONFIG_ERROR",
            Self::IoError => "FTN_CLI_IO_ERROR",
            Self::InvalidRequest => "FTN_CLI_INVALID_REQUEST",
            Self::NotFound => "FTN_NOT_FOUND",
            Self::IdOverflow => "FTN_ID_OVERFLOW",
            Self::OutOfRange => "FTN_OUT_OF_RANGE",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Malformed request
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidRequest, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<FootnoteError> for CliError {
    fn from(e: FootnoteError) -> Self {
        let code = match e {
            FootnoteError::NotFound(_) => CliErrorCode::NotFound,
            FootnoteError::IdOverflow(_) => CliErrorCode::IdOverflow,
            FootnoteError::OutOfRange { .. } => CliErrorCode::OutOfRange,
        };
        Self::new(code, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footnote_errors_keep_their_codes() {
        let err = CliError::from(FootnoteError::NotFound(4));
        assert_eq!(err.code_str(), FootnoteError::NotFound(4).code());
        assert!(err.message().contains('4'));

        let err = CliError::from(FootnoteError::IdOverflow(i64::MAX));
        assert_eq!(err.code_str(), "FTN_ID_OVERFLOW");

        let err = CliError::from(FootnoteError::OutOfRange { position: 1, len: 0 });
        assert_eq!(err.code(), CliErrorCode::OutOfRange);
    }

    #[test]
    fn test_display() {
        let err = CliError::config_error("bad level");
        assert_eq!(err.to_string(), "FTN_CLI_CONFIG_ERROR: bad level");
    }
}
