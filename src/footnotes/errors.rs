//! Footnote collection error types
//!
//! - FTN_NOT_FOUND: lookup of a reference id that no record carries (recoverable)
//! - FTN_ID_OVERFLOW: a collision would shift a record past `i64::MAX` (recoverable,
//!   the store is left untouched)
//! - FTN_OUT_OF_RANGE: positional access outside the store (caller bug)

use thiserror::Error;

/// Result type for footnote operations
pub type FootnoteResult<T> = Result<T, FootnoteError>;

/// Footnote collection errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FootnoteError {
    /// No record carries the requested reference id
    #[error("No footnote with reference id {0}")]
    NotFound(i64),

    /// Inserting `id` would shift the record holding `i64::MAX`
    #[error("Cannot insert footnote {0}: shifting would overflow the largest id")]
    IdOverflow(i64),

    /// Positional access outside `[0, len)`
    #[error("Position {position} out of range for store of length {len}")]
    OutOfRange { position: usize, len: usize },
}

impl FootnoteError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            FootnoteError::NotFound(_) => "FTN_NOT_FOUND",
            FootnoteError::IdOverflow(_) => "FTN_ID_OVERFLOW",
            FootnoteError::OutOfRange { .. } => "FTN_OUT_OF_RANGE",
        }
    }

    /// Whether callers are expected to handle this error as a data condition.
    ///
    /// `OutOfRange` signals a logic error in the caller and is not recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FootnoteError::NotFound(_) | FootnoteError::IdOverflow(_))
    }
}
