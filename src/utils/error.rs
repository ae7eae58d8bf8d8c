//! Error handling for litnudge

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a nudge request cannot be carried out.
///
/// Finding no literal under the cursor is not an error; it is reported as an
/// unchanged line with a zero offset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ==================== Input Errors ====================

    #[error("Line contains a line break")]
    MultiLine,

    #[error("Index {index} is out of range for a line of {len} characters")]
    IndexOutOfRange { index: usize, len: usize },

    // ==================== Literal Errors ====================

    #[error("Invalid digits in literal: {0}")]
    InvalidDigits(String),
}
