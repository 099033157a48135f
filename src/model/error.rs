//! Construction errors for the record types.

use thiserror::Error;

/// Raised when a record cannot be built.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// A mandatory field was absent or blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
