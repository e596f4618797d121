//! Error module
//!
//! Defines the error type for the CSV appender library using `thiserror`.
//! The library has a single failure category: I/O errors surfaced while
//! opening, writing, or flushing the output sink. Field encoding itself is
//! total over all string input and cannot fail.

use thiserror::Error;

/// The error type for CSV record writing and file appending.
///
/// Every fallible operation in this crate returns this type. Underlying
/// causes are not classified further here; callers that need to distinguish
/// open failures from write or flush failures can inspect the wrapped
/// [`std::io::Error`].
#[derive(Error, Debug)]
pub enum CsvAppenderError {
    /// I/O error from the underlying sink or file system.
    ///
    /// This covers file-open failures, sink-write failures, and flush
    /// failures. A failed append leaves the file in whatever partial state
    /// the sink left it; no rollback is attempted.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
