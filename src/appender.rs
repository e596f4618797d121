//! File appending
//!
//! Appends CSV records to a file, writing a header row only when the file is
//! first created. The file handle is scoped to a single append call:
//! opened, written, flushed, and closed before the call returns, on error
//! paths included.

use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::CsvAppenderError;
use crate::writer::write_record;

/// Appends a record to the given file, first writing the provided headers
/// (if any) when the file does not yet exist.
///
/// Existence is tested once, before any write, and not re-checked. The file
/// is then opened in append mode, creating it if absent. When the file did
/// not exist and `headers` is `Some`, the header row is written first; the
/// values row follows when `values` is `Some`. Everything written is flushed
/// before the handle is closed. Output is UTF-8.
///
/// A pre-existing file never receives headers, even if it is empty: the
/// header decision follows the existence check, not file length. When both
/// `headers` and `values` are `None`, no row is written, but the open still
/// occurs and may create an empty file.
///
/// The existence check and the open are two separate steps; a concurrent
/// first writer racing through the same window can also observe the file as
/// absent and double-write headers. Callers needing multi-writer safety must
/// serialize access externally.
///
/// # Errors
///
/// Returns [`CsvAppenderError::Io`] if the open, any write, or the flush
/// fails. Rows written before the failure remain in the file.
///
/// # Example
///
/// ```no_run
/// use csv_appender::appender::append_record;
/// use std::path::Path;
///
/// let path = Path::new("readings.csv");
/// append_record(
///     path,
///     Some(&["timestamp", "device", "reading"]),
///     Some(&[Some("2024-01-15T10:30:00Z"), Some("sensor-1"), None]),
/// )?;
/// # Ok::<(), csv_appender::CsvAppenderError>(())
/// ```
pub fn append_record<P, H, T>(
    path: P,
    headers: Option<&[H]>,
    values: Option<&[Option<T>]>,
) -> Result<(), CsvAppenderError>
where
    P: AsRef<Path>,
    H: Display,
    T: Display,
{
    let path = path.as_ref();
    let existed = path.exists();

    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut sink = BufWriter::new(file);

    if !existed {
        if let Some(headers) = headers {
            debug!(path = %path.display(), "initializing new CSV file with header row");
            write_record(&mut sink, headers.iter().map(Some))?;
        }
    }
    if let Some(values) = values {
        trace!(path = %path.display(), fields = values.len(), "appending CSV record");
        write_record(&mut sink, values.iter().map(Option::as_ref))?;
    }

    sink.flush()?;
    Ok(())
}

/// Appends a record to the given file with no headers.
///
/// Equivalent to [`append_record`] with `headers` set to `None`: the file is
/// created if absent, but never receives a header row from this call.
///
/// # Errors
///
/// Returns [`CsvAppenderError::Io`] if the open, any write, or the flush
/// fails.
pub fn append_values<P, T>(path: P, values: &[Option<T>]) -> Result<(), CsvAppenderError>
where
    P: AsRef<Path>,
    T: Display,
{
    append_record(path, None::<&[&str]>, Some(values))
}
