//! Record serialization
//!
//! Composes [`encode_field`] over an ordered sequence of optional field
//! values and writes one delimited, terminated record to a byte sink.

use std::fmt::Display;
use std::io::Write;

use crate::encoding::{encode_field, FIELD_DELIMITER, RECORD_DELIMITER};
use crate::error::CsvAppenderError;

/// Writes one CSV record to the given sink.
///
/// Fields are written in iteration order with the field delimiter between
/// them: no delimiter before the first field and none after the last, so the
/// number of delimiters written is always `max(0, len - 1)`. Each present
/// field is formatted with its [`Display`] implementation and passed through
/// [`encode_field`] exactly once; an absent (`None`) field contributes
/// nothing, producing an empty unquoted field. The record delimiter `\r\n`
/// is written exactly once after the fields, including for an empty
/// sequence, which emits just `\r\n`.
///
/// Output is UTF-8. The sink is not flushed here; flushing is the caller's
/// responsibility.
///
/// # Errors
///
/// Returns [`CsvAppenderError::Io`] if any sink write fails. The record may
/// have been partially written at that point; no rollback is attempted.
///
/// # Example
///
/// ```
/// use csv_appender::writer::write_record;
///
/// let mut sink = Vec::new();
/// write_record(&mut sink, [Some("a"), None, Some("b,c")]).unwrap();
/// assert_eq!(sink, b"a,,\"b,c\"\r\n");
/// ```
pub fn write_record<W, I, S>(sink: &mut W, fields: I) -> Result<(), CsvAppenderError>
where
    W: Write,
    I: IntoIterator<Item = Option<S>>,
    S: Display,
{
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            write!(sink, "{}", FIELD_DELIMITER)?;
        }
        if let Some(value) = field {
            let text = value.to_string();
            sink.write_all(encode_field(&text).as_bytes())?;
        }
    }
    sink.write_all(RECORD_DELIMITER.as_bytes())?;
    Ok(())
}
