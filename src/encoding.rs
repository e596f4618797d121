//! Field encoding
//!
//! Pure, stateless escaping of a single CSV field per RFC 4180, along with
//! the dialect constants the rest of the crate builds on. Encoding never
//! fails and performs no I/O; a field that needs no quoting is returned
//! borrowed, unchanged.

use std::borrow::Cow;

/// The character that delimits CSV fields.
pub const FIELD_DELIMITER: char = ',';

/// The character sequence that delimits records: CR LF.
pub const RECORD_DELIMITER: &str = "\r\n";

/// The character used to quote fields containing restricted characters.
pub const QUOTATION_MARK: char = '"';

/// A quote character that has been escaped by doubling.
pub const ESCAPED_QUOTATION_MARK: &str = "\"\"";

/// The media type for CSV content: `text/csv`.
pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// The conventional filename extension for CSV files.
pub const CSV_FILENAME_EXTENSION: &str = "csv";

/// Returns `true` if the character forces a field to be quoted.
///
/// The restricted set is the field delimiter, the quote character, and the
/// two record-delimiter characters (CR and LF). An unquoted field containing
/// any of these would change the shape of the record for every downstream
/// parser, so their presence mandates quoting.
#[inline]
#[must_use]
pub fn is_restricted_char(ch: char) -> bool {
    matches!(ch, FIELD_DELIMITER | QUOTATION_MARK | '\r' | '\n')
}

/// Encodes a string for representation as a single CSV field.
///
/// If the input contains a comma, double quote, carriage return, or line
/// feed, every internal double quote is doubled and the result is wrapped in
/// quotes. Internal quotes are escaped before the wrapping quotes are added,
/// so the wrapping quotes are never themselves doubled. Input with no
/// restricted characters is returned borrowed and byte-for-byte unchanged.
///
/// This is a total function: every string input, including the empty string
/// and strings consisting entirely of restricted characters, has a defined
/// encoding.
///
/// # Examples
///
/// ```
/// use csv_appender::encoding::encode_field;
///
/// // Plain text passes through unchanged
/// assert_eq!(encode_field("plain"), "plain");
///
/// // A comma forces quoting
/// assert_eq!(encode_field("a,b"), "\"a,b\"");
///
/// // Internal quotes are doubled inside the quoted field
/// assert_eq!(encode_field("he said \"hi\""), "\"he said \"\"hi\"\"\"");
/// ```
#[must_use]
pub fn encode_field(field: &str) -> Cow<'_, str> {
    if !field.chars().any(is_restricted_char) {
        return Cow::Borrowed(field);
    }

    let mut encoded = String::with_capacity(field.len() + 2);
    encoded.push(QUOTATION_MARK);
    for ch in field.chars() {
        if ch == QUOTATION_MARK {
            encoded.push_str(ESCAPED_QUOTATION_MARK);
        } else {
            encoded.push(ch);
        }
    }
    encoded.push(QUOTATION_MARK);
    Cow::Owned(encoded)
}
