//! CSV Appender Library
//!
//! This library encodes ordered sequences of field values as RFC 4180 CSV
//! records and appends them to a file, writing a header row only when the
//! file is first created. It includes modules for field encoding, record
//! serialization, and file appending.
//!
//! # CSV File Format
//!
//! ```csv
//! timestamp,device,reading
//! 2024-01-15T10:30:00.123Z,sensor-1,"23.5, rising"
//! 2024-01-15T10:30:01.456Z,sensor-2,
//! ```
//!
//! Fields are separated by `,` with no trailing delimiter and each record is
//! terminated by `\r\n`. A field is quoted if and only if it contains a
//! comma, double quote, carriage return, or line feed; internal double
//! quotes are doubled inside quoted fields. Absent (`None`) fields serialize
//! as empty, unquoted fields.

pub mod appender;
pub mod encoding;
pub mod error;
pub mod writer;

pub use appender::{append_record, append_values};
pub use encoding::encode_field;
pub use error::CsvAppenderError;
pub use writer::write_record;
