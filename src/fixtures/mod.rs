//! Delimited text fixtures.
//!
//! Contacts can be supplied as delimited text, one record per line with
//! three columns: first name, last name, phone number. This is the format
//! used by the command-line front end and by fixture-driven tests.
//!
//! - A leading UTF-8 byte-order mark is ignored.
//! - Blank lines and lines starting with `#` are skipped.
//! - Unquoted values are trimmed; an empty unquoted value is absent.
//! - A value in single quotes is taken literally, so `''` is an empty but
//!   present value. A doubled quote inside a quoted value is a literal `'`.
//!
//! ```
//! use contact_manager::fixtures::parse_delimited;
//!
//! let rows = parse_delimited("John, Doe, 0123456789\n, Doe, ''", ',').unwrap();
//! assert_eq!(rows[0].contact.first_name.as_deref(), Some("John"));
//! assert_eq!(rows[1].contact.first_name, None);
//! assert_eq!(rows[1].contact.phone_number.as_deref(), Some(""));
//! ```

use crate::error::{FixtureError, FixtureResult};
use crate::models::NewContact;
use std::io::BufRead;
use std::iter::Peekable;
use std::str::Chars;

/// Default column delimiter.
pub const DEFAULT_DELIMITER: char = ',';

const BOM: char = '\u{FEFF}';
const QUOTE: char = '\'';
const COMMENT: char = '#';
const COLUMNS: usize = 3;

/// A parsed record and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRow {
    pub line: usize,
    pub contact: NewContact,
}

/// Parse delimited text into unvalidated contacts.
///
/// # Errors
///
/// Returns `FixtureError::ColumnCount` when a record does not have exactly
/// three columns and `FixtureError::UnterminatedQuote` when a quoted value
/// is not closed.
pub fn parse_delimited(input: &str, delimiter: char) -> FixtureResult<Vec<FixtureRow>> {
    let mut rows = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if let Some(row) = parse_line(index, line, delimiter)? {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Read and parse delimited text from any buffered reader.
///
/// # Errors
///
/// Same as [`parse_delimited`], plus `FixtureError::Io` when reading fails.
pub fn read_delimited<R: BufRead>(reader: R, delimiter: char) -> FixtureResult<Vec<FixtureRow>> {
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(row) = parse_line(index, &line, delimiter)? {
            rows.push(row);
        }
    }
    Ok(rows)
}

fn parse_line(index: usize, line: &str, delimiter: char) -> FixtureResult<Option<FixtureRow>> {
    let line = match index {
        0 => line.strip_prefix(BOM).unwrap_or(line),
        _ => line,
    };
    parse_record(line, index + 1, delimiter)
}

fn parse_record(line: &str, line_no: usize, delimiter: char) -> FixtureResult<Option<FixtureRow>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
        return Ok(None);
    }

    let mut columns: Vec<Option<String>> = Vec::with_capacity(COLUMNS);
    let mut chars = line.chars().peekable();

    loop {
        skip_whitespace(&mut chars, delimiter);

        let value = if chars.peek() == Some(&QUOTE) {
            chars.next();
            Some(read_quoted(&mut chars, line_no, delimiter)?)
        } else {
            let raw = read_until(&mut chars, delimiter);
            let raw = raw.trim();
            (!raw.is_empty()).then(|| raw.to_string())
        };
        columns.push(value);

        // Only the delimiter or end of line can follow a value
        if chars.next().is_none() {
            break;
        }
    }

    if columns.len() != COLUMNS {
        return Err(FixtureError::ColumnCount {
            line: line_no,
            found: columns.len(),
        });
    }

    let mut columns = columns.into_iter();
    let contact = NewContact {
        first_name: columns.next().flatten(),
        last_name: columns.next().flatten(),
        phone_number: columns.next().flatten(),
    };

    Ok(Some(FixtureRow {
        line: line_no,
        contact,
    }))
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>, delimiter: char) {
    while let Some(&c) = chars.peek() {
        if c == delimiter || !c.is_whitespace() {
            break;
        }
        chars.next();
    }
}

fn read_until(chars: &mut Peekable<Chars<'_>>, delimiter: char) -> String {
    let mut raw = String::new();
    while let Some(&c) = chars.peek() {
        if c == delimiter {
            break;
        }
        raw.push(c);
        chars.next();
    }
    raw
}

fn read_quoted(
    chars: &mut Peekable<Chars<'_>>,
    line_no: usize,
    delimiter: char,
) -> FixtureResult<String> {
    let mut value = String::new();
    loop {
        match chars.next() {
            Some(QUOTE) if chars.peek() == Some(&QUOTE) => {
                chars.next();
                value.push(QUOTE);
            }
            Some(QUOTE) => break,
            Some(c) => value.push(c),
            None => return Err(FixtureError::UnterminatedQuote { line: line_no }),
        }
    }

    // Text between the closing quote and the delimiter is kept
    let rest = read_until(chars, delimiter);
    value.push_str(rest.trim_end());
    Ok(value)
}
