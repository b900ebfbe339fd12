//! WSV serialization.
//!
//! This module renders the document model back into WSV text.
//!
//! ## Overview
//!
//! Value serialization picks the shortest legal form:
//!
//! - null is written `-`
//! - the empty string is written `""`
//! - the single-character string `-` is written `"-"` (a bare `-` would read
//!   back as null)
//! - values containing a double quote, `#`, a line feed, or WSV whitespace
//!   are quoted, with `"` doubled and each line feed written as `"/"`
//! - everything else is written verbatim
//!
//! Line serialization has two modes: non-preserving joins values with a
//! single space; preserving walks the whitespace slots of the line and emits
//! the recorded runs (falling back to default gaps for absent slots) plus the
//! trailing comment.
//!
//! ## Usage
//!
//! ```rust
//! use wsv::serializer::serialize_value;
//!
//! assert_eq!(serialize_value(None), "-");
//! assert_eq!(serialize_value(Some("")), "\"\"");
//! assert_eq!(serialize_value(Some("a b")), "\"a b\"");
//! assert_eq!(serialize_value(Some("plain")), "plain");
//! ```

use crate::chars;
use crate::document::{WsvDocument, WsvLine};

/// Serializes a single value.
///
/// # Examples
///
/// ```rust
/// use wsv::serializer::serialize_value;
///
/// assert_eq!(serialize_value(Some("-")), "\"-\"");
/// assert_eq!(serialize_value(Some("a\nb")), "\"a\"/\"b\"");
/// assert_eq!(serialize_value(Some("say \"hi\"")), "\"say \"\"hi\"\"\"");
/// ```
#[must_use]
pub fn serialize_value(value: Option<&str>) -> String {
    let mut output = String::new();
    write_value(&mut output, value);
    output
}

/// Serializes a line, emitting preserved whitespace and comment.
#[must_use]
pub fn serialize_line(line: &WsvLine) -> String {
    let mut output = String::new();
    write_line(&mut output, line);
    output
}

/// Serializes only the values of a line, one space between values.
#[must_use]
pub fn serialize_line_non_preserving(line: &WsvLine) -> String {
    let mut output = String::new();
    write_values(&mut output, &line.values);
    output
}

/// Serializes rows of values; one line per row, one space between values.
///
/// # Examples
///
/// ```rust
/// use wsv::serializer::serialize_jagged_array;
///
/// let rows = vec![
///     vec![Some("a".to_string()), None],
///     vec![Some(String::new())],
/// ];
/// assert_eq!(serialize_jagged_array(&rows), "a -\n\"\"");
/// ```
#[must_use]
pub fn serialize_jagged_array(rows: &[Vec<Option<String>>]) -> String {
    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            let mut output = String::new();
            write_values(&mut output, row);
            output
        })
        .collect();
    lines.join("\n")
}

/// Serializes a whole document, joining lines with `U+000A`.
#[must_use]
pub fn serialize_document(document: &WsvDocument, preserving: bool) -> String {
    let lines: Vec<String> = document
        .lines
        .iter()
        .map(|line| {
            if preserving {
                serialize_line(line)
            } else {
                serialize_line_non_preserving(line)
            }
        })
        .collect();
    lines.join("\n")
}

fn needs_quotes(value: &str) -> bool {
    value.chars().any(chars::is_special)
}

pub(crate) fn write_value(output: &mut String, value: Option<&str>) {
    match value {
        None => output.push('-'),
        Some("") => output.push_str("\"\""),
        Some("-") => output.push_str("\"-\""),
        Some(value) if needs_quotes(value) => {
            output.push('"');
            for ch in value.chars() {
                match ch {
                    '"' => output.push_str("\"\""),
                    '\n' => output.push_str("\"/\""),
                    _ => output.push(ch),
                }
            }
            output.push('"');
        }
        Some(value) => output.push_str(value),
    }
}

fn write_values(output: &mut String, values: &[Option<String>]) {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        write_value(output, value.as_deref());
    }
}

pub(crate) fn write_line(output: &mut String, line: &WsvLine) {
    let values = &line.values;
    let whitespaces = line.whitespaces().unwrap_or(&[]);

    for (i, value) in values.iter().enumerate() {
        match whitespaces.get(i).and_then(|slot| slot.as_deref()) {
            Some(run) => output.push_str(run),
            // Default gap: nothing before the first value, one space before
            // every other value.
            None => {
                if i > 0 {
                    output.push(' ');
                }
            }
        }
        write_value(output, value.as_deref());
    }

    if let Some(slot) = whitespaces.get(values.len()) {
        output.push_str(slot.as_deref().unwrap_or(""));
    } else if line.comment().is_some() && !values.is_empty() {
        output.push(' ');
    }

    if let Some(comment) = line.comment() {
        output.push('#');
        output.push_str(comment);
    }
}
