//! The WSV document model.
//!
//! This module provides the in-memory representation shared by the textual
//! and binary codecs:
//!
//! - [`WsvLine`]: an ordered sequence of values (`Option<String>`, where
//!   `None` is the WSV null) plus the optional whitespace runs and trailing
//!   comment captured by a preserving parse
//! - [`WsvDocument`]: an ordered sequence of lines plus a text encoding tag
//! - [`WsvEncoding`]: the encoding tag, consulted only when a document is
//!   materialized to bytes by an outer I/O layer
//!
//! ## Usage Patterns
//!
//! ### Parsing and Serializing
//!
//! ```rust
//! use wsv::WsvDocument;
//!
//! let doc = WsvDocument::parse("a b c\n\"hello world\" -").unwrap();
//! assert_eq!(doc.lines.len(), 2);
//! assert_eq!(doc.lines[0].values, vec![
//!     Some("a".to_string()),
//!     Some("b".to_string()),
//!     Some("c".to_string()),
//! ]);
//! assert_eq!(doc.serialize(), "a b c\n\"hello world\" -");
//! ```
//!
//! ### Building Documents Programmatically
//!
//! ```rust
//! use wsv::{WsvDocument, WsvLine};
//!
//! let mut doc = WsvDocument::new();
//! let mut line = WsvLine::from_values(vec![Some("a".to_string()), None]);
//! line.set_comment(Some("first line".to_string())).unwrap();
//! doc.push_line(line);
//!
//! assert_eq!(doc.serialize(), "a - #first line");
//! ```

use crate::chars;
use crate::{parser, serializer, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The text encoding a document is materialized with.
///
/// Parsing and serializing operate on in-memory strings and ignore this tag;
/// it exists so a document round-tripped through an outer I/O layer keeps its
/// on-disk encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WsvEncoding {
    #[default]
    Utf8,
    Utf16,
    Utf16Reverse,
    Utf32,
}

/// A single WSV line: values plus optional preserved decoration.
///
/// Values are `Option<String>`; `None` is the WSV null, written `-` in the
/// textual form, and is distinct from the empty string `Some("")`, written
/// `""`.
///
/// The two decoration fields are used only by the preserving parser and
/// serializer:
///
/// - `whitespaces` holds one optional whitespace run per value (the run
///   *before* that value), plus optionally one trailing run after the last
///   value. A `None` slot means "use the default gap": nothing before the
///   first value, a single space elsewhere.
/// - `comment` is the text after a `#`, possibly empty, without the `#`
///   itself or the terminating line feed.
///
/// Both are validated on mutation, so a line can always be serialized back
/// to well-formed WSV.
///
/// # Examples
///
/// ```rust
/// use wsv::WsvLine;
///
/// let line = WsvLine::parse("  a  #hi").unwrap();
/// assert_eq!(line.values, vec![Some("a".to_string())]);
/// assert_eq!(line.comment(), Some("hi"));
/// assert_eq!(line.to_string(), "  a  #hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WsvLine {
    /// The values of this line, in order.
    pub values: Vec<Option<String>>,
    whitespaces: Option<Vec<Option<String>>>,
    comment: Option<String>,
}

impl WsvLine {
    /// Creates an empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a line from values, with default whitespace and no comment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wsv::WsvLine;
    ///
    /// let line = WsvLine::from_values(vec![Some("a".to_string()), None]);
    /// assert_eq!(line.to_string(), "a -");
    /// ```
    #[must_use]
    pub fn from_values(values: Vec<Option<String>>) -> Self {
        WsvLine {
            values,
            whitespaces: None,
            comment: None,
        }
    }

    /// Creates a line with explicit whitespace runs and comment, validating
    /// both.
    ///
    /// # Errors
    ///
    /// Returns an error if a whitespace slot contains a code point outside
    /// the WSV whitespace set, a non-leading slot is empty, or the comment
    /// contains a line feed.
    pub fn with_decoration(
        values: Vec<Option<String>>,
        whitespaces: Option<Vec<Option<String>>>,
        comment: Option<String>,
    ) -> Result<Self> {
        let mut line = Self::from_values(values);
        line.set_whitespaces(whitespaces)?;
        line.set_comment(comment)?;
        Ok(line)
    }

    /// Used by the parser, whose captured decoration is valid by construction.
    pub(crate) fn from_parts_unchecked(
        values: Vec<Option<String>>,
        whitespaces: Option<Vec<Option<String>>>,
        comment: Option<String>,
    ) -> Self {
        WsvLine {
            values,
            whitespaces,
            comment,
        }
    }

    /// Parses a single line of WSV text, preserving whitespace and comment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MultipleLinesNotAllowed`](crate::Error) if the input
    /// contains a line feed, or any parse error of the grammar.
    pub fn parse(input: &str) -> Result<Self> {
        parser::parse_line(input)
    }

    /// Parses a single line of WSV text, keeping only the values.
    ///
    /// # Errors
    ///
    /// Same error conditions as [`WsvLine::parse`].
    pub fn parse_non_preserving(input: &str) -> Result<Self> {
        parser::parse_line_non_preserving(input)
    }

    /// The preserved whitespace runs, if any were captured or set.
    #[must_use]
    pub fn whitespaces(&self) -> Option<&[Option<String>]> {
        self.whitespaces.as_deref()
    }

    /// The comment text, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Returns `true` if the line has neither values, whitespace, nor comment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.whitespaces.is_none() && self.comment.is_none()
    }

    /// Replaces the whitespace runs, validating every slot.
    ///
    /// Passing `None` restores the default gaps (nothing before the first
    /// value, a single space before every other value).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWhitespace`](crate::Error) if a slot contains
    /// a code point outside the WSV whitespace set, or
    /// [`Error::EmptyWhitespace`](crate::Error) if a non-leading slot is the
    /// empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wsv::WsvLine;
    ///
    /// let mut line = WsvLine::from_values(vec![Some("a".to_string())]);
    /// line.set_whitespaces(Some(vec![Some("\t".to_string())])).unwrap();
    /// assert_eq!(line.to_string(), "\ta");
    ///
    /// assert!(line.set_whitespaces(Some(vec![Some("x".to_string())])).is_err());
    /// ```
    pub fn set_whitespaces(&mut self, whitespaces: Option<Vec<Option<String>>>) -> Result<()> {
        if let Some(slots) = &whitespaces {
            for (i, slot) in slots.iter().enumerate() {
                if let Some(value) = slot {
                    chars::validate_whitespace_string(value, i == 0)?;
                }
            }
        }
        self.whitespaces = whitespaces;
        Ok(())
    }

    /// Replaces the comment, validating that it contains no line feed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LineFeedInComment`](crate::Error) if the text
    /// contains `U+000A`.
    pub fn set_comment(&mut self, comment: Option<String>) -> Result<()> {
        if let Some(text) = &comment {
            chars::validate_comment(text)?;
        }
        self.comment = comment;
        Ok(())
    }
}

impl fmt::Display for WsvLine {
    /// Renders the preserving serialization of the line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serializer::serialize_line(self))
    }
}

impl FromStr for WsvLine {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A WSV document: an ordered sequence of lines plus an encoding tag.
///
/// Documents are constructed empty, from a parse, or from a jagged array of
/// values, and are mutated by pushing lines or editing lines in place. They
/// are single-owner; concurrent mutation is not part of the contract.
///
/// # Examples
///
/// ```rust
/// use wsv::WsvDocument;
///
/// let doc = WsvDocument::parse("\"\" \"-\" -").unwrap();
/// assert_eq!(doc.lines[0].values, vec![
///     Some(String::new()),
///     Some("-".to_string()),
///     None,
/// ]);
///
/// let bytes = doc.to_binary().unwrap();
/// let decoded = WsvDocument::from_binary(&bytes).unwrap();
/// assert_eq!(decoded.lines[0].values, doc.lines[0].values);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WsvDocument {
    pub lines: Vec<WsvLine>,
    pub encoding: WsvEncoding,
}

impl WsvDocument {
    /// Creates an empty document with UTF-8 encoding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses WSV text into a document, preserving whitespace and comments.
    ///
    /// A preserving parse followed by [`WsvDocument::serialize`] reproduces
    /// the input byte for byte.
    ///
    /// # Errors
    ///
    /// Returns a parse error with position information on invalid input.
    pub fn parse(input: &str) -> Result<Self> {
        parser::parse_document(input, 0)
    }

    /// Parses WSV text into a document, keeping only the values.
    ///
    /// # Errors
    ///
    /// Returns a parse error with position information on invalid input.
    pub fn parse_non_preserving(input: &str) -> Result<Self> {
        parser::parse_document_non_preserving(input, 0)
    }

    /// Builds a document from rows of values.
    #[must_use]
    pub fn from_jagged_array(rows: Vec<Vec<Option<String>>>) -> Self {
        WsvDocument {
            lines: rows.into_iter().map(WsvLine::from_values).collect(),
            encoding: WsvEncoding::default(),
        }
    }

    /// Copies out the values of every line, dropping decoration.
    #[must_use]
    pub fn as_jagged_array(&self) -> Vec<Vec<Option<String>>> {
        self.lines.iter().map(|line| line.values.clone()).collect()
    }

    /// Appends a line to the document.
    pub fn push_line(&mut self, line: WsvLine) {
        self.lines.push(line);
    }

    /// Serializes the document, emitting preserved whitespace and comments.
    #[must_use]
    pub fn serialize(&self) -> String {
        serializer::serialize_document(self, true)
    }

    /// Serializes only the values, one space between values, no comments.
    #[must_use]
    pub fn serialize_non_preserving(&self) -> String {
        serializer::serialize_document(self, false)
    }

    /// Encodes the document as Binary WSV, including the `BWSV1` preamble.
    ///
    /// Whitespace and comments are not representable in the binary form and
    /// are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error only if a value is too long for a VarInt56 length
    /// prefix, which cannot happen for strings that fit in memory.
    pub fn to_binary(&self) -> Result<Vec<u8>> {
        crate::binary::encode_document(self, true)
    }

    /// Decodes a Binary WSV byte sequence, expecting the `BWSV1` preamble.
    ///
    /// # Errors
    ///
    /// Returns an error if the preamble is missing, the version is not
    /// supported, or a record is malformed or truncated.
    pub fn from_binary(bytes: &[u8]) -> Result<Self> {
        crate::binary::decode_document(bytes, true)
    }
}

impl fmt::Display for WsvDocument {
    /// Renders the preserving serialization of the document.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for WsvDocument {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_line_setters_validate() {
        let mut line = WsvLine::from_values(vec![Some("a".to_string()), Some("b".to_string())]);

        assert!(line
            .set_whitespaces(Some(vec![Some(String::new()), Some(" ".to_string())]))
            .is_ok());
        assert_eq!(
            line.set_whitespaces(Some(vec![None, Some(String::new())])),
            Err(Error::EmptyWhitespace)
        );
        assert_eq!(
            line.set_whitespaces(Some(vec![Some("a".to_string())])),
            Err(Error::InvalidWhitespace)
        );

        assert!(line.set_comment(Some("fine".to_string())).is_ok());
        assert_eq!(
            line.set_comment(Some("not\nfine".to_string())),
            Err(Error::LineFeedInComment)
        );
    }

    #[test]
    fn test_with_decoration_rejects_invalid() {
        assert!(WsvLine::with_decoration(
            vec![Some("a".to_string())],
            Some(vec![Some("  ".to_string())]),
            Some("c".to_string()),
        )
        .is_ok());

        assert!(WsvLine::with_decoration(
            vec![Some("a".to_string())],
            Some(vec![Some("no".to_string())]),
            None,
        )
        .is_err());
    }

    #[test]
    fn test_null_is_not_empty_string() {
        let line = WsvLine::from_values(vec![None, Some(String::new())]);
        assert_eq!(line.to_string(), "- \"\"");
        assert_ne!(line.values[0], line.values[1]);
    }

    #[test]
    fn test_document_jagged_array_round_trip() {
        let rows = vec![
            vec![Some("a".to_string()), None],
            vec![],
            vec![Some(String::new())],
        ];
        let doc = WsvDocument::from_jagged_array(rows.clone());
        assert_eq!(doc.as_jagged_array(), rows);
    }

    #[test]
    fn test_document_from_str() {
        let doc: WsvDocument = "a b\nc".parse().unwrap();
        assert_eq!(doc.lines.len(), 2);
        assert_eq!(doc.to_string(), "a b\nc");
    }

    #[test]
    fn test_encoding_tag_defaults_to_utf8() {
        let doc = WsvDocument::new();
        assert_eq!(doc.encoding, WsvEncoding::Utf8);
    }
}
