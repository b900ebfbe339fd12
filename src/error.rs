//! Error types for WSV parsing, validation, and the binary codecs.
//!
//! This module provides one [`Error`] enum covering every failure the crate
//! can report, with machine-readable context where it exists.
//!
//! ## Error Categories
//!
//! - **Parse errors**: invalid WSV syntax, reported with the byte index into
//!   the input plus zero-based line index and line position
//! - **Validation errors**: rejected whitespace or comment strings on the
//!   [`WsvLine`](crate::WsvLine) setters
//! - **VarInt56 errors**: malformed or truncated variable-length integers
//! - **Binary WSV errors**: missing preamble, unsupported version, truncated
//!   value records
//! - **API misuse**: single-line or single-value parses handed the wrong
//!   shape of input
//!
//! ## Examples
//!
//! ```rust
//! use wsv::{parse, Error};
//!
//! let result = parse("\"not closed");
//! match result {
//!     Err(Error::Parse { line_index, line_position, .. }) => {
//!         assert_eq!(line_index, 0);
//!         assert_eq!(line_position, 11);
//!     }
//!     _ => panic!("expected a parse error"),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// The kind of a textual parse error.
///
/// Each kind corresponds to one way the WSV grammar can be violated; the
/// position information lives on [`Error::Parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// End of input or a raw line feed inside a quoted string.
    StringNotClosed,
    /// `"/` inside a quoted string not followed by `"`.
    InvalidStringLineBreak,
    /// The closing `"` of a quoted string followed by a code point that is
    /// not end of input, a line feed, `#`, whitespace, or an escape start.
    InvalidCharacterAfterString,
    /// A `"` inside a bare value.
    InvalidDoubleQuoteInValue,
}

impl ParseErrorKind {
    /// The human-readable message for this kind, without position suffix.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            ParseErrorKind::StringNotClosed => "String not closed",
            ParseErrorKind::InvalidStringLineBreak => "Invalid string line break",
            ParseErrorKind::InvalidCharacterAfterString => "Invalid character after string",
            ParseErrorKind::InvalidDoubleQuoteInValue => "Invalid double quote in value",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Represents all possible errors that can occur while parsing, validating,
/// or encoding WSV data.
///
/// Parse errors carry the byte index into the input and the zero-based line
/// index and line position; the rendered message appends one-based
/// coordinates in the form `"<message> (<line>, <position>)"`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Textual parse error with position information.
    #[error("{} ({}, {})", .kind, .line_index + 1, .line_position + 1)]
    Parse {
        kind: ParseErrorKind,
        /// Byte index into the parsed input.
        index: usize,
        /// Zero-based line index (including any caller-supplied offset).
        line_index: usize,
        /// Zero-based position within the line, counted in characters.
        line_position: usize,
    },

    /// A whitespace slot contains a code point outside the WSV whitespace set.
    #[error("Invalid character in whitespace string")]
    InvalidWhitespace,

    /// A non-leading whitespace slot is the empty string.
    #[error("Non-leading whitespace string cannot be empty")]
    EmptyWhitespace,

    /// A comment contains a line feed.
    #[error("Line feed in comment is not allowed")]
    LineFeedInComment,

    /// A single-line parse was handed input containing a line feed.
    #[error("Multiple lines not allowed")]
    MultipleLinesNotAllowed,

    /// A single-value parse found no value.
    #[error("No value")]
    NoValue,

    /// A single-value parse found more than one value.
    #[error("Multiple values")]
    MultipleValues,

    /// A VarInt56 encoding is malformed: the high bit is set in one of its
    /// bytes, or the input ends before the signalled length.
    #[error("Invalid VarInt56")]
    InvalidVarInt56,

    /// An offset points outside the buffer, or the buffer cannot hold the
    /// encoding.
    #[error("Offset is out of range")]
    OffsetOutOfRange,

    /// A value above 2^56 - 1 was handed to the VarInt56 encoder.
    #[error("Value is out of VarInt56 range")]
    VarIntValueOutOfRange,

    /// Binary input does not start with the `BWSV` magic bytes.
    #[error("Document does not have a BinaryWSV preamble")]
    NoBinaryWsvPreamble,

    /// The preamble version byte is not `1`.
    #[error("Unsupported BinaryWSV version '{0}'")]
    UnsupportedBinaryWsvVersion(char),

    /// A binary value record signals more payload bytes than remain.
    #[error("Cannot fully read string value")]
    CannotFullyReadValue,

    /// A binary value record's payload is not valid UTF-8.
    #[error("String value is not valid UTF-8")]
    InvalidUtf8,
}

impl Error {
    /// Creates a parse error at the given scanner position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wsv::{Error, ParseErrorKind};
    ///
    /// let err = Error::parse(ParseErrorKind::StringNotClosed, 12, 2, 4);
    /// assert_eq!(err.to_string(), "String not closed (3, 5)");
    /// ```
    #[must_use]
    pub const fn parse(
        kind: ParseErrorKind,
        index: usize,
        line_index: usize,
        line_position: usize,
    ) -> Self {
        Error::Parse {
            kind,
            index,
            line_index,
            line_position,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
