//! # wsv
//!
//! A library for the WSV (Whitespace-Separated Values) format, with a paired
//! compact Binary WSV representation and its VarInt56 integer codec.
//!
//! ## What is WSV?
//!
//! WSV is a human-editable tabular text format. Values are separated by
//! whitespace, lines by a line feed; `"`-quoting covers the cases bare
//! values cannot express, `#` starts a comment, and a bare `-` is null:
//!
//! ```text
//! FirstName LastName Age
//! John      Smith    32   # last checked 2024
//! Maria     "van der Berg" -
//! ```
//!
//! ## Key Features
//!
//! - **Byte-exact round trips**: the preserving parser captures every
//!   whitespace run and comment, so parse-then-serialize reproduces the
//!   input
//! - **Null-aware**: values are `Option<String>`; null (`-`) and the empty
//!   string (`""`) stay distinct through both the textual and binary forms
//! - **Binary WSV**: a compact byte representation with a `BWSV1` preamble,
//!   built on the VarInt56 variable-length integer codec
//! - **Positioned errors**: every parse error carries the byte index plus
//!   line and position, rendered as `"String not closed (2, 5)"`
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! wsv = "0.1"
//! ```
//!
//! ### Parsing and Serializing
//!
//! ```rust
//! use wsv::WsvDocument;
//!
//! let doc = WsvDocument::parse("a b c\n\"hello world\" -").unwrap();
//! assert_eq!(doc.lines.len(), 2);
//! assert_eq!(doc.lines[1].values, vec![Some("hello world".to_string()), None]);
//!
//! // The preserving round trip is byte-exact.
//! assert_eq!(doc.serialize(), "a b c\n\"hello world\" -");
//! ```
//!
//! ### Binary WSV
//!
//! ```rust
//! use wsv::{from_bytes, to_bytes, WsvDocument};
//!
//! let doc = WsvDocument::parse("a - \"\"").unwrap();
//! let bytes = to_bytes(&doc).unwrap();
//! assert_eq!(&bytes[..5], b"BWSV1");
//!
//! let decoded = from_bytes(&bytes).unwrap();
//! assert_eq!(decoded.lines[0].values, doc.lines[0].values);
//! ```
//!
//! ### Building Documents with the wsv! Macro
//!
//! ```rust
//! use wsv::wsv;
//!
//! let doc = wsv![
//!     ["FirstName", "LastName", "Age"],
//!     ["John", "Smith", "32"],
//!     ["Maria", "van der Berg", null],
//! ];
//! assert_eq!(doc.lines[2].values[2], None);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) single pass, no backtracking
//! - **Serialization**: O(n) over values and preserved whitespace
//! - **Binary encoding**: one VarInt56 length prefix per value; the output
//!   buffer grows amortized O(1)
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API; all failures are [`Error`] values
//! - Decoration setters validate, so a [`WsvLine`] always serializes to
//!   well-formed WSV
//!
//! ## Format Specification
//!
//! See the [`spec`] module for the format description, or
//! <https://dev.stenway.com/WSV/> for the language-independent specification.

pub mod binary;
pub mod chars;
pub mod document;
pub mod error;
pub mod macros;
pub mod parser;
pub mod serializer;
pub mod spec;
pub mod varint;

pub use document::{WsvDocument, WsvEncoding, WsvLine};
pub use error::{Error, ParseErrorKind, Result};
pub use parser::{parse_as_jagged_array, parse_line, parse_line_non_preserving, parse_value};

/// Parses WSV text into a document, preserving whitespace and comments.
///
/// # Examples
///
/// ```rust
/// use wsv::parse;
///
/// let doc = parse("  a  #hi").unwrap();
/// assert_eq!(doc.lines[0].values, vec![Some("a".to_string())]);
/// assert_eq!(doc.lines[0].comment(), Some("hi"));
/// ```
///
/// # Errors
///
/// Returns a parse error with position information on invalid input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<WsvDocument> {
    WsvDocument::parse(input)
}

/// Parses WSV text into a document, keeping only the values.
///
/// # Errors
///
/// Returns a parse error with position information on invalid input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_non_preserving(input: &str) -> Result<WsvDocument> {
    WsvDocument::parse_non_preserving(input)
}

/// Serializes a document, emitting preserved whitespace and comments.
///
/// # Examples
///
/// ```rust
/// use wsv::{parse, to_string};
///
/// let input = "a  b #c";
/// let doc = parse(input).unwrap();
/// assert_eq!(to_string(&doc), input);
/// ```
#[must_use]
pub fn to_string(document: &WsvDocument) -> String {
    document.serialize()
}

/// Serializes only the values of a document, one space between values.
///
/// # Examples
///
/// ```rust
/// use wsv::{parse, to_string_non_preserving};
///
/// let doc = parse("a  b #c").unwrap();
/// assert_eq!(to_string_non_preserving(&doc), "a b");
/// ```
#[must_use]
pub fn to_string_non_preserving(document: &WsvDocument) -> String {
    document.serialize_non_preserving()
}

/// Encodes a document as Binary WSV with the `BWSV1` preamble.
///
/// # Errors
///
/// Returns an error only if a value is too long for a VarInt56 length
/// prefix, which cannot happen for strings that fit in memory.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_bytes(document: &WsvDocument) -> Result<Vec<u8>> {
    document.to_binary()
}

/// Decodes a Binary WSV byte sequence with the `BWSV1` preamble.
///
/// # Errors
///
/// Returns an error if the preamble is missing, the version is not
/// supported, or a record is malformed or truncated.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_bytes(bytes: &[u8]) -> Result<WsvDocument> {
    WsvDocument::from_binary(bytes)
}
