//! WSV parsing.
//!
//! This module provides the tokenizer that turns WSV text into the document
//! model, in two modes:
//!
//! - **Preserving**: captures the whitespace run before every value, an
//!   optional trailing run, and the trailing comment, so the serializer can
//!   reproduce the input
//! - **Non-preserving**: keeps only the values
//!
//! Parsing is single-pass, left to right, with no backtracking. Every error
//! carries the byte index into the input plus the zero-based line index and
//! line position where the scanner stopped.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root or the
//! methods on [`WsvDocument`]:
//!
//! ```rust
//! use wsv::WsvDocument;
//!
//! let doc = WsvDocument::parse("a \"b\"\"c\" -").unwrap();
//! assert_eq!(doc.lines[0].values, vec![
//!     Some("a".to_string()),
//!     Some("b\"c".to_string()),
//!     None,
//! ]);
//! ```

use crate::chars;
use crate::document::{WsvDocument, WsvEncoding, WsvLine};
use crate::error::{Error, ParseErrorKind, Result};

/// Parses WSV text into a document, preserving whitespace and comments.
///
/// `line_index_offset` adjusts the line index reported in errors, for callers
/// parsing a fragment of a larger document.
///
/// # Errors
///
/// Returns a parse error with position information on invalid input.
pub fn parse_document(input: &str, line_index_offset: usize) -> Result<WsvDocument> {
    let mut scanner = Scanner::new(input, line_index_offset);
    let mut lines = Vec::new();
    loop {
        let (line, terminated) = scanner.parse_line_preserving()?;
        lines.push(line);
        if !terminated {
            break;
        }
    }
    Ok(WsvDocument {
        lines,
        encoding: WsvEncoding::default(),
    })
}

/// Parses WSV text into a document, keeping only the values.
///
/// # Errors
///
/// Returns a parse error with position information on invalid input.
pub fn parse_document_non_preserving(input: &str, line_index_offset: usize) -> Result<WsvDocument> {
    let rows = parse_jagged(input, line_index_offset)?;
    Ok(WsvDocument {
        lines: rows.into_iter().map(WsvLine::from_values).collect(),
        encoding: WsvEncoding::default(),
    })
}

/// Parses WSV text into rows of values, without constructing line objects.
///
/// Semantics are identical to a non-preserving parse.
///
/// # Examples
///
/// ```rust
/// use wsv::parse_as_jagged_array;
///
/// let rows = parse_as_jagged_array("a b\n-").unwrap();
/// assert_eq!(rows, vec![
///     vec![Some("a".to_string()), Some("b".to_string())],
///     vec![None],
/// ]);
/// ```
///
/// # Errors
///
/// Returns a parse error with position information on invalid input.
pub fn parse_as_jagged_array(input: &str) -> Result<Vec<Vec<Option<String>>>> {
    parse_jagged(input, 0)
}

fn parse_jagged(input: &str, line_index_offset: usize) -> Result<Vec<Vec<Option<String>>>> {
    let mut scanner = Scanner::new(input, line_index_offset);
    let mut rows = Vec::new();
    loop {
        let (values, terminated) = scanner.parse_line_values()?;
        rows.push(values);
        if !terminated {
            break;
        }
    }
    Ok(rows)
}

/// Parses a single WSV line, preserving whitespace and comment.
///
/// # Errors
///
/// Returns [`Error::MultipleLinesNotAllowed`] if the input contains a line
/// feed, or any parse error of the grammar.
pub fn parse_line(input: &str) -> Result<WsvLine> {
    require_single_line(input)?;
    let (line, _) = Scanner::new(input, 0).parse_line_preserving()?;
    Ok(line)
}

/// Parses a single WSV line, keeping only the values.
///
/// # Errors
///
/// Same error conditions as [`parse_line`].
pub fn parse_line_non_preserving(input: &str) -> Result<WsvLine> {
    require_single_line(input)?;
    let (values, _) = Scanner::new(input, 0).parse_line_values()?;
    Ok(WsvLine::from_values(values))
}

/// Parses exactly one WSV value.
///
/// # Examples
///
/// ```rust
/// use wsv::{parse_value, Error};
///
/// assert_eq!(parse_value("\"a b\"").unwrap(), Some("a b".to_string()));
/// assert_eq!(parse_value("-").unwrap(), None);
/// assert_eq!(parse_value(""), Err(Error::NoValue));
/// assert_eq!(parse_value("a b"), Err(Error::MultipleValues));
/// ```
///
/// # Errors
///
/// Returns [`Error::NoValue`] if the input holds no value,
/// [`Error::MultipleValues`] if it holds more than one,
/// [`Error::MultipleLinesNotAllowed`] if it spans lines, or any parse error
/// of the grammar.
pub fn parse_value(input: &str) -> Result<Option<String>> {
    require_single_line(input)?;
    let (mut values, _) = Scanner::new(input, 0).parse_line_values()?;
    match values.len() {
        0 => Err(Error::NoValue),
        1 => Ok(values.pop().unwrap_or_default()),
        _ => Err(Error::MultipleValues),
    }
}

fn require_single_line(input: &str) -> Result<()> {
    if input.contains('\n') {
        Err(Error::MultipleLinesNotAllowed)
    } else {
        Ok(())
    }
}

/// Cursor over the input with position tracking for error reports.
struct Scanner<'a> {
    input: &'a str,
    position: usize,
    line_index: usize,
    line_position: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, line_index_offset: usize) -> Self {
        Scanner {
            input,
            position: 0,
            line_index: line_index_offset,
            line_position: 0,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line_index += 1;
            self.line_position = 0;
        } else {
            self.line_position += 1;
        }
        Some(ch)
    }

    fn error(&self, kind: ParseErrorKind) -> Error {
        Error::parse(kind, self.position, self.line_index, self.line_position)
    }

    /// Parses one line with decoration. Returns the line and whether a line
    /// feed terminated it (false at end of input).
    fn parse_line_preserving(&mut self) -> Result<(WsvLine, bool)> {
        let mut values: Vec<Option<String>> = Vec::new();
        let mut whitespaces: Vec<Option<String>> = Vec::new();
        let mut comment: Option<String> = None;
        let mut terminated = false;

        loop {
            let whitespace = self.read_whitespace();
            match self.peek_char() {
                None => {
                    if whitespace.is_some() {
                        whitespaces.push(whitespace.map(str::to_string));
                    }
                    break;
                }
                Some('\n') => {
                    if whitespace.is_some() {
                        whitespaces.push(whitespace.map(str::to_string));
                    }
                    self.next_char();
                    terminated = true;
                    break;
                }
                Some('#') => {
                    // The slot before the comment is recorded even when no
                    // whitespace was present, so re-serialization does not
                    // inject a default gap.
                    whitespaces.push(whitespace.map(str::to_string));
                    self.next_char();
                    comment = Some(self.read_comment().to_string());
                    if self.peek_char() == Some('\n') {
                        self.next_char();
                        terminated = true;
                    }
                    break;
                }
                Some('"') => {
                    whitespaces.push(whitespace.map(str::to_string));
                    values.push(Some(self.read_quoted()?));
                }
                Some(_) => {
                    whitespaces.push(whitespace.map(str::to_string));
                    values.push(self.read_bare()?);
                }
            }
        }

        let whitespaces = if whitespaces.is_empty() {
            None
        } else {
            Some(whitespaces)
        };
        Ok((
            WsvLine::from_parts_unchecked(values, whitespaces, comment),
            terminated,
        ))
    }

    /// Parses one line, discarding whitespace and comment.
    fn parse_line_values(&mut self) -> Result<(Vec<Option<String>>, bool)> {
        let mut values: Vec<Option<String>> = Vec::new();
        let mut terminated = false;

        loop {
            self.read_whitespace();
            match self.peek_char() {
                None => break,
                Some('\n') => {
                    self.next_char();
                    terminated = true;
                    break;
                }
                Some('#') => {
                    self.next_char();
                    self.read_comment();
                    if self.peek_char() == Some('\n') {
                        self.next_char();
                        terminated = true;
                    }
                    break;
                }
                Some('"') => values.push(Some(self.read_quoted()?)),
                Some(_) => values.push(self.read_bare()?),
            }
        }

        Ok((values, terminated))
    }

    /// Consumes a run of WSV whitespace, returning it verbatim (or `None` if
    /// the run is empty).
    fn read_whitespace(&mut self) -> Option<&'a str> {
        let start = self.position;
        while matches!(self.peek_char(), Some(ch) if chars::is_whitespace(ch)) {
            self.next_char();
        }
        if self.position == start {
            None
        } else {
            Some(&self.input[start..self.position])
        }
    }

    /// Consumes comment text up to (not including) a line feed or end of
    /// input. The leading `#` has already been consumed.
    fn read_comment(&mut self) -> &'a str {
        let start = self.position;
        while matches!(self.peek_char(), Some(ch) if ch != '\n') {
            self.next_char();
        }
        &self.input[start..self.position]
    }

    /// Consumes a quoted string, resolving the `""`, `"/"` escapes.
    fn read_quoted(&mut self) -> Result<String> {
        self.next_char(); // opening quote
        let mut value = String::new();
        loop {
            match self.peek_char() {
                // Raw line feeds cannot appear inside a quoted string; the
                // error points at the line feed itself.
                None | Some('\n') => return Err(self.error(ParseErrorKind::StringNotClosed)),
                Some('"') => {
                    self.next_char();
                    match self.peek_char() {
                        Some('"') => {
                            self.next_char();
                            value.push('"');
                        }
                        Some('/') => {
                            self.next_char();
                            if self.peek_char() == Some('"') {
                                self.next_char();
                                value.push('\n');
                            } else {
                                return Err(self.error(ParseErrorKind::InvalidStringLineBreak));
                            }
                        }
                        None | Some('\n') | Some('#') => return Ok(value),
                        Some(ch) if chars::is_whitespace(ch) => return Ok(value),
                        Some(_) => {
                            return Err(self.error(ParseErrorKind::InvalidCharacterAfterString))
                        }
                    }
                }
                Some(ch) => {
                    self.next_char();
                    value.push(ch);
                }
            }
        }
    }

    /// Consumes a bare value. The single code point `-` denotes null.
    fn read_bare(&mut self) -> Result<Option<String>> {
        let start = self.position;
        loop {
            match self.peek_char() {
                None | Some('\n') | Some('#') => break,
                Some('"') => return Err(self.error(ParseErrorKind::InvalidDoubleQuoteInValue)),
                Some(ch) if chars::is_whitespace(ch) => break,
                Some(_) => {
                    self.next_char();
                }
            }
        }
        let token = &self.input[start..self.position];
        if token == "-" {
            Ok(None)
        } else {
            Ok(Some(token.to_string()))
        }
    }
}
