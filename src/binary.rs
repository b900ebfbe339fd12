//! The Binary WSV codec.
//!
//! Binary WSV is a compact byte-level representation of a WSV document,
//! layered on [VarInt56](crate::varint). A document is a 5-byte preamble
//! (`BWSV` magic plus the ASCII version `1`) followed by a stream of records:
//!
//! - VarInt56 `0` (the byte `0x01`): line break
//! - VarInt56 `1` (the byte `0x03`): null value
//! - VarInt56 `2` (the byte `0x05`): empty string
//! - VarInt56 `L >= 3`: a string value of `L - 2` bytes of UTF-8 payload
//!
//! The stream has no length field; end of input terminates it, and decoding
//! always produces one final line after the last record, so the encoder never
//! emits a trailing line break. An empty document (zero lines, or a single
//! line with zero values) is just the preamble.
//!
//! The null/empty/value tagging inverts the textual convention: in text, null
//! is the bare `-` and the empty string needs quotes; in binary, both are
//! single-byte records with distinct tags, so null and `""` stay distinct
//! through every round trip.
//!
//! ## Usage
//!
//! ```rust
//! use wsv::{binary, WsvDocument};
//!
//! let doc = WsvDocument::parse("a - \"\"").unwrap();
//! let bytes = binary::encode_document(&doc, true).unwrap();
//! assert_eq!(bytes, [0x42, 0x57, 0x53, 0x56, 0x31, 0x07, 0x61, 0x03, 0x05]);
//!
//! let decoded = binary::decode_document(&bytes, true).unwrap();
//! assert_eq!(decoded.as_jagged_array(), doc.as_jagged_array());
//! ```

use crate::document::{WsvDocument, WsvEncoding, WsvLine};
use crate::error::{Error, Result};
use crate::varint;

/// The magic bytes opening a Binary WSV preamble.
pub const MAGIC: [u8; 4] = *b"BWSV";

/// The current format version, as an ASCII byte.
pub const VERSION: u8 = b'1';

/// VarInt56 encoding of 0: the line-break record.
const LINE_BREAK_BYTE: u8 = 0x01;
/// VarInt56 encoding of 1: the null-value record.
const NULL_VALUE_BYTE: u8 = 0x03;
/// VarInt56 encoding of 2: the empty-string record.
const EMPTY_STRING_BYTE: u8 = 0x05;

/// Length tags 0, 1, 2 are reserved for the markers above; a string of `n`
/// payload bytes is tagged `n + 2`.
const STRING_TAG_OFFSET: u64 = 2;

/// Encodes a document as Binary WSV.
///
/// Whitespace and comments are not representable in the binary form and are
/// dropped. Pass `with_preamble = false` to encode a fragment for embedding.
///
/// # Errors
///
/// Returns an error only if a value's length tag exceeds the VarInt56 range,
/// which cannot happen for strings that fit in memory.
pub fn encode_document(document: &WsvDocument, with_preamble: bool) -> Result<Vec<u8>> {
    let mut output: Vec<u8> = Vec::with_capacity(4096);
    if with_preamble {
        output.extend_from_slice(&MAGIC);
        output.push(VERSION);
    }

    for (i, line) in document.lines.iter().enumerate() {
        if i > 0 {
            output.push(LINE_BREAK_BYTE);
        }
        for value in &line.values {
            write_value(&mut output, value.as_deref())?;
        }
    }
    Ok(output)
}

fn write_value(output: &mut Vec<u8>, value: Option<&str>) -> Result<()> {
    match value {
        None => output.push(NULL_VALUE_BYTE),
        Some("") => output.push(EMPTY_STRING_BYTE),
        Some(value) => {
            let tag = value.len() as u64 + STRING_TAG_OFFSET;
            output.extend_from_slice(&varint::encode(tag)?);
            output.extend_from_slice(value.as_bytes());
        }
    }
    Ok(())
}

/// Decodes Binary WSV bytes into a document.
///
/// With `with_preamble = true` the input must start with the 5-byte `BWSV1`
/// preamble; with `false` the records start at byte 0 (used for fragments).
///
/// # Errors
///
/// Returns [`Error::NoBinaryWsvPreamble`] if the magic bytes are missing,
/// [`Error::UnsupportedBinaryWsvVersion`] for any version byte other than
/// `1`, [`Error::CannotFullyReadValue`] when a record's payload is truncated,
/// [`Error::InvalidUtf8`] when a payload is not UTF-8, and VarInt56 errors
/// for malformed tags.
pub fn decode_document(bytes: &[u8], with_preamble: bool) -> Result<WsvDocument> {
    let mut offset = 0;
    if with_preamble {
        if bytes.len() < 5 || bytes[..4] != MAGIC {
            return Err(Error::NoBinaryWsvPreamble);
        }
        if bytes[4] != VERSION {
            return Err(Error::UnsupportedBinaryWsvVersion(bytes[4] as char));
        }
        offset = 5;
    }

    let mut lines = Vec::new();
    let mut values: Vec<Option<String>> = Vec::new();
    while offset < bytes.len() {
        let (tag, length) = varint::decode(bytes, offset)?;
        offset += length;
        match tag {
            0 => lines.push(WsvLine::from_values(std::mem::take(&mut values))),
            1 => values.push(None),
            2 => values.push(Some(String::new())),
            _ => {
                let payload_length = (tag - STRING_TAG_OFFSET) as usize;
                if bytes.len() - offset < payload_length {
                    return Err(Error::CannotFullyReadValue);
                }
                let payload = &bytes[offset..offset + payload_length];
                let value = std::str::from_utf8(payload).map_err(|_| Error::InvalidUtf8)?;
                values.push(Some(value.to_string()));
                offset += payload_length;
            }
        }
    }

    // Input exhaustion closes the last line, so encoders omit the trailing
    // line break.
    lines.push(WsvLine::from_values(values));
    Ok(WsvDocument {
        lines,
        encoding: WsvEncoding::default(),
    })
}
