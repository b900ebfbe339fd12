//! WSV Format Specification
//!
//! This module documents the WSV (Whitespace-Separated Values) format and its
//! companion Binary WSV representation as implemented by this library.
//!
//! # Overview
//!
//! WSV is a human-editable tabular text format. A document is a sequence of
//! lines; a line is a sequence of values separated by whitespace, optionally
//! followed by a `#` comment. Values are strings or null. The format is
//! deliberately small: there are exactly three structural characters (`"`,
//! `#`, `-`), one escape mechanism, and one line terminator.
//!
//! ```text
//! FirstName LastName Age
//! John      Smith    32    # last checked 2024
//! Maria     "van der Berg"  -
//! ```
//!
//! # Lines
//!
//! - The line terminator is `U+000A` (line feed), and only `U+000A`. A
//!   carriage return is ordinary whitespace, so files with CRLF endings parse
//!   with the `\r` as a trailing whitespace run.
//! - A document that ends with a line feed has a final empty line; one that
//!   does not, doesn't. The empty input is a document of one empty line.
//!
//! # Whitespace
//!
//! Any run of the following code points separates values:
//!
//! | Code point | Name |
//! |------------|------|
//! | `U+0009` | Character Tabulation |
//! | `U+000B` | Line Tabulation |
//! | `U+000C` | Form Feed |
//! | `U+000D` | Carriage Return |
//! | `U+0020` | Space |
//! | `U+0085` | Next Line |
//! | `U+00A0` | No-Break Space |
//! | `U+1680` | Ogham Space Mark |
//! | `U+2000`..`U+200A` | En Quad .. Hair Space |
//! | `U+2028` | Line Separator |
//! | `U+2029` | Paragraph Separator |
//! | `U+202F` | Narrow No-Break Space |
//! | `U+205F` | Medium Mathematical Space |
//! | `U+3000` | Ideographic Space |
//!
//! `U+000A` is not in the set; it terminates the line.
//!
//! # Values
//!
//! A **bare value** is any run of code points that are not whitespace, not
//! `U+000A`, not `#`, and not `"`. The single code point `-` as an entire
//! bare token denotes null. A `"` anywhere in a bare value is an error.
//!
//! A **quoted value** starts and ends with `"` and supports two escapes:
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `""`   | a literal `"` |
//! | `"/"`  | a literal line feed |
//!
//! A raw line feed inside a quoted value is an error. After the closing `"`,
//! the next code point must be end of input, a line feed, `#`, or whitespace.
//!
//! Consequences of the grammar:
//!
//! - the empty string can only be written `""`
//! - the one-character string `-` can only be written `"-"`
//! - values containing whitespace, `"`, `#`, or a line feed must be quoted
//!
//! # Comments
//!
//! `#` starts a comment running to the end of the line. The comment text is
//! everything between the `#` and the line feed (or end of input), possibly
//! empty. Comments cannot contain a line feed.
//!
//! # Preserving mode
//!
//! The parser and serializer have a preserving mode that captures each
//! line's exact whitespace runs (one slot before every value, plus an
//! optional trailing slot) and its comment. Serializing a preserving parse
//! reproduces the input bytes. In non-preserving mode only the values
//! survive, and serialization uses a single space between values.
//!
//! When a whitespace slot is absent, serialization uses the default gap:
//! nothing before the first value, one space before every other value, and
//! one space before a comment that follows at least one value.
//!
//! # VarInt56
//!
//! Binary WSV is built on VarInt56, a variable-length unsigned integer
//! holding `0 ..= 2^56 - 1` in 1 to 9 bytes. The number of bytes is signalled
//! by the lowest set bit of the first byte; the high bit of every byte is
//! reserved and must be zero. See [`crate::varint`] for the layout table.
//! Notable properties:
//!
//! - single-byte values `0 ..= 63` encode as `(n << 1) | 1`
//! - there is no 8-byte form; 43-bit values jump to 9 bytes
//! - encoders must emit the shortest form; decoders accept any form
//!
//! # Binary WSV
//!
//! A Binary WSV document is the 5-byte preamble `0x42 0x57 0x53 0x56 0x31`
//! (`"BWSV1"`, magic plus ASCII version) followed by records. Each record
//! starts with a VarInt56 tag:
//!
//! | Tag | Meaning |
//! |-----|---------|
//! | 0 (`0x01`) | line break |
//! | 1 (`0x03`) | null |
//! | 2 (`0x05`) | empty string |
//! | `L >= 3`   | string of `L - 2` bytes of UTF-8 |
//!
//! There is no trailing line break: end of input closes the final line.
//! Whitespace and comments are not represented; binary round trips preserve
//! values only.
//!
//! # Conformance
//!
//! WSV is specified at <https://dev.stenway.com/WSV/>.

// This module contains only documentation; no implementation code
