//! Character classification for the WSV format.
//!
//! WSV recognizes a fixed set of whitespace code points as value separators.
//! The set deliberately excludes `U+000A` (line feed), which is the line
//! terminator and never plain whitespace.

use crate::{Error, Result};

/// Returns `true` if `ch` is a WSV whitespace code point.
///
/// The WSV whitespace set is exactly:
/// `U+0009`, `U+000B`, `U+000C`, `U+000D`, `U+0020`, `U+0085`, `U+00A0`,
/// `U+1680`, `U+2000`–`U+200A`, `U+2028`, `U+2029`, `U+202F`, `U+205F`,
/// `U+3000`.
///
/// `U+000A` (line feed) is **not** whitespace; it terminates a line.
///
/// # Examples
///
/// ```rust
/// use wsv::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\t'));
/// assert!(is_whitespace('\u{3000}'));
/// assert!(!is_whitespace('\n'));
/// assert!(!is_whitespace('a'));
/// ```
#[inline]
#[must_use]
pub const fn is_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{0085}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Returns `true` if `ch` forces a value into the quoted form.
///
/// A value containing a double quote, a `#`, a line feed, or any WSV
/// whitespace code point cannot be written bare.
#[inline]
#[must_use]
pub const fn is_special(ch: char) -> bool {
    matches!(ch, '"' | '#' | '\n') || is_whitespace(ch)
}

/// Validates a single whitespace string for a [`WsvLine`](crate::WsvLine)
/// whitespace slot.
///
/// A slot must consist entirely of WSV whitespace code points, and every slot
/// but the leading one must be non-empty. The leading slot may be `""`
/// because a line may start with a value in column zero.
///
/// # Errors
///
/// Returns [`Error::EmptyWhitespace`] for an empty non-leading slot and
/// [`Error::InvalidWhitespace`] when any code point is outside the WSV
/// whitespace set.
pub fn validate_whitespace_string(value: &str, is_first: bool) -> Result<()> {
    if value.is_empty() {
        if is_first {
            return Ok(());
        }
        return Err(Error::EmptyWhitespace);
    }
    if value.chars().all(is_whitespace) {
        Ok(())
    } else {
        Err(Error::InvalidWhitespace)
    }
}

/// Validates a comment string: comments span a single line and therefore
/// cannot contain `U+000A`.
///
/// # Errors
///
/// Returns [`Error::LineFeedInComment`] when the text contains a line feed.
pub fn validate_comment(value: &str) -> Result<()> {
    if value.contains('\n') {
        Err(Error::LineFeedInComment)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_set() {
        let whitespace = [
            '\u{0009}', '\u{000B}', '\u{000C}', '\u{000D}', '\u{0020}', '\u{0085}', '\u{00A0}',
            '\u{1680}', '\u{2000}', '\u{2005}', '\u{200A}', '\u{2028}', '\u{2029}', '\u{202F}',
            '\u{205F}', '\u{3000}',
        ];
        for ch in whitespace {
            assert!(is_whitespace(ch), "U+{:04X} should be whitespace", ch as u32);
        }

        assert!(!is_whitespace('\n'));
        assert!(!is_whitespace('\u{200B}')); // zero width space is not in the set
        assert!(!is_whitespace('x'));
    }

    #[test]
    fn test_special_characters() {
        assert!(is_special('"'));
        assert!(is_special('#'));
        assert!(is_special('\n'));
        assert!(is_special(' '));
        assert!(!is_special('-'));
        assert!(!is_special('/'));
        assert!(!is_special('a'));
    }

    #[test]
    fn test_validate_whitespace_string() {
        assert!(validate_whitespace_string("", true).is_ok());
        assert!(validate_whitespace_string("", false).is_err());
        assert!(validate_whitespace_string("  \t", false).is_ok());
        assert!(validate_whitespace_string(" a ", false).is_err());
        assert!(validate_whitespace_string("\n", false).is_err());
    }

    #[test]
    fn test_validate_comment() {
        assert!(validate_comment("").is_ok());
        assert!(validate_comment("a comment").is_ok());
        assert!(validate_comment("broken\ncomment").is_err());
    }
}
