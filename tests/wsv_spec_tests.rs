//! Scenario tests pinning the observable behavior of the format: concrete
//! inputs, their parsed values, and their exact serialized and encoded
//! forms.

use wsv::{
    binary, from_bytes, parse, parse_as_jagged_array, to_bytes, to_string,
    to_string_non_preserving, varint, Error, WsvDocument,
};

fn owned(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|v| v.map(str::to_string)).collect()
}

#[test]
fn test_three_bare_values() {
    let doc = parse("a b c").unwrap();
    assert_eq!(doc.lines[0].values, owned(&[Some("a"), Some("b"), Some("c")]));
    assert_eq!(to_string_non_preserving(&doc), "a b c");
}

#[test]
fn test_empty_dash_and_null() {
    let doc = parse("\"\" \"-\" -").unwrap();
    assert_eq!(doc.lines[0].values, owned(&[Some(""), Some("-"), None]));
    assert_eq!(to_string_non_preserving(&doc), "\"\" \"-\" -");
}

#[test]
fn test_escape_sequences() {
    let doc = parse("a \"b\"\"c\" \"d\"/\"e\"").unwrap();
    assert_eq!(
        doc.lines[0].values,
        owned(&[Some("a"), Some("b\"c"), Some("d\ne")])
    );
    assert_eq!(to_string_non_preserving(&doc), "a \"b\"\"c\" \"d\"/\"e\"");
}

#[test]
fn test_preserving_comment_scenario() {
    let doc = parse("  a  #hi").unwrap();
    let line = &doc.lines[0];
    assert_eq!(line.values, owned(&[Some("a")]));
    assert_eq!(
        line.whitespaces(),
        Some(&[Some("  ".to_string()), Some("  ".to_string())][..])
    );
    assert_eq!(line.comment(), Some("hi"));
    assert_eq!(to_string(&doc), "  a  #hi");
}

#[test]
fn test_varint_reference_encodings() {
    assert_eq!(varint::encode(0).unwrap(), vec![0x01]);
    assert_eq!(varint::encode(63).unwrap(), vec![0x7F]);

    let two = varint::encode(64).unwrap();
    assert_eq!(two.len(), 2);
    assert_eq!(two[0] & 0x03, 0b10);

    let max = varint::encode(varint::MAX).unwrap();
    assert_eq!(max.len(), 9);
    assert_eq!(max[0], 0x00);
}

#[test]
fn test_binary_reference_encoding() {
    let doc = WsvDocument::from_jagged_array(vec![owned(&[Some("a"), None, Some("")])]);
    let bytes = to_bytes(&doc).unwrap();
    assert_eq!(
        bytes,
        [0x42, 0x57, 0x53, 0x56, 0x31, 0x07, 0x61, 0x03, 0x05]
    );

    let decoded = from_bytes(&bytes).unwrap();
    assert_eq!(decoded.lines[0].values, owned(&[Some("a"), None, Some("")]));
}

// Boundary cases.

#[test]
fn test_empty_input_parses_to_one_empty_line() {
    let doc = parse("").unwrap();
    assert_eq!(doc.lines.len(), 1);
    assert!(doc.lines[0].values.is_empty());
    assert_eq!(to_string(&doc), "");
}

#[test]
fn test_single_hash_is_an_empty_comment() {
    let doc = parse("#").unwrap();
    assert_eq!(doc.lines.len(), 1);
    assert!(doc.lines[0].values.is_empty());
    assert_eq!(doc.lines[0].comment(), Some(""));
    assert_eq!(to_string(&doc), "#");
}

#[test]
fn test_trailing_line_feed_adds_terminal_empty_line() {
    let doc = parse("a\n").unwrap();
    assert_eq!(doc.lines.len(), 2);
    assert!(doc.lines[1].values.is_empty());
    assert_eq!(to_string(&doc), "a\n");
}

#[test]
fn test_quoted_string_closing_at_end_of_input() {
    let doc = parse("a \"b\"").unwrap();
    assert_eq!(doc.lines[0].values, owned(&[Some("a"), Some("b")]));
}

#[test]
fn test_truncated_varint_is_rejected() {
    assert_eq!(varint::decode(&[0x04, 0x01], 0), Err(Error::InvalidVarInt56));
    assert_eq!(varint::decode(&[0x02], 0), Err(Error::InvalidVarInt56));
}

#[test]
fn test_binary_empty_payload_after_preamble() {
    let doc = binary::decode_document(b"BWSV1", true).unwrap();
    assert_eq!(doc.lines.len(), 1);
    assert!(doc.lines[0].values.is_empty());
}

#[test]
fn test_jagged_array_shortcut_matches_non_preserving_parse() {
    let input = "a b #c\n\n- \"\"";
    let rows = parse_as_jagged_array(input).unwrap();
    let doc = wsv::parse_non_preserving(input).unwrap();
    assert_eq!(rows, doc.as_jagged_array());
}
