use wsv::{wsv, WsvDocument};

#[test]
fn test_empty_document() {
    let doc = wsv![];
    assert_eq!(doc, WsvDocument::new());
    assert_eq!(doc.serialize(), "");
}

#[test]
fn test_single_row() {
    let doc = wsv![["a", "b", "c"]];
    assert_eq!(doc.serialize(), "a b c");
}

#[test]
fn test_null_and_empty_values() {
    let doc = wsv![["a", null, ""]];
    assert_eq!(
        doc.lines[0].values,
        vec![Some("a".to_string()), None, Some(String::new())]
    );
    assert_eq!(doc.serialize(), "a - \"\"");
}

#[test]
fn test_empty_rows_become_empty_lines() {
    let doc = wsv![["a"], [], ["b"]];
    assert_eq!(doc.serialize(), "a\n\nb");
}

#[test]
fn test_values_needing_quotes_are_escaped_on_serialize() {
    let doc = wsv![["two words", "-", "say \"hi\""]];
    assert_eq!(
        doc.serialize(),
        "\"two words\" \"-\" \"say \"\"hi\"\"\""
    );
}

#[test]
fn test_trailing_commas_accepted() {
    let doc = wsv![["a", "b",], ["c"],];
    assert_eq!(doc.lines.len(), 2);
}
