//! Tests for syntax and reduction errors reported by `GraphQLParser`, and
//! for their rendering.

use crate::tests::utils::parse_err;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParser;
use crate::GraphQLSourceSpan;
use crate::GraphQLStringParsingError;
use crate::ReduceError;
use crate::Rule;
use crate::SourcePosition;
use crate::ValueParsingError;

// =============================================================================
// Syntax errors
// =============================================================================

/// An empty document has no definitions and is rejected.
#[test]
fn empty_document_is_rejected() {
    for source in ["", "   \n", "# only a comment"] {
        let err = parse_err(source);
        assert!(
            matches!(err.kind(), GraphQLParseErrorKind::UnexpectedEof { .. }),
            "{source:?}: {err:?}",
        );
    }
}

#[test]
fn unterminated_selection_set() {
    let err = parse_err("query {\n  hero {\n    name\n");
    assert!(matches!(err.kind(), GraphQLParseErrorKind::UnexpectedEof { .. }));
    assert_eq!(err.message(), "Unexpected end of input");
}

#[test]
fn missing_colon_in_field_definition() {
    let err = parse_err("type User { name String }");
    match err.kind() {
        GraphQLParseErrorKind::UnexpectedToken { found, .. } => assert_eq!(found, "String"),
        other => panic!("Expected UnexpectedToken, got: {other:?}"),
    }
    assert_eq!(err.span().start_inclusive.line(), 0);
    assert_eq!(err.span().start_inclusive.col_utf8(), 17);
}

#[test]
fn trailing_closing_brace() {
    let err = parse_err("query { a } }");
    match err.kind() {
        GraphQLParseErrorKind::UnexpectedToken { found, expected } => {
            assert_eq!(found, "}");
            assert!(!expected.is_empty());
        },
        other => panic!("Expected UnexpectedToken, got: {other:?}"),
    }
    assert!(
        err.notes()
            .iter()
            .any(|note| note.kind == GraphQLErrorNoteKind::General
                && note.message.starts_with("expected ")),
        "notes: {:?}",
        err.notes(),
    );
}

#[test]
fn leading_zero_int_is_rejected() {
    assert!(crate::parse("{ f(x: 007) }").is_err());
}

#[test]
fn variables_are_rejected_in_const_positions() {
    assert!(crate::parse("type T { f(a: Int = $v): Int }").is_err());
    assert!(crate::parse("query Q($a: Int = $b) { a }").is_err());
}

/// Descriptions belong to definitions, not to extensions.
#[test]
fn described_extension_is_rejected() {
    assert!(crate::parse("extend \"docs\" type T { a: Int }").is_err());
}

// =============================================================================
// Reduction errors
// =============================================================================

#[test]
fn integer_overflow_is_an_invalid_value() {
    let err = parse_err("{ f(x: 99999999999999999999) }");
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::InvalidValue(ValueParsingError::Int(
            "99999999999999999999".to_string(),
        )),
    );
    assert_eq!(err.span().start_inclusive.col_utf8(), 7);
    assert_eq!(err.span().end_exclusive.col_utf8(), 27);
}

#[test]
fn infinite_float_is_an_invalid_value() {
    let err = parse_err("{ f(x: 1e400) }");
    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::InvalidValue(ValueParsingError::Float(_)),
    ));
}

#[test]
fn bad_escape_sequence_is_an_invalid_value() {
    let err = parse_err(r#"{ f(x: "a\qb") }"#);
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::InvalidValue(ValueParsingError::String(
            GraphQLStringParsingError::InvalidEscapeSequence("\\q".to_string()),
        )),
    );
}

/// Duplicate properties within one node are contract violations and carry a
/// help note.
#[test]
fn reduction_contract_violation_is_reported() {
    let span = GraphQLSourceSpan::new(SourcePosition::new(0, 0, 0, 0), SourcePosition::new(0, 4, 4, 4));
    let err = GraphQLParseError::from_reduce_error(
        ReduceError::DuplicateKey {
            rule: Rule::field,
            key: "name".to_string(),
        },
        span,
    );
    assert!(matches!(err.kind(), GraphQLParseErrorKind::Reduction(_)));
    assert!(err.message().contains("duplicate key `name`"));
    assert_eq!(err.notes().len(), 1);
    assert_eq!(err.notes()[0].kind, GraphQLErrorNoteKind::Help);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn oneline_format_uses_one_based_positions() {
    let err = parse_err("type User {\n  name String\n}");
    assert!(
        err.format_oneline().starts_with("<input>:2:8: error: Unexpected `String`"),
        "{}",
        err.format_oneline(),
    );
    assert_eq!(err.to_string(), err.format_oneline());
}

#[test]
fn file_path_is_reported() {
    let err = GraphQLParser::new("scalar")
        .with_file_path("schema.graphql")
        .parse_document()
        .unwrap_err();
    assert!(err.format_oneline().starts_with("schema.graphql:1:"));
}

#[test]
fn detailed_format_includes_snippet_and_notes() {
    let source = "type User {\n  name String\n}";
    let err = parse_err(source);
    let detailed = err.format_detailed(Some(source));

    assert!(detailed.starts_with("error: Unexpected `String`\n"), "{detailed}");
    assert!(detailed.contains("  --> <input>:2:8\n"), "{detailed}");
    assert!(detailed.contains(" 2 |   name String\n"), "{detailed}");
    assert!(detailed.contains("|        ^"), "{detailed}");
    assert!(detailed.contains("= note: expected "), "{detailed}");
}

#[test]
fn detailed_format_without_source() {
    let err = parse_err("scalar");
    let detailed = err.format_detailed(None);
    assert!(detailed.starts_with("error: Unexpected end of input\n"));
    assert!(!detailed.contains('|'));
}
