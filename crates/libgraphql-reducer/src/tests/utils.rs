//! Shared helpers for the reducer tests.

use crate::ast;
use crate::GraphQLParseError;
use crate::GraphQLParser;
use crate::MatchResult;
use crate::Node;
use crate::Record;
use crate::Scalar;

/// Parses `source`, panicking with the detailed diagnostic on failure.
pub fn parse_ok(source: &str) -> ast::Document {
    GraphQLParser::new(source)
        .parse_document()
        .unwrap_or_else(|err| panic!("{}", err.format_detailed(Some(source))))
}

/// Parses `source`, panicking if it unexpectedly succeeds.
pub fn parse_err(source: &str) -> GraphQLParseError {
    match GraphQLParser::new(source).parse_document() {
        Ok(doc) => panic!("Expected a parse error, got: {doc:?}"),
        Err(err) => err,
    }
}

/// Parses `source` and returns its only definition.
pub fn only_definition(source: &str) -> Node {
    let doc = parse_ok(source);
    assert_eq!(doc.definitions.len(), 1, "definitions: {:?}", doc.definitions);
    doc.definitions.into_iter().next().unwrap()
}

/// Parses `source` and renders the whole document as JSON.
pub fn to_json(source: &str) -> serde_json::Value {
    serde_json::to_value(parse_ok(source)).unwrap()
}

/// Parses a one-selection operation and returns its first field.
pub fn first_selection(source: &str) -> Node {
    let operation = only_definition(source);
    match operation.get("selections") {
        Some(MatchResult::Sequence(selections)) => match selections.first() {
            Some(MatchResult::Node(node)) => node.clone(),
            other => panic!("Expected a selection node, got: {other:?}"),
        },
        other => panic!("Expected selections, got: {other:?}"),
    }
}

/// The value of argument `name` of the first selection of `source`.
pub fn first_arg_value(source: &str, name: &str) -> MatchResult {
    let field = first_selection(source);
    field
        .get("arguments")
        .and_then(|args| args.get(name))
        .cloned()
        .unwrap_or_else(|| panic!("No argument `{name}` in {field:?}"))
}

pub fn string(value: &str) -> MatchResult {
    MatchResult::string(value)
}

pub fn int(value: i64) -> MatchResult {
    MatchResult::Scalar(Scalar::Int(value))
}

/// Builds a `Record` result from `(key, value)` pairs.
pub fn record<const N: usize>(entries: [(&str, MatchResult); N]) -> MatchResult {
    MatchResult::Record(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect::<Record>(),
    )
}
