//! Tests for selection assembly.

use crate::tests::utils::first_selection;
use crate::tests::utils::only_definition;
use crate::MatchResult;
use crate::NodeKind;
use serde_json::json;

#[test]
fn field_with_alias_arguments_directives_and_selections() {
    let field = first_selection("{ smallPic: picture(size: 64) @include(if: $big) { url } }");
    assert_eq!(
        serde_json::to_value(&field).unwrap(),
        json!({
            "kind": "field",
            "node": {
                "alias": "smallPic",
                "name": "picture",
                "arguments": {"size": 64},
                "directives": [{"name": "include", "arguments": {"if": {"variable": "big"}}}],
                "selections": [{"kind": "field", "node": {"name": "url"}}],
            },
        }),
    );
}

#[test]
fn fragment_spread() {
    let spread = first_selection("{ ...UserFields @skip(if: true) }");
    assert_eq!(
        serde_json::to_value(&spread).unwrap(),
        json!({
            "kind": "fragment_spread",
            "node": {
                "name": "UserFields",
                "directives": [{"name": "skip", "arguments": {"if": true}}],
            },
        }),
    );
}

/// `...on` only starts an inline fragment when `on` is a whole keyword.
#[test]
fn fragment_spread_named_like_the_on_keyword() {
    let spread = first_selection("{ ...onboarding }");
    assert_eq!(spread.kind, NodeKind::FragmentSpread);
    assert_eq!(spread.name(), Some("onboarding"));
}

#[test]
fn inline_fragment_with_type_condition() {
    let inline = first_selection("{ ... on Droid { primaryFunction } }");
    assert_eq!(
        serde_json::to_value(&inline).unwrap(),
        json!({
            "kind": "inline_fragment",
            "node": {
                "on": "Droid",
                "selections": [{"kind": "field", "node": {"name": "primaryFunction"}}],
            },
        }),
    );
}

#[test]
fn inline_fragment_without_type_condition() {
    let inline = first_selection("{ ... @include(if: $expanded) { name } }");
    assert_eq!(inline.kind, NodeKind::InlineFragment);
    assert_eq!(inline.get("on"), None);
    assert!(inline.get("directives").is_some());
}

/// Selections keep declaration order, including mixed selection kinds.
#[test]
fn selection_order_is_preserved() {
    let operation = only_definition("{ b ...F a ... on T { c } }");
    let kinds: Vec<NodeKind> = operation
        .get("selections")
        .and_then(MatchResult::as_sequence)
        .unwrap()
        .iter()
        .filter_map(MatchResult::as_node)
        .map(|node| node.kind)
        .collect();
    assert_eq!(
        kinds,
        [
            NodeKind::Field,
            NodeKind::FragmentSpread,
            NodeKind::Field,
            NodeKind::InlineFragment,
        ],
    );
}

/// Keywords are ordinary names in field position.
#[test]
fn keyword_named_fields() {
    let operation = only_definition("{ type query on fragment }");
    let names: Vec<&str> = operation
        .get("selections")
        .and_then(MatchResult::as_sequence)
        .unwrap()
        .iter()
        .filter_map(MatchResult::as_node)
        .filter_map(|node| node.name())
        .collect();
    assert_eq!(names, ["type", "query", "on", "fragment"]);
}
