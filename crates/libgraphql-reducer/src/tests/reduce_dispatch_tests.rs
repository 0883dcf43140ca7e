//! Tests for the rule-to-reducer dispatch table and the default reducers.

use crate::reduce::reduce;
use crate::reduce::reducer_for;
use crate::reduce::Matched;
use crate::reduce::Reducer;
use crate::tests::utils::int;
use crate::tests::utils::record;
use crate::tests::utils::string;
use crate::MatchResult;
use crate::ReduceError;
use crate::Rule;

// =============================================================================
// Default reducers
// =============================================================================

/// A rule without a specialized reducer wraps its single child under its
/// key.
#[test]
fn wrap_single_child() {
    let result = reduce(Rule::description, Matched::Children(vec![string("docs")]));
    assert_eq!(result, Ok(record([("description", string("docs"))])));
}

/// A rule that matched nothing produces an empty list under its key.
#[test]
fn wrap_no_children() {
    let result = reduce(Rule::default_value, Matched::Children(vec![]));
    assert_eq!(
        result,
        Ok(record([("default_value", MatchResult::Sequence(vec![]))])),
    );
}

#[test]
fn wrap_several_children() {
    let result = reduce(Rule::type_condition, Matched::Children(vec![int(1), int(2)]));
    assert_eq!(
        result,
        Ok(record([("on", MatchResult::Sequence(vec![int(1), int(2)]))])),
    );
}

/// Alternation rules hand their single child to the parent unchanged.
#[test]
fn pass_through_single_child() {
    let node = record([("name", string("Query"))]);
    let result = reduce(Rule::type_definition, Matched::Children(vec![node.clone()]));
    assert_eq!(result, Ok(node));
}

#[test]
fn pass_through_several_children_splices_a_sequence() {
    let result = reduce(Rule::definition, Matched::Children(vec![int(1), int(2)]));
    assert_eq!(result, Ok(MatchResult::Sequence(vec![int(1), int(2)])));
}

// =============================================================================
// Transparent and silent rules
// =============================================================================

/// Keywords and end of input contribute nothing to their parent.
#[test]
fn keywords_are_transparent() {
    for rule in [Rule::kw_type, Rule::kw_on, Rule::kw_extend, Rule::EOI] {
        assert_eq!(reduce(rule, Matched::Token("type")), Ok(MatchResult::Absent));
    }
}

#[test]
fn silent_rules_are_rejected() {
    for rule in [Rule::WHITESPACE, Rule::selection, Rule::value_const] {
        assert!(matches!(reducer_for(rule), Reducer::Silent));
        assert_eq!(
            reduce(rule, Matched::Children(vec![])),
            Err(ReduceError::SilentRule(rule)),
        );
    }
}

// =============================================================================
// Shape mismatches
// =============================================================================

/// Token reducers only accept captured text.
#[test]
fn token_reducer_rejects_children() {
    let result = reduce(Rule::int_value, Matched::Children(vec![int(1)]));
    assert!(matches!(
        result,
        Err(ReduceError::UnexpectedShape { rule: Rule::int_value, .. }),
    ));
}

#[test]
fn fold_reducer_rejects_text() {
    let result = reduce(Rule::selection_set, Matched::Token("{ a }"));
    assert!(matches!(
        result,
        Err(ReduceError::UnexpectedShape { rule: Rule::selection_set, .. }),
    ));
}

// =============================================================================
// Table bindings
// =============================================================================

/// `_const` rules reduce exactly like their variable-permitting twins.
#[test]
fn const_rules_share_reducers() {
    let children = || vec![record([("name", string("x"))]), int(3)];
    assert_eq!(
        reduce(Rule::argument_const, Matched::Children(children())),
        reduce(Rule::argument, Matched::Children(children())),
    );
    assert_eq!(
        reduce(Rule::list_value_const, Matched::Children(vec![int(1)])),
        reduce(Rule::list_value, Matched::Children(vec![int(1)])),
    );
}

#[test]
fn name_token_becomes_name_record() {
    assert_eq!(
        reduce(Rule::name, Matched::Token("hero")),
        Ok(record([("name", string("hero"))])),
    );
}
