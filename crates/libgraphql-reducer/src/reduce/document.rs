//! Reducers for the document root and for operation, fragment, schema and
//! directive definitions.

use crate::reduce::merge::exactly;
use crate::reduce::merge::merge_records;
use crate::reduce::merge::merge_records_with_collection;
use crate::reduce::merge::merge_with_optional_collection;
use crate::reduce::merge::node;
use crate::reduce::merge::take_single_entry;
use crate::MatchResult;
use crate::NodeKind;
use crate::ReduceError;
use crate::Rule;
use crate::Scalar;

/// Flattens every definition into one ordered sequence of definition nodes.
///
/// A definition that reduced to a sequence is spliced in place rather than
/// nested.
pub fn document(rule: Rule, children: Vec<MatchResult>) -> Result<MatchResult, ReduceError> {
    let mut definitions = Vec::with_capacity(children.len());
    for child in children {
        match child {
            MatchResult::Node(_) => definitions.push(child),
            MatchResult::Sequence(nested) => {
                for definition in nested {
                    if !matches!(definition, MatchResult::Node(_)) {
                        return Err(ReduceError::shape(rule, "definition nodes"));
                    }
                    definitions.push(definition);
                }
            },
            _ => return Err(ReduceError::shape(rule, "definition nodes")),
        }
    }
    Ok(MatchResult::Sequence(definitions))
}

/// `query`, `mutation` or `subscription` becomes `{operation: "query"}`.
pub fn operation_type(_rule: Rule, text: &str) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::record("operation", MatchResult::string(text)))
}

/// Merges the operation type, name, variables, directives and selections.
///
/// The `{ ... }` shorthand has only a selection set, so its node carries
/// `selections` and nothing else.
pub fn operation_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    node(NodeKind::Operation, merge_records(rule, children)?)
}

pub fn fragment_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    node(NodeKind::Fragment, merge_records(rule, children)?)
}

/// Folds the root operation types into `operation_types`, a mapping from
/// operation type to root type name.
pub fn schema_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    node(
        NodeKind::Schema,
        merge_records_with_collection(rule, children, "operation_types")?,
    )
}

/// Like [`schema_definition()`], except that an extension may add only
/// directives and omit the root operation types.
pub fn schema_extension(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    node(
        NodeKind::Schema,
        merge_with_optional_collection(rule, children, "operation_types")?,
    )
}

/// `query: Query` becomes `{query: "Query"}`.
pub fn operation_type_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    let [operation, type_name] =
        exactly(rule, children, "an operation type and a named type")?;
    let (_, operation) = take_single_entry(rule, operation)?;
    match (operation, type_name) {
        (
            MatchResult::Scalar(Scalar::String(operation)),
            type_name @ MatchResult::Scalar(Scalar::String(_)),
        ) => Ok(MatchResult::record(operation, type_name)),
        _ => Err(ReduceError::shape(rule, "an operation type and a named type")),
    }
}

pub fn directive_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    node(NodeKind::Directive, merge_records(rule, children)?)
}

/// The `repeatable` keyword of a directive definition.
pub fn repeatable(_rule: Rule, _text: &str) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::record(
        "repeatable",
        MatchResult::Scalar(Scalar::Boolean(true)),
    ))
}

pub fn directive_locations(
    _rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::record("locations", MatchResult::Sequence(children)))
}

pub fn directive_location(_rule: Rule, text: &str) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::string(text))
}
