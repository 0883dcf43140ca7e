//! Reducers for scalar, object, interface, union, enum and input-object type
//! definitions, their fields and values, and type extensions.
//!
//! Fields, arguments and enum values are folded into records keyed by their
//! own name:
//!
//! ```text
//! type User { id: ID! }
//! ```
//!
//! reduces to a `type` node whose `fields` entry is
//! `{"id": {"type": {"non_null": {"type": "ID"}}}}`.

use crate::reduce::merge::collect_entries;
use crate::reduce::merge::exactly;
use crate::reduce::merge::merge_records;
use crate::reduce::merge::merge_with_optional_collection;
use crate::reduce::merge::node;
use crate::reduce::merge::split_first;
use crate::reduce::merge::take_name;
use crate::MatchResult;
use crate::NodeKind;
use crate::ReduceError;
use crate::Rule;
use crate::Scalar;

/// Re-tags the definition being extended as [`NodeKind::Extend`], keeping
/// its shape.
pub fn type_extension_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    match exactly(rule, children, "one extended definition")? {
        [MatchResult::Node(mut extended)] => {
            extended.kind = NodeKind::Extend;
            Ok(MatchResult::Node(extended))
        },
        _ => Err(ReduceError::shape(rule, "one extended definition")),
    }
}

pub fn scalar_type_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    node(NodeKind::Scalar, merge_records(rule, children)?)
}

pub fn object_type_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    node(
        NodeKind::Type,
        merge_with_optional_collection(rule, children, "fields")?,
    )
}

pub fn interface_type_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    node(
        NodeKind::Interface,
        merge_with_optional_collection(rule, children, "fields")?,
    )
}

pub fn input_object_type_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    node(
        NodeKind::Input,
        merge_with_optional_collection(rule, children, "fields")?,
    )
}

pub fn union_type_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    node(NodeKind::Union, merge_records(rule, children)?)
}

pub fn enum_type_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    node(
        NodeKind::Enum,
        merge_with_optional_collection(rule, children, "values")?,
    )
}

pub fn implements_interfaces(
    _rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::record("interfaces", MatchResult::Sequence(children)))
}

pub fn union_member_types(
    _rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::record("types", MatchResult::Sequence(children)))
}

/// Reduces a field definition (or an argument / input field definition) to
/// `{field_name: {type, args, default_value, directives, description}}`,
/// with only the properties that were present.
pub fn field_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    let name_index = children
        .iter()
        .position(is_name_record)
        .ok_or(ReduceError::shape(rule, "a named field definition"))?;
    let mut properties = children;
    let name = take_name(rule, properties.remove(name_index))?;
    Ok(MatchResult::record(
        name,
        MatchResult::Record(merge_records(rule, properties)?),
    ))
}

pub fn arguments_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::record(
        "args",
        MatchResult::Record(collect_entries(rule, children)?),
    ))
}

/// Keys an enum value definition by its literal name, so that its own record
/// holds only the description and directives.
pub fn enum_value_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    let (description, rest) = match children.first() {
        Some(MatchResult::Record(_)) => {
            let (description, rest) =
                split_first(rule, children, "an enum value definition")?;
            (Some(description), rest)
        },
        _ => (None, children),
    };
    let (literal, directives) = split_first(rule, rest, "an enum value")?;
    let MatchResult::Scalar(Scalar::Enum(name)) = literal else {
        return Err(ReduceError::shape(rule, "an enum value"));
    };

    let properties = description.into_iter().chain(directives).collect();
    Ok(MatchResult::record(
        name,
        MatchResult::Record(merge_records(rule, properties)?),
    ))
}

fn is_name_record(result: &MatchResult) -> bool {
    result
        .as_record()
        .is_some_and(|record| record.len() == 1 && record.contains_key("name"))
}
