//! Reducers for literal values, variables, lists and objects, and for the
//! arguments and directives that carry them.
//!
//! The `_const` variants of each rule share a reducer with their
//! variable-permitting counterparts: the grammar alone decides where
//! variables may appear.

use crate::parse_string_literal;
use crate::reduce::merge::collect_entries;
use crate::reduce::merge::exactly;
use crate::reduce::merge::merge_records;
use crate::reduce::merge::split_first;
use crate::reduce::merge::take_name;
use crate::MatchResult;
use crate::ReduceError;
use crate::Rule;
use crate::Scalar;
use crate::ValueParsingError;

/// A bare name becomes `{name: "..."}`.
pub fn name(_rule: Rule, text: &str) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::record("name", MatchResult::string(text)))
}

pub fn int_value(rule: Rule, text: &str) -> Result<MatchResult, ReduceError> {
    text.parse::<i64>()
        .map(|value| MatchResult::Scalar(Scalar::Int(value)))
        .map_err(|_| invalid(rule, ValueParsingError::Int(text.to_string())))
}

pub fn float_value(rule: Rule, text: &str) -> Result<MatchResult, ReduceError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(MatchResult::Scalar(Scalar::Float(value))),
        _ => Err(invalid(rule, ValueParsingError::Float(text.to_string()))),
    }
}

pub fn string_value(rule: Rule, text: &str) -> Result<MatchResult, ReduceError> {
    parse_string_literal(text)
        .map(MatchResult::string)
        .map_err(|error| invalid(rule, error.into()))
}

pub fn boolean_value(_rule: Rule, text: &str) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::Scalar(Scalar::Boolean(text == "true")))
}

/// `null` is a present value, distinct from an omitted one.
pub fn null_value(_rule: Rule, _text: &str) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::Scalar(Scalar::Null))
}

/// `$name` becomes [`Scalar::Variable`].
pub fn variable(rule: Rule, children: Vec<MatchResult>) -> Result<MatchResult, ReduceError> {
    let [name] = exactly(rule, children, "a variable name")?;
    Ok(MatchResult::Scalar(Scalar::Variable(take_name(rule, name)?)))
}

/// A bare name in value position becomes [`Scalar::Enum`].
pub fn enum_value(rule: Rule, children: Vec<MatchResult>) -> Result<MatchResult, ReduceError> {
    let [name] = exactly(rule, children, "an enum name")?;
    Ok(MatchResult::Scalar(Scalar::Enum(take_name(rule, name)?)))
}

pub fn list_value(
    _rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::Sequence(children))
}

pub fn object_value(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::Record(collect_entries(rule, children)?))
}

/// An object field or an argument: `name: value` becomes `{name: value}`.
pub fn named_entry(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    let [name, value] = exactly(rule, children, "a name and a value")?;
    Ok(MatchResult::record(take_name(rule, name)?, value))
}

/// Folds the arguments into one mapping from argument name to value.
pub fn arguments(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::record(
        "arguments",
        MatchResult::Record(collect_entries(rule, children)?),
    ))
}

/// Always a list, even for a single directive.
pub fn directives(
    _rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::record("directives", MatchResult::Sequence(children)))
}

pub fn directive(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::Record(merge_records(rule, children)?))
}

pub fn variable_definitions(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::record(
        "variables",
        MatchResult::Record(collect_entries(rule, children)?),
    ))
}

/// `$id: ID = 1` becomes `{id: {type: "ID", default_value: 1}}`.
pub fn variable_definition(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    let (variable, properties) = split_first(rule, children, "a variable")?;
    let MatchResult::Scalar(Scalar::Variable(name)) = variable else {
        return Err(ReduceError::shape(rule, "a variable"));
    };
    Ok(MatchResult::record(
        name,
        MatchResult::Record(merge_records(rule, properties)?),
    ))
}

fn invalid(rule: Rule, source: ValueParsingError) -> ReduceError {
    ReduceError::InvalidValue { rule, source }
}
