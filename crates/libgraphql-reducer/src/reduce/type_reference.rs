//! Reducers for type references.
//!
//! Each layer of the grammar (`type_ref`, `nullable_type`) wraps its child in
//! a single-entry shell; list and non-null reducers strip exactly one shell
//! per layer. `[ID!]!` therefore reduces to
//! `{"type": {"non_null": {"list": {"non_null": {"type": "ID"}}}}}`.

use crate::reduce::merge::exactly;
use crate::reduce::merge::take_name;
use crate::reduce::merge::unwrap_shell;
use crate::MatchResult;
use crate::ReduceError;
use crate::Rule;

/// The bare type name.
pub fn named_type(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    let [name] = exactly(rule, children, "a type name")?;
    Ok(MatchResult::string(take_name(rule, name)?))
}

pub fn list_type(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    wrapper("list", rule, children)
}

pub fn non_null_type(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    wrapper("non_null", rule, children)
}

fn wrapper(
    tag: &'static str,
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    let [shell] = exactly(rule, children, "one wrapped type")?;
    let inner = match unwrap_shell(rule, shell)? {
        name @ MatchResult::Scalar(_) => MatchResult::record("type", name),
        inner @ MatchResult::Record(_) => inner,
        _ => return Err(ReduceError::shape(rule, "a wrapped type")),
    };
    Ok(MatchResult::record(tag, inner))
}
