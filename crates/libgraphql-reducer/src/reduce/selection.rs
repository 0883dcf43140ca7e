//! Reducers for selection sets and the selections they hold.
//!
//! Selections keep their declaration order.

use crate::reduce::merge::exactly;
use crate::reduce::merge::merge_records;
use crate::reduce::merge::node;
use crate::reduce::merge::take_name;
use crate::MatchResult;
use crate::NodeKind;
use crate::ReduceError;
use crate::Rule;

pub fn selection_set(
    _rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    Ok(MatchResult::record("selections", MatchResult::Sequence(children)))
}

/// Merges alias, name, arguments, directives and the nested selection set.
pub fn field(rule: Rule, children: Vec<MatchResult>) -> Result<MatchResult, ReduceError> {
    node(NodeKind::Field, merge_records(rule, children)?)
}

pub fn fragment_spread(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    node(NodeKind::FragmentSpread, merge_records(rule, children)?)
}

pub fn inline_fragment(
    rule: Rule,
    children: Vec<MatchResult>,
) -> Result<MatchResult, ReduceError> {
    node(NodeKind::InlineFragment, merge_records(rule, children)?)
}

/// `hero: character` keeps `hero` under `alias`, leaving `name` free for the
/// field's own name.
pub fn alias(rule: Rule, children: Vec<MatchResult>) -> Result<MatchResult, ReduceError> {
    let [name] = exactly(rule, children, "an aliased name")?;
    Ok(MatchResult::record(
        "alias",
        MatchResult::string(take_name(rule, name)?),
    ))
}
