//! The reduction engine.
//!
//! Every grammar [`Rule`](crate::Rule) has exactly one reducer, resolved
//! through the static table in [`reducer_for()`]. Reducers are pure functions
//! from the already-reduced results of a rule's sub-matches to the rule's own
//! [`MatchResult`](crate::MatchResult); [`fold_pair()`] drives them bottom-up
//! over a `pest` match tree.
//!
//! The reducers are grouped by what they assemble:
//!
//! - [`document`]: the document and its executable/schema/directive
//!   definitions
//! - [`type_system`]: type definitions, their fields, values and extensions
//! - [`selection`]: selection sets, fields, fragment spreads and inline
//!   fragments
//! - [`value`]: literals, variables, lists, objects, arguments and directives
//! - [`type_reference`]: named, list and non-null type references

mod dispatch;
pub mod document;
mod merge;
pub mod selection;
pub mod type_reference;
pub mod type_system;
pub mod value;

pub use dispatch::fold_pair;
pub use dispatch::reduce;
pub use dispatch::reducer_for;
pub use dispatch::FoldError;
pub use dispatch::Matched;
pub use dispatch::Reducer;
pub use merge::collect_entries;
pub use merge::merge_records;
pub use merge::merge_records_with_collection;
