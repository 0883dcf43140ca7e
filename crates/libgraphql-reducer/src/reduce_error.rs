use crate::Rule;
use crate::ValueParsingError;

/// Errors raised by the reducers themselves.
///
/// Apart from [`InvalidValue`](ReduceError::InvalidValue), every variant is a
/// contract violation between the grammar and its reducers (a rule changed
/// shape without its reducer being updated). None of them are recoverable:
/// the reduction aborts and no document is produced.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ReduceError {
    /// More than one sequence was found among the siblings of a rule that
    /// collects exactly one sequence into a named field.
    #[error(
        "more than one sequence found among the children of `{rule:?}` while \
        collecting `{key}`"
    )]
    MultipleCollections {
        rule: Rule,
        key: &'static str,
    },

    /// A rule asked to collect a sequence into a named field but none of its
    /// children is a sequence.
    #[error(
        "no sequence found among the children of `{rule:?}` while collecting \
        `{key}`"
    )]
    MissingCollection {
        rule: Rule,
        key: &'static str,
    },

    /// Two sibling records of one node contributed the same key.
    #[error("duplicate key `{key}` while merging the children of `{rule:?}`")]
    DuplicateKey {
        rule: Rule,
        key: String,
    },

    /// A reducer received input of a shape its rule never produces.
    #[error("unexpected match shape for `{rule:?}`: expected {expected}")]
    UnexpectedShape {
        rule: Rule,
        expected: &'static str,
    },

    /// A silent grammar rule was handed to the reducer.
    #[error("silent rule `{0:?}` reached the reducer")]
    SilentRule(Rule),

    /// A literal token could not be converted to its typed scalar.
    #[error("invalid literal in `{rule:?}`: {source}")]
    InvalidValue {
        rule: Rule,
        #[source]
        source: ValueParsingError,
    },
}

impl ReduceError {
    pub(crate) fn shape(rule: Rule, expected: &'static str) -> Self {
        ReduceError::UnexpectedShape { rule, expected }
    }
}
