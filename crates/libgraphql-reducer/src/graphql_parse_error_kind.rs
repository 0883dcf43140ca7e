use crate::ReduceError;
use crate::ValueParsingError;

/// Categorizes parse errors for programmatic handling.
///
/// The `#[error(...)]` messages are concise/programmatic. Full human-readable
/// messages are in `GraphQLParseError.message`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// The grammar expected one of several rules but found something else.
    ///
    /// # Example
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// Descriptions of the rules that could have matched here.
        expected: Vec<String>,
        /// The source text found at the error position.
        found: String,
    },

    /// The document ended before a complete construct was matched.
    ///
    /// # Example
    /// ```text
    /// type User {
    ///           ^ expected a field definition, found end of input
    /// ```
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// A literal matched the grammar but could not be converted to its
    /// typed value (integer overflow, bad escape sequence, ...).
    ///
    /// # Example
    /// ```text
    /// query { field(limit: 99999999999999999999) }
    ///                      ^^^^^^^^^^^^^^^^^^^^ integer overflow
    /// ```
    #[error("invalid value")]
    InvalidValue(ValueParsingError),

    /// The grammar and the reducer bound to one of its rules disagree about
    /// the shape of that rule's matches.
    #[error("reduction failed")]
    Reduction(ReduceError),

    /// A syntax error without a dedicated variant. The specific error is
    /// described in `GraphQLParseError.message`.
    #[error("invalid syntax")]
    InvalidSyntax,
}
