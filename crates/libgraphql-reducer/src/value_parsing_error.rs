use crate::GraphQLStringParsingError;

/// Errors that occur when converting literal tokens into typed scalars.
///
/// For example, reducing the integer `99999999999999999999` overflows `i64`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueParsingError {
    /// Invalid string literal (bad escape sequence, unterminated, etc.).
    #[error("Invalid GraphQL string: {0}")]
    String(#[from] GraphQLStringParsingError),

    /// Integer literal that does not fit in an `i64`.
    #[error("Invalid GraphQL integer: {0}")]
    Int(String),

    /// Float literal that is not a finite `f64`.
    #[error("Invalid GraphQL float: {0}")]
    Float(String),
}
