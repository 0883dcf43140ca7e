//! A GraphQL parsing library that reduces grammar-shaped parse trees into a
//! canonical, serializable document AST.
//!
//! Parsing happens in two stages:
//!
//! 1. [`GraphQLGrammar`] (a `pest` grammar) matches the source text and
//!    produces a tree of rule matches.
//! 2. The [`reduce`] engine folds that tree bottom-up, one reducer per
//!    grammar [`Rule`], into a [`MatchResult`] and finally an
//!    [`ast::Document`].
//!
//! ```
//! use libgraphql_reducer::GraphQLParser;
//!
//! let doc = GraphQLParser::new("scalar DateTime").parse_document().unwrap();
//! assert_eq!(doc.definitions.len(), 1);
//! assert_eq!(doc.definitions[0].kind.as_str(), "scalar");
//! ```

pub mod ast;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_grammar;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod match_result;
mod node_kind;
mod parse_options;
pub mod reduce;
mod reduce_error;
mod source_position;
mod string_literal;
mod value_parsing_error;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_grammar::GraphQLGrammar;
pub use graphql_grammar::Rule;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::parse;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use match_result::MatchResult;
pub use match_result::Node;
pub use match_result::Record;
pub use match_result::Scalar;
pub use node_kind::NodeKind;
pub use parse_options::ParseOptions;
pub use reduce_error::ReduceError;
pub use source_position::SourcePosition;
pub use string_literal::parse_string_literal;
pub use value_parsing_error::ValueParsingError;

#[cfg(test)]
mod tests;
