//! Typed views over reduced documents.
//!
//! The reducers produce a generic [`MatchResult`](crate::MatchResult) tree.
//! [`Document`] is the typed root of that tree; [`TypeReference`] and
//! [`Value`] decode the generic shapes of type references and input values
//! for consumers that prefer Rust enums over nested records.

mod ast_view;
mod document;
mod type_reference;
mod value;

pub use ast_view::AstView;
pub use document::Document;
pub use type_reference::TypeReference;
pub use value::Value;
