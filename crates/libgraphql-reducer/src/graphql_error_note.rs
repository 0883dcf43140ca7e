use crate::GraphQLErrorNoteKind;
use smallvec::SmallVec;

/// A note attached to a [`GraphQLParseError`](crate::GraphQLParseError).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,
}

impl GraphQLErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
        }
    }
}

/// Syntax errors carry up to two notes (expected / did not expect).
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
