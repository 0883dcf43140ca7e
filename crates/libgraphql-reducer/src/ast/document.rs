use crate::MatchResult;
use crate::Node;
use crate::ReduceError;
use crate::Rule;
use serde::Serialize;

/// Root of a reduced GraphQL document.
///
/// A document may mix executable definitions (operations and fragments) with
/// type-system definitions and extensions. Definitions keep source order,
/// which matters to consumers applying extensions.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    pub definitions: Vec<Node>,
}

impl Document {
    /// Iterate over only the type-system definitions and extensions.
    pub fn schema_definitions(&self) -> impl Iterator<Item = &Node> {
        self.definitions
            .iter()
            .filter(|d| d.kind.is_type_system_definition())
    }

    /// Iterate over only the operations and fragments.
    pub fn executable_definitions(&self) -> impl Iterator<Item = &Node> {
        self.definitions
            .iter()
            .filter(|d| d.kind.is_executable_definition())
    }

    /// Returns the generic tree this document was decoded from.
    pub fn into_match_result(self) -> MatchResult {
        MatchResult::Sequence(self.definitions.into_iter().map(MatchResult::Node).collect())
    }
}

impl TryFrom<MatchResult> for Document {
    type Error = ReduceError;

    fn try_from(result: MatchResult) -> Result<Self, Self::Error> {
        let MatchResult::Sequence(items) = result else {
            return Err(ReduceError::shape(Rule::document, "a sequence of definitions"));
        };
        let definitions = items
            .into_iter()
            .map(|item| match item {
                MatchResult::Node(node) if node.kind.is_definition() => Ok(node),
                _ => Err(ReduceError::shape(Rule::document, "a sequence of definitions")),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { definitions })
    }
}
