use crate::MatchResult;

/// Implemented by typed views decoded from a reduced [`MatchResult`].
///
/// Implementors use `#[inherent] impl AstView`, so both methods are also
/// callable without importing this trait.
pub trait AstView: Sized {
    /// Decodes the generic shape, or returns `None` when `result` does not
    /// have it.
    fn from_match_result(result: &MatchResult) -> Option<Self>;

    /// Appends the GraphQL source form of this view to `sink`.
    fn append_source(&self, sink: &mut String);
}
