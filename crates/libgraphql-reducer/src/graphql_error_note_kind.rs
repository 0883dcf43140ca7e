/// How an error note is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// Context about the error, e.g. "expected name or `}`".
    ///
    /// Rendered as `= note: ...`.
    General,

    /// A suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...`.
    Help,
}
