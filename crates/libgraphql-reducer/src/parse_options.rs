/// Options accepted by [`GraphQLParser`](crate::GraphQLParser).
///
/// ```
/// use libgraphql_reducer::ParseOptions;
///
/// let options = ParseOptions::default().with_no_location(true);
/// assert!(options.no_location());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    no_location: bool,
}

impl ParseOptions {
    /// Requests that location metadata be left out of the reduced document.
    ///
    /// Reduced documents never carry locations, so this flag currently has no
    /// effect on the output. It is accepted so callers can already state the
    /// intent.
    pub fn with_no_location(mut self, no_location: bool) -> Self {
        self.no_location = no_location;
        self
    }

    pub fn no_location(&self) -> bool {
        self.no_location
    }
}
