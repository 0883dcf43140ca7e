use crate::SourcePosition;
use std::path::PathBuf;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// Optionally includes a file path for the referenced source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
    /// The file path to the source text this span refers to, if available.
    pub file_path: Option<PathBuf>,
}

impl GraphQLSourceSpan {
    /// Creates a span without file path information.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: None,
        }
    }

    /// Creates the span covering `[start, end)` byte offsets of `source`.
    pub fn from_byte_offsets(
        source: &str,
        start: usize,
        end: usize,
        file_path: Option<PathBuf>,
    ) -> Self {
        Self {
            start_inclusive: SourcePosition::from_byte_offset(source, start),
            end_exclusive: SourcePosition::from_byte_offset(source, end),
            file_path,
        }
    }
}
