//! Entry point tying the grammar to the reduction engine.
//!
//! [`GraphQLParser`] runs [`GraphQLGrammar`] over the source text and folds
//! the resulting match tree with [`reduce::fold_pair()`]. Both stages report
//! failures as [`GraphQLParseError`]s located in the source.

use crate::ast;
use crate::reduce;
use crate::GraphQLGrammar;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::MatchResult;
use crate::ParseOptions;
use crate::Rule;
use pest::error::ErrorVariant;
use pest::error::InputLocation;
use pest::Parser;
use std::path::PathBuf;

/// Longest excerpt of unexpected input quoted in a syntax error.
const MAX_FOUND_CHARS: usize = 24;

/// Parses GraphQL documents (executable, type-system or mixed) into a
/// reduced [`ast::Document`].
///
/// # Example
///
/// ```
/// use libgraphql_reducer::GraphQLParser;
/// use libgraphql_reducer::NodeKind;
///
/// let doc = GraphQLParser::new("query { hero { name } }")
///     .parse_document()
///     .unwrap();
/// assert_eq!(doc.definitions[0].kind, NodeKind::Operation);
/// ```
#[derive(Clone, Debug)]
pub struct GraphQLParser<'src> {
    source: &'src str,
    options: ParseOptions,
    file_path: Option<PathBuf>,
}

impl<'src> GraphQLParser<'src> {
    /// Creates a parser with default [`ParseOptions`].
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options<S: AsRef<str> + ?Sized>(
        source: &'src S,
        options: ParseOptions,
    ) -> Self {
        Self {
            source: source.as_ref(),
            options,
            file_path: None,
        }
    }

    /// Attaches the path of the parsed file to the spans of reported errors.
    pub fn with_file_path(mut self, file_path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses the source and returns the reduced document.
    pub fn parse_document(self) -> Result<ast::Document, GraphQLParseError> {
        let source = self.source;
        let file_path = self.file_path.clone();
        let result = self.parse_match_result()?;
        ast::Document::try_from(result).map_err(|error| {
            GraphQLParseError::from_reduce_error(
                error,
                GraphQLSourceSpan::from_byte_offsets(source, 0, source.len(), file_path),
            )
        })
    }

    /// Parses the source and returns the generic [`MatchResult`] produced by
    /// the `document` rule's reducer.
    pub fn parse_match_result(self) -> Result<MatchResult, GraphQLParseError> {
        if self.options.no_location() {
            log::trace!("`no_location` requested; reduced documents carry no locations");
        }

        let mut pairs = GraphQLGrammar::parse(Rule::document, self.source)
            .map_err(|error| self.syntax_error(error))?;
        let Some(document) = pairs.next() else {
            return Err(GraphQLParseError::new(
                "The document rule produced no match",
                self.span(0, 0),
                GraphQLParseErrorKind::InvalidSyntax,
            ));
        };

        let result = reduce::fold_pair(document).map_err(|fold_error| {
            GraphQLParseError::from_reduce_error(
                fold_error.error,
                self.span(fold_error.span.start(), fold_error.span.end()),
            )
        })?;

        log::debug!(
            "reduced {} bytes into {} definition(s)",
            self.source.len(),
            result.as_sequence().map_or(0, <[MatchResult]>::len),
        );
        Ok(result)
    }

    fn span(&self, start: usize, end: usize) -> GraphQLSourceSpan {
        GraphQLSourceSpan::from_byte_offsets(self.source, start, end, self.file_path.clone())
    }

    fn syntax_error(&self, error: pest::error::Error<Rule>) -> GraphQLParseError {
        let (start, end) = match error.location {
            InputLocation::Pos(pos) => (pos, pos),
            InputLocation::Span((start, end)) => (start, end),
        };
        let span = self.span(start, end);

        let (positives, negatives) = match error.variant {
            ErrorVariant::ParsingError { positives, negatives } => (positives, negatives),
            ErrorVariant::CustomError { message } => {
                return GraphQLParseError::new(message, span, GraphQLParseErrorKind::InvalidSyntax);
            },
        };
        let expected: Vec<String> = positives.into_iter().map(describe_rule).collect();

        let remaining = self.source.get(start..).unwrap_or("");
        let mut parse_error = if remaining.trim().is_empty() {
            GraphQLParseError::new(
                "Unexpected end of input",
                span,
                GraphQLParseErrorKind::UnexpectedEof { expected: expected.clone() },
            )
        } else {
            let found = found_excerpt(remaining.trim_start());
            GraphQLParseError::new(
                format!("Unexpected `{found}`"),
                span,
                GraphQLParseErrorKind::UnexpectedToken {
                    expected: expected.clone(),
                    found,
                },
            )
        };

        if !expected.is_empty() {
            parse_error.add_note(format!("expected {}", join_alternatives(&expected)));
        }
        if !negatives.is_empty() {
            let unexpected: Vec<String> = negatives.into_iter().map(describe_rule).collect();
            parse_error.add_note(format!("did not expect {}", join_alternatives(&unexpected)));
        }
        parse_error
    }
}

/// Parses `source` with default options.
pub fn parse(source: &str) -> Result<ast::Document, GraphQLParseError> {
    GraphQLParser::new(source).parse_document()
}

/// Describes a grammar rule for humans: `kw_on` is "`on`", `selection_set`
/// is "selection set".
fn describe_rule(rule: Rule) -> String {
    let name = format!("{rule:?}");
    if rule == Rule::EOI {
        "end of input".to_string()
    } else if let Some(keyword) = name.strip_prefix("kw_") {
        format!("`{keyword}`")
    } else {
        name.replace('_', " ")
    }
}

fn join_alternatives(alternatives: &[String]) -> String {
    match alternatives {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}

/// The token-ish run of characters starting at the error position.
fn found_excerpt(remaining: &str) -> String {
    let word: String = remaining
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .take(MAX_FOUND_CHARS)
        .collect();
    if word.is_empty() {
        remaining.chars().take(1).collect()
    } else {
        word
    }
}
