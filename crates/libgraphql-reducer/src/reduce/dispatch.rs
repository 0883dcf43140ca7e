use crate::reduce::document;
use crate::reduce::selection;
use crate::reduce::type_reference;
use crate::reduce::type_system;
use crate::reduce::value;
use crate::MatchResult;
use crate::ReduceError;
use crate::Rule;
use pest::iterators::Pair;

/// Reduces the raw text captured by an atomic rule.
pub type TokenReducer = fn(Rule, &str) -> Result<MatchResult, ReduceError>;

/// Reduces the already-reduced results of a rule's sub-matches.
pub type FoldReducer = fn(Rule, Vec<MatchResult>) -> Result<MatchResult, ReduceError>;

/// How a grammar rule's match is turned into a [`MatchResult`].
#[derive(Clone, Copy, Debug)]
pub enum Reducer {
    /// The rule is atomic; its captured text is converted directly.
    Token(TokenReducer),

    /// The rule has a specialized reducer over its children.
    Fold(FoldReducer),

    /// Default reducer: one child becomes `{key: child}`, no children become
    /// `{key: []}` and several become `{key: [children...]}`.
    Wrap(&'static str),

    /// The rule is a pure alternation; its single child is handed to the
    /// parent unchanged.
    PassThrough,

    /// The rule carries no meaning of its own (keywords, end of input) and
    /// contributes nothing to its parent.
    Transparent,

    /// The rule is silent in the grammar and never produces a match.
    Silent,
}

/// What the grammar engine matched for one rule.
#[derive(Debug)]
pub enum Matched<'i> {
    /// The text captured by an atomic rule.
    Token(&'i str),

    /// The reduced results of the rule's sub-matches, in grammar order, with
    /// absent results already removed.
    Children(Vec<MatchResult>),
}

/// Returns the reducer bound to `rule`.
///
/// The match is exhaustive: adding a rule to the grammar does not compile
/// until it is bound here.
pub fn reducer_for(rule: Rule) -> Reducer {
    use Reducer::*;

    match rule {
        Rule::WHITESPACE
        | Rule::COMMENT
        | Rule::name_start
        | Rule::name_continue
        | Rule::executable_definition
        | Rule::selection
        | Rule::fragment_name
        | Rule::value
        | Rule::value_const
        | Rule::integer_part
        | Rule::fractional_part
        | Rule::exponent_part
        | Rule::block_string
        | Rule::quoted_string => Silent,

        Rule::EOI
        | Rule::kw_directive
        | Rule::kw_enum
        | Rule::kw_extend
        | Rule::kw_fragment
        | Rule::kw_implements
        | Rule::kw_input
        | Rule::kw_interface
        | Rule::kw_on
        | Rule::kw_scalar
        | Rule::kw_schema
        | Rule::kw_type
        | Rule::kw_union => Transparent,

        Rule::name => Token(value::name),
        Rule::kw_repeatable => Token(document::repeatable),

        // Document
        Rule::document => Fold(document::document),
        Rule::definition
        | Rule::type_system_definition
        | Rule::type_definition => PassThrough,
        Rule::operation_definition => Fold(document::operation_definition),
        Rule::operation_type => Token(document::operation_type),
        Rule::fragment_definition => Fold(document::fragment_definition),
        Rule::schema_definition => Fold(document::schema_definition),
        Rule::schema_extension => Fold(document::schema_extension),
        Rule::root_operation_types => Fold(super::merge::sequence),
        Rule::operation_type_definition => Fold(document::operation_type_definition),
        Rule::directive_definition => Fold(document::directive_definition),
        Rule::directive_locations => Fold(document::directive_locations),
        Rule::directive_location => Token(document::directive_location),
        Rule::description => Wrap("description"),

        // Type system
        Rule::type_extension_definition => Fold(type_system::type_extension_definition),
        Rule::scalar_type_definition => Fold(type_system::scalar_type_definition),
        Rule::object_type_definition => Fold(type_system::object_type_definition),
        Rule::interface_type_definition => Fold(type_system::interface_type_definition),
        Rule::implements_interfaces => Fold(type_system::implements_interfaces),
        Rule::fields_definition
        | Rule::input_fields_definition
        | Rule::enum_values_definition => Fold(super::merge::sequence),
        Rule::field_definition | Rule::input_value_definition => {
            Fold(type_system::field_definition)
        },
        Rule::arguments_definition => Fold(type_system::arguments_definition),
        Rule::union_type_definition => Fold(type_system::union_type_definition),
        Rule::union_member_types => Fold(type_system::union_member_types),
        Rule::enum_type_definition => Fold(type_system::enum_type_definition),
        Rule::enum_value_definition => Fold(type_system::enum_value_definition),
        Rule::input_object_type_definition => {
            Fold(type_system::input_object_type_definition)
        },

        // Selections
        Rule::selection_set => Fold(selection::selection_set),
        Rule::field => Fold(selection::field),
        Rule::alias => Fold(selection::alias),
        Rule::fragment_spread => Fold(selection::fragment_spread),
        Rule::inline_fragment => Fold(selection::inline_fragment),
        Rule::type_condition => Wrap("on"),

        // Values, arguments and directives
        Rule::int_value => Token(value::int_value),
        Rule::float_value => Token(value::float_value),
        Rule::string_value => Token(value::string_value),
        Rule::boolean_value => Token(value::boolean_value),
        Rule::null_value => Token(value::null_value),
        Rule::enum_value => Fold(value::enum_value),
        Rule::variable => Fold(value::variable),
        Rule::list_value | Rule::list_value_const => Fold(value::list_value),
        Rule::object_value | Rule::object_value_const => Fold(value::object_value),
        Rule::object_field
        | Rule::object_field_const
        | Rule::argument
        | Rule::argument_const => Fold(value::named_entry),
        Rule::arguments | Rule::arguments_const => Fold(value::arguments),
        Rule::directives | Rule::directives_const => Fold(value::directives),
        Rule::directive | Rule::directive_const => Fold(value::directive),
        Rule::variable_definitions => Fold(value::variable_definitions),
        Rule::variable_definition => Fold(value::variable_definition),
        Rule::default_value => Wrap("default_value"),

        // Type references
        Rule::type_ref => Wrap("type"),
        Rule::nullable_type => Wrap("nullable_type"),
        Rule::named_type => Fold(type_reference::named_type),
        Rule::list_type => Fold(type_reference::list_type),
        Rule::non_null_type => Fold(type_reference::non_null_type),
    }
}

/// Reduces one rule match to its contribution to the parent.
pub fn reduce(rule: Rule, matched: Matched<'_>) -> Result<MatchResult, ReduceError> {
    log::trace!("reducing `{rule:?}`");

    match (reducer_for(rule), matched) {
        (Reducer::Token(reducer), Matched::Token(text)) => reducer(rule, text),
        (Reducer::Fold(reducer), Matched::Children(children)) => reducer(rule, children),
        (Reducer::Wrap(key), Matched::Token(text)) => {
            Ok(MatchResult::record(key, MatchResult::string(text)))
        },
        (Reducer::Wrap(key), Matched::Children(children)) => Ok(wrap(key, children)),
        (Reducer::PassThrough, Matched::Children(children)) => Ok(pass_through(children)),
        (Reducer::Transparent, _) => Ok(MatchResult::Absent),
        (Reducer::Silent, _) => Err(ReduceError::SilentRule(rule)),
        (Reducer::Token(_), Matched::Children(_)) => {
            Err(ReduceError::shape(rule, "the text of an atomic match"))
        },
        (Reducer::Fold(_) | Reducer::PassThrough, Matched::Token(_)) => {
            Err(ReduceError::shape(rule, "reduced sub-matches"))
        },
    }
}

fn wrap(key: &'static str, children: Vec<MatchResult>) -> MatchResult {
    let inner = match <[MatchResult; 1]>::try_from(children) {
        Ok([child]) => child,
        Err(children) => MatchResult::Sequence(children),
    };
    MatchResult::record(key, inner)
}

fn pass_through(children: Vec<MatchResult>) -> MatchResult {
    match <[MatchResult; 1]>::try_from(children) {
        Ok([child]) => child,
        Err(children) if children.is_empty() => MatchResult::Absent,
        Err(children) => MatchResult::Sequence(children),
    }
}

/// A reduction failure together with the span of the match being reduced.
#[derive(Debug)]
pub struct FoldError<'i> {
    pub error: ReduceError,
    pub span: pest::Span<'i>,
}

/// Reduces a `pest` match tree bottom-up (post-order).
///
/// Children are reduced before their parent, and any child reducing to
/// [`MatchResult::Absent`] is dropped from the parent's children.
pub fn fold_pair(pair: Pair<'_, Rule>) -> Result<MatchResult, FoldError<'_>> {
    let rule = pair.as_rule();
    let span = pair.as_span();

    let matched = match reducer_for(rule) {
        Reducer::Token(_) | Reducer::Transparent => Matched::Token(pair.as_str()),
        _ => {
            let mut children = Vec::new();
            for inner in pair.into_inner() {
                let child = fold_pair(inner)?;
                if !child.is_absent() {
                    children.push(child);
                }
            }
            Matched::Children(children)
        },
    };

    reduce(rule, matched).map_err(|error| FoldError { error, span })
}
