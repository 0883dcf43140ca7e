use pest_derive::Parser;

/// The grammar engine that recognizes GraphQL surface syntax.
///
/// Matching is delegated entirely to `pest`; the generated [`Rule`] enum is
/// the identifier every reducer is keyed on (see
/// [`reducer_for()`](crate::reduce::reducer_for)).
#[derive(Parser)]
#[grammar = "graphql.pest"]
pub struct GraphQLGrammar;
