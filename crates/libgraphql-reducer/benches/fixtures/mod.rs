use std::fmt::Write;

pub const SCHEMA: &str = include_str!("schema.graphql");
pub const SIMPLE_QUERY: &str = include_str!("simple_query.graphql");
pub const COMPLEX_QUERY: &str = include_str!("complex_query.graphql");

/// A query nesting `depth` selection sets, each selecting `id` and the next
/// level.
pub fn nested_query(depth: usize) -> String {
    let mut out = String::from("query Nested ");
    for _ in 0..depth {
        out.push_str("{ id next ");
    }
    out.push_str("{ id }");
    for _ in 0..depth {
        out.push_str(" }");
    }
    out
}

/// A schema with `count` object types of ten fields each.
pub fn many_types(count: usize) -> String {
    let mut out = String::with_capacity(count * 200);
    for i in 0..count {
        writeln!(out, "type Type{i} @key(fields: \"id\") {{").unwrap();
        writeln!(out, "  id: ID!").unwrap();
        for field in 0..9 {
            writeln!(out, "  field{field}(limit: Int = {field}): [String!]").unwrap();
        }
        out.push_str("}\n");
    }
    out
}
