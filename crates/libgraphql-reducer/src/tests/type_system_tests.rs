//! Tests for type-system definition assembly.

use crate::tests::utils::only_definition;
use crate::tests::utils::to_json;
use crate::MatchResult;
use crate::NodeKind;
use serde_json::json;

// =============================================================================
// Scalars and object types
// =============================================================================

#[test]
fn scalar_definition() {
    assert_eq!(
        to_json("scalar DateTime"),
        json!([{"kind": "scalar", "node": {"name": "DateTime"}}]),
    );
}

#[test]
fn scalar_with_description_and_directive() {
    let scalar = only_definition(r#""An RFC 3339 timestamp" scalar DateTime @specifiedBy(url: "x")"#);
    assert_eq!(
        serde_json::to_value(&scalar).unwrap(),
        json!({
            "kind": "scalar",
            "node": {
                "description": "An RFC 3339 timestamp",
                "name": "DateTime",
                "directives": [{"name": "specifiedBy", "arguments": {"url": "x"}}],
            },
        }),
    );
}

#[test]
fn object_type_fields_keyed_by_name() {
    assert_eq!(
        to_json(
            r#"
            type User implements Node & Entity @key(fields: "id") {
              "Stable identifier"
              id: ID!
              friends(first: Int = 10, after: String): [User]
            }
            "#
        ),
        json!([{
            "kind": "type",
            "node": {
                "name": "User",
                "interfaces": ["Node", "Entity"],
                "directives": [{"name": "key", "arguments": {"fields": "id"}}],
                "fields": {
                    "id": {
                        "description": "Stable identifier",
                        "type": {"non_null": {"type": "ID"}},
                    },
                    "friends": {
                        "args": {
                            "first": {"type": "Int", "default_value": 10},
                            "after": {"type": "String"},
                        },
                        "type": {"list": {"type": "User"}},
                    },
                },
            },
        }]),
    );
}

/// Field declaration order is kept in the `fields` mapping.
#[test]
fn object_type_field_order() {
    let object = only_definition("type T { c: Int b: Int a: Int }");
    let fields = object.get("fields").and_then(MatchResult::as_record).unwrap();
    let names: Vec<&str> = fields.keys().map(String::as_str).collect();
    assert_eq!(names, ["c", "b", "a"]);
}

/// Duplicate field names overwrite silently; the grammar does not enforce
/// uniqueness.
#[test]
fn duplicate_field_names_overwrite() {
    let object = only_definition("type T { a: Int a: String }");
    assert_eq!(
        serde_json::to_value(object.get("fields").unwrap()).unwrap(),
        json!({"a": {"type": "String"}}),
    );
}

#[test]
fn object_type_without_fields() {
    let object = only_definition("type Marker @tag");
    assert_eq!(object.kind, NodeKind::Type);
    assert_eq!(object.get("fields"), None);
}

#[test]
fn leading_ampersand_in_implements() {
    let object = only_definition("type A implements & B & C { x: Int }");
    assert_eq!(
        serde_json::to_value(object.get("interfaces").unwrap()).unwrap(),
        json!(["B", "C"]),
    );
}

#[test]
fn interface_definition() {
    assert_eq!(
        to_json("interface Node implements Entity { id: ID! }"),
        json!([{
            "kind": "interface",
            "node": {
                "name": "Node",
                "interfaces": ["Entity"],
                "fields": {"id": {"type": {"non_null": {"type": "ID"}}}},
            },
        }]),
    );
}

// =============================================================================
// Unions, enums and input objects
// =============================================================================

#[test]
fn union_members_in_order() {
    assert_eq!(
        to_json("union SearchResult @cached = | Book | Author"),
        json!([{
            "kind": "union",
            "node": {
                "name": "SearchResult",
                "directives": [{"name": "cached"}],
                "types": ["Book", "Author"],
            },
        }]),
    );
}

/// Enum values are keyed by their literal name, with no name wrapper left in
/// their own record.
#[test]
fn enum_values_keyed_by_name() {
    let color = only_definition("enum Color { RED GREEN }");
    assert_eq!(color.kind, NodeKind::Enum);
    let values = color.get("values").and_then(MatchResult::as_record).unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values.get("RED"), Some(&MatchResult::Record(Default::default())));
    assert_eq!(values.get("GREEN"), Some(&MatchResult::Record(Default::default())));
}

#[test]
fn enum_value_description_and_directives() {
    assert_eq!(
        to_json(r#"enum Level { "Lowest" LOW @deprecated(reason: "use MID") MID }"#),
        json!([{
            "kind": "enum",
            "node": {
                "name": "Level",
                "values": {
                    "LOW": {
                        "description": "Lowest",
                        "directives": [
                            {"name": "deprecated", "arguments": {"reason": "use MID"}},
                        ],
                    },
                    "MID": {},
                },
            },
        }]),
    );
}

#[test]
fn input_object_definition() {
    assert_eq!(
        to_json("input Filter { term: String! = \"*\" limit: Int @range(max: 100) }"),
        json!([{
            "kind": "input",
            "node": {
                "name": "Filter",
                "fields": {
                    "term": {"type": {"non_null": {"type": "String"}}, "default_value": "*"},
                    "limit": {
                        "type": "Int",
                        "directives": [{"name": "range", "arguments": {"max": 100}}],
                    },
                },
            },
        }]),
    );
}

// =============================================================================
// Extensions
// =============================================================================

/// An extension keeps the shape of what it extends and is tagged `extend`.
#[test]
fn type_extension_is_retagged() {
    assert_eq!(
        to_json("extend type User @key(fields: \"id\") { email: String }"),
        json!([{
            "kind": "extend",
            "node": {
                "name": "User",
                "directives": [{"name": "key", "arguments": {"fields": "id"}}],
                "fields": {"email": {"type": "String"}},
            },
        }]),
    );
}

#[test]
fn every_type_definition_can_be_extended() {
    for source in [
        "extend scalar Url @tag",
        "extend interface Node { id: ID }",
        "extend union U = C",
        "extend enum E { D }",
        "extend input I { x: Int }",
    ] {
        assert_eq!(only_definition(source).kind, NodeKind::Extend, "{source}");
    }
}

#[test]
fn schema_extension() {
    assert_eq!(
        to_json("extend schema @link { subscription: Subscription }"),
        json!([{
            "kind": "extend",
            "node": {
                "directives": [{"name": "link"}],
                "operation_types": {"subscription": "Subscription"},
            },
        }]),
    );
    assert_eq!(
        to_json("extend schema @link"),
        json!([{"kind": "extend", "node": {"directives": [{"name": "link"}]}}]),
    );
}
