use crate::ast::AstView;
use crate::MatchResult;
use crate::Scalar;
use indexmap::IndexMap;
use inherent::inherent;

/// A GraphQL input value decoded from a reduced argument, default value or
/// object field.
///
/// Variables and enum literals stay distinct even though both are bare
/// names in the source.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    Variable(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

#[inherent]
impl AstView for Value {
    pub fn from_match_result(result: &MatchResult) -> Option<Self> {
        Some(match result {
            MatchResult::Scalar(scalar) => match scalar {
                Scalar::Boolean(value) => Value::Boolean(*value),
                Scalar::Enum(name) => Value::Enum(name.clone()),
                Scalar::Float(value) => Value::Float(*value),
                Scalar::Int(value) => Value::Int(*value),
                Scalar::Null => Value::Null,
                Scalar::String(value) => Value::String(value.clone()),
                Scalar::Variable(name) => Value::Variable(name.clone()),
            },
            MatchResult::Sequence(items) => Value::List(
                items
                    .iter()
                    .map(Self::from_match_result)
                    .collect::<Option<_>>()?,
            ),
            MatchResult::Record(record) => Value::Object(
                record
                    .iter()
                    .map(|(key, value)| Some((key.clone(), Self::from_match_result(value)?)))
                    .collect::<Option<_>>()?,
            ),
            MatchResult::Absent | MatchResult::Node(_) => return None,
        })
    }

    pub fn append_source(&self, sink: &mut String) {
        match self {
            Value::Boolean(value) => sink.push_str(if *value { "true" } else { "false" }),
            Value::Enum(name) => sink.push_str(name),
            Value::Float(value) => sink.push_str(&format!("{value:?}")),
            Value::Int(value) => sink.push_str(&value.to_string()),
            Value::Null => sink.push_str("null"),
            Value::String(value) => sink.push_str(&format!("{value:?}")),
            Value::Variable(name) => {
                sink.push('$');
                sink.push_str(name);
            },
            Value::List(items) => {
                sink.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        sink.push_str(", ");
                    }
                    item.append_source(sink);
                }
                sink.push(']');
            },
            Value::Object(fields) => {
                sink.push('{');
                for (i, (name, value)) in fields.iter().enumerate() {
                    sink.push_str(if i > 0 { ", " } else { " " });
                    sink.push_str(name);
                    sink.push_str(": ");
                    value.append_source(sink);
                }
                sink.push_str(if fields.is_empty() { "}" } else { " }" });
            },
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut source = String::new();
        self.append_source(&mut source);
        f.write_str(&source)
    }
}
