use crate::ast::AstView;
use crate::MatchResult;
use inherent::inherent;

/// A GraphQL type reference, decoded from the reduced
/// `{"list": ...}` / `{"non_null": ...}` / `"Name"` shapes.
///
/// ```
/// use libgraphql_reducer::ast::TypeReference;
/// use libgraphql_reducer::GraphQLParser;
///
/// let doc = GraphQLParser::new("type T { ids: [ID!]! }").parse_document().unwrap();
/// let fields = doc.definitions[0].get("fields").unwrap();
/// let ids = fields.get("ids").unwrap().get("type").unwrap();
/// let type_ref = TypeReference::from_match_result(ids).unwrap();
/// assert_eq!(type_ref.to_string(), "[ID!]!");
/// assert_eq!(type_ref.named_type(), "ID");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeReference {
    List(Box<TypeReference>),
    Named(String),
    NonNull(Box<TypeReference>),
}

impl TypeReference {
    /// The innermost named type.
    pub fn named_type(&self) -> &str {
        match self {
            TypeReference::Named(name) => name,
            TypeReference::List(inner) | TypeReference::NonNull(inner) => inner.named_type(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeReference::NonNull(_))
    }
}

#[inherent]
impl AstView for TypeReference {
    /// Accepts a bare name, a `{"type": ...}` shell, or a list / non-null
    /// wrapper.
    pub fn from_match_result(result: &MatchResult) -> Option<Self> {
        if let Some(name) = result.as_str() {
            return Some(TypeReference::Named(name.to_string()));
        }
        let record = result.as_record()?;
        if record.len() != 1 {
            return None;
        }
        let (tag, inner) = record.first()?;
        match tag.as_str() {
            "type" => Self::from_match_result(inner),
            "list" => Some(TypeReference::List(Box::new(Self::from_match_result(inner)?))),
            "non_null" => Some(TypeReference::NonNull(Box::new(Self::from_match_result(inner)?))),
            _ => None,
        }
    }

    pub fn append_source(&self, sink: &mut String) {
        match self {
            TypeReference::Named(name) => sink.push_str(name),
            TypeReference::List(inner) => {
                sink.push('[');
                inner.append_source(sink);
                sink.push(']');
            },
            TypeReference::NonNull(inner) => {
                inner.append_source(sink);
                sink.push('!');
            },
        }
    }
}

impl std::fmt::Display for TypeReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut source = String::new();
        self.append_source(&mut source);
        f.write_str(&source)
    }
}
