/// The kind tag carried by a [`Node`](crate::Node).
///
/// Definition kinds tag top-level document entries; `Field`,
/// `FragmentSpread` and `InlineFragment` tag selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `directive @name on ...`
    Directive,

    /// `enum Name { ... }`
    Enum,

    /// Any `extend ...` definition. The node keeps the shape of the
    /// definition it extends.
    Extend,

    /// A field selection.
    Field,

    /// `fragment Name on Type { ... }`
    Fragment,

    /// `...Name`
    FragmentSpread,

    /// `... on Type { ... }` or `... @dir { ... }`
    InlineFragment,

    /// `input Name { ... }`
    Input,

    /// `interface Name { ... }`
    Interface,

    /// `query`, `mutation`, `subscription`, or anonymous `{ ... }`
    Operation,

    /// `scalar Name`
    Scalar,

    /// `schema { ... }`
    Schema,

    /// `type Name { ... }`
    Type,

    /// `union Name = A | B`
    Union,
}

impl NodeKind {
    /// The tag emitted in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Directive => "directive",
            NodeKind::Enum => "enum",
            NodeKind::Extend => "extend",
            NodeKind::Field => "field",
            NodeKind::Fragment => "fragment",
            NodeKind::FragmentSpread => "fragment_spread",
            NodeKind::InlineFragment => "inline_fragment",
            NodeKind::Input => "input",
            NodeKind::Interface => "interface",
            NodeKind::Operation => "operation",
            NodeKind::Scalar => "scalar",
            NodeKind::Schema => "schema",
            NodeKind::Type => "type",
            NodeKind::Union => "union",
        }
    }

    /// Returns `true` for kinds that may appear at the top level of a
    /// document.
    pub fn is_definition(&self) -> bool {
        !self.is_selection()
    }

    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            NodeKind::Field
                | NodeKind::FragmentSpread
                | NodeKind::InlineFragment
        )
    }

    /// Operations and fragments.
    pub fn is_executable_definition(&self) -> bool {
        matches!(self, NodeKind::Operation | NodeKind::Fragment)
    }

    /// Schema, type, directive and extension definitions.
    pub fn is_type_system_definition(&self) -> bool {
        self.is_definition() && !self.is_executable_definition()
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
