//! Structural description of a declared type.
//!
//! # Wire format
//!
//! Shapes are internally tagged by `kind`:
//!
//! ```json
//! { "kind": "generic",
//!   "name": { "simple": "List`1", "full": "System.Collections.Generic.List`1" },
//!   "args": [ { "kind": "primitive", "name": "int" } ] }
//! ```
//!
//! A `name` may also be a bare string when the full name is unknown, or
//! give only `full`, in which case the simple name is its last segment.

use serde::{Deserialize, Serialize};

use crate::Primitive;
use crate::utils::last_segment;

/// Whether a declared type is a reference or a value type.
///
/// Renderers never look at this; it only decides which nodes carry
/// reference nullability facts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Reference,
    Value,
}

/// Short and qualified spellings of a named or generic type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTypeName")]
pub struct TypeName {
    pub simple: String,
    /// Qualified name; types without one fall back to `simple`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
    #[serde(skip_serializing_if = "is_reference")]
    pub kind: TypeKind,
}

fn is_reference(kind: &TypeKind) -> bool {
    *kind == TypeKind::Reference
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTypeName {
    Bare(String),
    Spelled {
        #[serde(default)]
        simple: Option<String>,
        #[serde(default)]
        full: Option<String>,
        #[serde(default)]
        kind: TypeKind,
    },
}

impl TryFrom<RawTypeName> for TypeName {
    type Error = String;

    fn try_from(raw: RawTypeName) -> Result<Self, Self::Error> {
        match raw {
            RawTypeName::Bare(simple) => Ok(Self::simple(simple)),
            RawTypeName::Spelled { simple, full, kind } => {
                let simple = match (simple, &full) {
                    (Some(simple), _) => simple,
                    (None, Some(full)) => last_segment(full).to_string(),
                    (None, None) => return Err("type name needs `simple` or `full`".to_string()),
                };
                Ok(Self { simple, full, kind })
            }
        }
    }
}

impl TypeName {
    pub fn new(simple: impl Into<String>, full: impl Into<String>) -> Self {
        Self {
            simple: simple.into(),
            full: Some(full.into()),
            kind: TypeKind::Reference,
        }
    }

    /// A name with no qualified spelling.
    pub fn simple(simple: impl Into<String>) -> Self {
        Self {
            simple: simple.into(),
            full: None,
            kind: TypeKind::Reference,
        }
    }

    /// Mark the named type as a value type.
    pub fn value_type(mut self) -> Self {
        self.kind = TypeKind::Value;
        self
    }

    /// Full name, or the simple name when there is none.
    pub fn full_or_simple(&self) -> &str {
        self.full.as_deref().unwrap_or(&self.simple)
    }

    pub fn is_value_type(&self) -> bool {
        self.kind == TypeKind::Value
    }
}

/// The shape of a declared type.
///
/// Jagged arrays are nested `Array` nodes of rank 1; a multi-dimensional
/// array is a single node with `variable_bound` set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeShape {
    Primitive {
        name: Primitive,
    },
    NullableValue {
        inner: Box<TypeShape>,
    },
    Array {
        element: Box<TypeShape>,
        #[serde(default = "default_rank")]
        rank: u32,
        #[serde(default)]
        variable_bound: bool,
    },
    Generic {
        name: TypeName,
        #[serde(default)]
        args: Vec<TypeShape>,
    },
    Named {
        name: TypeName,
    },
}

fn default_rank() -> u32 {
    1
}

impl TypeShape {
    pub fn primitive(primitive: Primitive) -> Self {
        Self::Primitive { name: primitive }
    }

    /// `Void`, which renders through the named path.
    pub fn void() -> Self {
        Self::primitive(Primitive::Void)
    }

    pub fn named(simple: impl Into<String>, full: impl Into<String>) -> Self {
        Self::Named {
            name: TypeName::new(simple, full),
        }
    }

    pub fn generic(
        simple: impl Into<String>,
        full: impl Into<String>,
        args: impl IntoIterator<Item = TypeShape>,
    ) -> Self {
        Self::Generic {
            name: TypeName::new(simple, full),
            args: args.into_iter().collect(),
        }
    }

    /// Single-dimensional array level.
    pub fn array(element: TypeShape) -> Self {
        Self::Array {
            element: Box::new(element),
            rank: 1,
            variable_bound: false,
        }
    }

    /// Multi-dimensional array sharing one bracket pair.
    pub fn multi_array(element: TypeShape, rank: u32) -> Self {
        Self::Array {
            element: Box::new(element),
            rank,
            variable_bound: true,
        }
    }

    /// Nullable value wrapper, e.g. `int?`.
    pub fn nullable(inner: TypeShape) -> Self {
        Self::NullableValue {
            inner: Box::new(inner),
        }
    }

    /// Whether nodes of this shape carry no reference nullability of their own.
    pub fn is_value_type(&self) -> bool {
        match self {
            TypeShape::Primitive { name } => name.is_value_type(),
            TypeShape::NullableValue { .. } => true,
            TypeShape::Array { .. } => false,
            TypeShape::Generic { name, .. } | TypeShape::Named { name } => name.is_value_type(),
        }
    }

    /// Number of nodes in the shape tree.
    pub fn node_count(&self) -> usize {
        1 + match self {
            TypeShape::Primitive { .. } | TypeShape::Named { .. } => 0,
            TypeShape::NullableValue { inner } => inner.node_count(),
            TypeShape::Array { element, .. } => element.node_count(),
            TypeShape::Generic { args, .. } => args.iter().map(TypeShape::node_count).sum(),
        }
    }
}

impl From<Primitive> for TypeShape {
    fn from(primitive: Primitive) -> Self {
        Self::primitive(primitive)
    }
}

impl From<TypeName> for TypeShape {
    fn from(name: TypeName) -> Self {
        Self::Named { name }
    }
}
