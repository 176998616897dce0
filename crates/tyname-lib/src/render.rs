//! Type shape to readable string.
//!
//! The shape and its nullability tree are walked together, one node at a
//! time. At each level:
//!
//! 1. A nullable value wrapper is unwrapped and forces a `?` suffix; the
//!    nullability tree is not consulted for that level's suffix.
//!    Otherwise the suffix is `?` only when the node is annotated nullable.
//! 2. Aliased primitives are terminal (`int`, `string`).
//! 3. Arrays render their element against the tree's `element`, then the
//!    brackets: `[,]` for a multi-dimensional node, one `[]` per rank otherwise.
//! 4. Generics render each argument against the tree's matching `args` entry.
//! 5. Everything else is a bare name.
//!
//! The suffix goes last, after brackets or type arguments, since it
//! describes the reference itself.

use tyname_core::utils::strip_arity;
use tyname_core::{NullabilityTree, Primitive, TypeName, TypeShape};

use crate::{Error, RenderOptions, Result};

/// Renders type shapes with a fixed set of options.
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render `shape`, annotating reference nullability from `nullability`.
    ///
    /// With no tree, only nullable value wrappers produce a `?`.
    pub fn render(&self, shape: &TypeShape, nullability: Option<&NullabilityTree>) -> String {
        let mut out = String::with_capacity(shape.node_count() * 8);
        self.write_type(&mut out, shape, nullability);
        out
    }

    fn write_type(&self, out: &mut String, shape: &TypeShape, nullability: Option<&NullabilityTree>) {
        let (shape, nullable) = match shape {
            TypeShape::NullableValue { inner } => (unwrap_nullable(inner), true),
            _ => (shape, nullability.is_some_and(NullabilityTree::is_nullable)),
        };

        match shape {
            TypeShape::Primitive { name } => out.push_str(self.primitive_name(*name)),
            TypeShape::Array {
                element,
                rank,
                variable_bound,
            } => {
                let element_nullability = nullability.and_then(NullabilityTree::element);
                self.write_type(out, element, element_nullability);
                write_brackets(out, *rank, *variable_bound);
            }
            TypeShape::Generic { name, args } => {
                out.push_str(strip_arity(self.type_name(name)));
                out.push('<');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    let arg_nullability = nullability.and_then(|n| n.arg(i));
                    self.write_type(out, arg, arg_nullability);
                }
                out.push('>');
            }
            TypeShape::Named { name } => out.push_str(self.type_name(name)),
            TypeShape::NullableValue { .. } => unreachable!("nullable wrappers are unwrapped above"),
        }

        if nullable {
            out.push('?');
        }
    }

    fn primitive_name(&self, primitive: Primitive) -> &'static str {
        if self.options.use_alias_names
            && let Some(alias) = primitive.alias()
        {
            return alias;
        }
        if self.options.use_full_names {
            primitive.full_name()
        } else {
            primitive.name()
        }
    }

    fn type_name<'a>(&self, name: &'a TypeName) -> &'a str {
        if self.options.use_full_names {
            name.full_or_simple()
        } else {
            &name.simple
        }
    }
}

/// Nested wrappers collapse to one: `int??` cannot be declared.
fn unwrap_nullable(mut shape: &TypeShape) -> &TypeShape {
    while let TypeShape::NullableValue { inner } = shape {
        shape = inner;
    }
    shape
}

fn write_brackets(out: &mut String, rank: u32, variable_bound: bool) {
    if variable_bound {
        out.push('[');
        for _ in 1..rank {
            out.push(',');
        }
        out.push(']');
    } else {
        for _ in 0..rank {
            out.push_str("[]");
        }
    }
}

/// Render a shape that may be absent.
///
/// An absent shape is a caller error and is reported before anything is
/// rendered.
pub fn render_type(
    shape: Option<&TypeShape>,
    nullability: Option<&NullabilityTree>,
    options: &RenderOptions,
) -> Result<String> {
    let shape = shape.ok_or_else(|| Error::InvalidArgument("type shape is required".to_string()))?;
    Ok(Renderer::new(*options).render(shape, nullability))
}
