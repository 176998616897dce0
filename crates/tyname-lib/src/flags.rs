//! Nullability trees from compact nullable-flag bytes.
//!
//! Compilers record reference nullability as one byte per type position,
//! walked in pre-order:
//!
//! | position                  | bytes                                   |
//! |---------------------------|-----------------------------------------|
//! | reference type            | its own, then its type arguments        |
//! | array                     | its own, then the element               |
//! | nullable value type       | only the wrapped type's                 |
//! | non-generic value type    | none                                    |
//! | generic value type        | one (ignored), then its type arguments  |
//!
//! Byte values: `0` oblivious, `1` not-null, `2` nullable. A single byte
//! applies to every position; positions past the end take the context
//! default.

use tracing::debug;
use tyname_core::{NullabilityState, NullabilityTree, TypeShape};

use crate::member::{Member, NullabilitySource};

pub const OBLIVIOUS: u8 = 0;
pub const NOT_ANNOTATED: u8 = 1;
pub const ANNOTATED: u8 = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NullableFlags {
    bytes: Vec<u8>,
    context: u8,
}

impl NullableFlags {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            context: OBLIVIOUS,
        }
    }

    /// Byte used where no flag is recorded, from the enclosing declaration.
    pub fn with_context(mut self, context: u8) -> Self {
        self.context = context;
        self
    }

    /// Build the nullability tree for `shape`.
    pub fn decode(&self, shape: &TypeShape) -> NullabilityTree {
        let mut cursor = Cursor {
            bytes: &self.bytes,
            uniform: match self.bytes.as_slice() {
                [only] => Some(*only),
                [] => Some(self.context),
                _ => None,
            },
            context: self.context,
            pos: 0,
            exhausted: false,
        };
        let tree = cursor.walk(shape);

        if cursor.uniform.is_none() && cursor.pos < self.bytes.len() {
            debug!(
                used = cursor.pos,
                available = self.bytes.len(),
                "nullable flags longer than the type they describe"
            );
        }
        tree
    }
}

impl NullabilitySource for NullableFlags {
    fn nullability(&self, member: &Member) -> Option<NullabilityTree> {
        member.declared_type().map(|shape| self.decode(shape))
    }
}

struct Cursor<'a> {
    bytes: &'a [u8],
    uniform: Option<u8>,
    context: u8,
    pos: usize,
    exhausted: bool,
}

impl Cursor<'_> {
    fn next(&mut self) -> u8 {
        if let Some(flag) = self.uniform {
            return flag;
        }
        if let Some(&flag) = self.bytes.get(self.pos) {
            self.pos += 1;
            return flag;
        }
        if !self.exhausted {
            self.exhausted = true;
            debug!(
                available = self.bytes.len(),
                context = self.context,
                "nullable flags exhausted, using context default"
            );
        }
        self.context
    }

    fn walk(&mut self, shape: &TypeShape) -> NullabilityTree {
        match shape {
            TypeShape::NullableValue { inner } => {
                let mut tree = self.walk(inner);
                tree.state = NullabilityState::Nullable;
                tree
            }
            TypeShape::Primitive { .. } | TypeShape::Named { .. } if shape.is_value_type() => {
                NullabilityTree::not_nullable()
            }
            TypeShape::Primitive { .. } | TypeShape::Named { .. } => {
                NullabilityTree::new(NullabilityState::from_flag(self.next()))
            }
            TypeShape::Array { element, .. } => {
                let state = NullabilityState::from_flag(self.next());
                NullabilityTree::new(state).with_element(self.walk(element))
            }
            TypeShape::Generic { args, .. } => {
                let flag = self.next();
                let state = if shape.is_value_type() {
                    NullabilityState::NotNullable
                } else {
                    NullabilityState::from_flag(flag)
                };
                let args: Vec<_> = args.iter().map(|arg| self.walk(arg)).collect();
                NullabilityTree::new(state).with_args(args)
            }
        }
    }
}
