//! Reference nullability facts, mirroring a `TypeShape`.

use serde::{Deserialize, Serialize};

/// Annotation state of one node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullabilityState {
    /// Unannotated (oblivious) context.
    #[default]
    Unknown,
    NotNullable,
    Nullable,
}

impl NullabilityState {
    /// Decode one byte of the compiler's nullable-flags encoding.
    ///
    /// `1` is not-null, `2` is nullable, anything else is oblivious.
    pub fn from_flag(flag: u8) -> Self {
        match flag {
            1 => NullabilityState::NotNullable,
            2 => NullabilityState::Nullable,
            _ => NullabilityState::Unknown,
        }
    }
}

/// Nullability of a type and, recursively, of its element or arguments.
///
/// `element` is meaningful for arrays, `args` for generics. Missing entries
/// read as `Unknown`; a tree that disagrees with its shape is never an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NullabilityTree {
    #[serde(default)]
    pub state: NullabilityState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<Box<NullabilityTree>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<NullabilityTree>,
}

impl NullabilityTree {
    pub fn new(state: NullabilityState) -> Self {
        Self {
            state,
            element: None,
            args: Vec::new(),
        }
    }

    pub fn nullable() -> Self {
        Self::new(NullabilityState::Nullable)
    }

    pub fn not_nullable() -> Self {
        Self::new(NullabilityState::NotNullable)
    }

    pub fn unknown() -> Self {
        Self::new(NullabilityState::Unknown)
    }

    pub fn with_element(mut self, element: NullabilityTree) -> Self {
        self.element = Some(Box::new(element));
        self
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = NullabilityTree>) -> Self {
        self.args = args.into_iter().collect();
        self
    }

    pub fn is_nullable(&self) -> bool {
        self.state == NullabilityState::Nullable
    }

    pub fn element(&self) -> Option<&NullabilityTree> {
        self.element.as_deref()
    }

    /// Nullability of the `index`-th type argument, if recorded.
    pub fn arg(&self, index: usize) -> Option<&NullabilityTree> {
        self.args.get(index)
    }
}
