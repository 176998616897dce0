//! Rendering options.

/// Spelling choices applied at every level of a rendered type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spell named and generic types with their qualified path.
    pub(crate) use_full_names: bool,
    /// Spell intrinsic types by alias (`int` rather than `Int32`).
    pub(crate) use_alias_names: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            use_full_names: false,
            use_alias_names: true,
        }
    }
}

impl RenderOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to use qualified names.
    pub fn full_names(mut self, value: bool) -> Self {
        self.use_full_names = value;
        self
    }

    /// Set whether to use intrinsic type aliases.
    pub fn alias_names(mut self, value: bool) -> Self {
        self.use_alias_names = value;
        self
    }

    pub fn uses_full_names(&self) -> bool {
        self.use_full_names
    }

    pub fn uses_alias_names(&self) -> bool {
        self.use_alias_names
    }
}
