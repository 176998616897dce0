//! Binding layer: properties, fields, parameters and events.
//!
//! A `Member` pairs a declared type with whatever nullability facts its
//! producer could supply. Member kinds differ only in how a missing type is
//! reported; rendering always goes through [`Renderer`].

use std::fmt;

use tyname_core::{NullabilityTree, TypeShape};

use crate::{Error, RenderOptions, Renderer, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Property,
    Field,
    Parameter,
    Event,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MemberKind::Property => "property",
            MemberKind::Field => "field",
            MemberKind::Parameter => "parameter",
            MemberKind::Event => "event",
        };
        f.write_str(text)
    }
}

/// A declared member and its type.
///
/// For events the declared type is the handler (delegate) type.
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    name: String,
    kind: MemberKind,
    declared_type: Option<TypeShape>,
    nullability: Option<NullabilityTree>,
}

impl Member {
    pub fn new(kind: MemberKind, name: impl Into<String>, declared_type: Option<TypeShape>) -> Self {
        Self {
            name: name.into(),
            kind,
            declared_type,
            nullability: None,
        }
    }

    pub fn property(name: impl Into<String>, ty: TypeShape) -> Self {
        Self::new(MemberKind::Property, name, Some(ty))
    }

    pub fn field(name: impl Into<String>, ty: TypeShape) -> Self {
        Self::new(MemberKind::Field, name, Some(ty))
    }

    pub fn parameter(name: impl Into<String>, ty: TypeShape) -> Self {
        Self::new(MemberKind::Parameter, name, Some(ty))
    }

    /// An event whose handler type may be unresolvable.
    pub fn event(name: impl Into<String>, handler: Option<TypeShape>) -> Self {
        Self::new(MemberKind::Event, name, handler)
    }

    pub fn with_nullability(mut self, nullability: NullabilityTree) -> Self {
        self.nullability = Some(nullability);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    pub fn declared_type(&self) -> Option<&TypeShape> {
        self.declared_type.as_ref()
    }

    pub fn nullability(&self) -> Option<&NullabilityTree> {
        self.nullability.as_ref()
    }

    /// Render the member's type with its attached nullability.
    pub fn readable_type(&self, options: &RenderOptions) -> Result<String> {
        let shape = self.require_type()?;
        Ok(Renderer::new(*options).render(shape, self.nullability.as_ref()))
    }

    /// Render the member's type with nullability taken from `source`.
    ///
    /// The attached tree, if any, is ignored.
    pub fn readable_type_with<S>(&self, source: &S, options: &RenderOptions) -> Result<String>
    where
        S: NullabilitySource + ?Sized,
    {
        let shape = self.require_type()?;
        let nullability = source.nullability(self);
        Ok(Renderer::new(*options).render(shape, nullability.as_ref()))
    }

    fn require_type(&self) -> Result<&TypeShape> {
        match (&self.declared_type, self.kind) {
            (Some(shape), _) => Ok(shape),
            (None, MemberKind::Event) => Err(Error::MissingHandlerType(self.name.clone())),
            (None, kind) => Err(Error::InvalidArgument(format!(
                "{kind} `{}` has no declared type",
                self.name
            ))),
        }
    }
}

/// Supplies nullability facts for a member on demand.
///
/// Implementations must return a tree shaped like the member's declared
/// type, or `None` when nothing is known; never a partial guess.
pub trait NullabilitySource {
    fn nullability(&self, member: &Member) -> Option<NullabilityTree>;
}

impl<F> NullabilitySource for F
where
    F: Fn(&Member) -> Option<NullabilityTree>,
{
    fn nullability(&self, member: &Member) -> Option<NullabilityTree> {
        self(member)
    }
}

/// Render a member handle that may be absent.
pub fn render_member(member: Option<&Member>, options: &RenderOptions) -> Result<String> {
    let member = member.ok_or_else(|| Error::InvalidArgument("member is required".to_string()))?;
    member.readable_type(options)
}
