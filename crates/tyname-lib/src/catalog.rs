//! JSON metadata: declared types with their members, and standalone shape
//! documents.
//!
//! ```json
//! { "types": [
//!     { "name": "Widget", "full_name": "Demo.Widget", "nullable_context": 1,
//!       "members": [
//!         { "kind": "property", "name": "Tags",
//!           "type": { "kind": "generic", "name": "List`1",
//!                     "args": [{ "kind": "primitive", "name": "string" }] },
//!           "nullable": [2, 1] } ] } ] }
//! ```
//!
//! A member's nullability comes from, in order: an explicit `nullability`
//! tree, its `nullable` flag bytes, or the declaring type's
//! `nullable_context`.

use serde::Deserialize;
use tracing::debug;
use tyname_core::{NullabilityTree, TypeName, TypeShape};

use crate::json::{from_str_with_path, from_value_with_path};
use crate::{Error, Member, MemberKind, NullableFlags, Result};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    types: Vec<CatalogType>,
}

impl Catalog {
    pub fn from_json(src: &str) -> Result<Self> {
        from_str_with_path(src)
    }

    pub fn types(&self) -> &[CatalogType] {
        &self.types
    }

    /// Find a declared type by simple or full name.
    pub fn find_type(&self, name: &str) -> Result<&CatalogType> {
        self.types
            .iter()
            .find(|ty| ty.name == name || ty.full_name.as_deref() == Some(name))
            .ok_or_else(|| Error::UnknownType(name.to_string()))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CatalogType {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    /// Flag byte for members that record none of their own.
    #[serde(default)]
    pub nullable_context: u8,
    #[serde(default)]
    pub members: Vec<CatalogMember>,
}

impl CatalogType {
    /// The declaring type itself, as a named shape.
    pub fn shape(&self) -> TypeShape {
        let name = match &self.full_name {
            Some(full) => TypeName::new(&self.name, full),
            None => TypeName::simple(&self.name),
        };
        TypeShape::from(name)
    }

    pub fn member(&self, name: &str) -> Result<Member> {
        self.members
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.to_member(self.nullable_context))
            .ok_or_else(|| Error::UnknownMember {
                ty: self.name.clone(),
                member: name.to_string(),
            })
    }

    /// All members, in declaration order.
    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.members.iter().map(|m| m.to_member(self.nullable_context))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CatalogMember {
    pub kind: MemberKind,
    pub name: String,
    #[serde(default, rename = "type")]
    pub ty: Option<TypeShape>,
    #[serde(default)]
    pub nullable: Option<Vec<u8>>,
    #[serde(default)]
    pub nullability: Option<NullabilityTree>,
}

impl CatalogMember {
    pub fn to_member(&self, context: u8) -> Member {
        let member = Member::new(self.kind, &self.name, self.ty.clone());

        let nullability = match (&self.nullability, &self.ty) {
            (Some(tree), _) => Some(tree.clone()),
            (None, Some(shape)) => {
                let bytes = self.nullable.clone().unwrap_or_default();
                Some(NullableFlags::new(bytes).with_context(context).decode(shape))
            }
            (None, None) => None,
        };

        debug!(
            member = %self.name,
            kind = %self.kind,
            annotated = nullability.is_some(),
            "resolved catalog member"
        );

        match nullability {
            Some(tree) => member.with_nullability(tree),
            None => member,
        }
    }
}

/// A shape to render, with optional nullability.
///
/// Accepts `{ "type": <shape>, "nullability": <tree> }` or a bare shape.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ShapeDocument {
    #[serde(rename = "type")]
    pub ty: TypeShape,
    #[serde(default)]
    pub nullability: Option<NullabilityTree>,
}

impl ShapeDocument {
    pub fn from_json(src: &str) -> Result<Self> {
        let value: serde_json::Value = from_str_with_path(src)?;
        if value.get("type").is_some() {
            return from_value_with_path(value);
        }
        let ty = from_value_with_path(value)?;
        Ok(Self {
            ty,
            nullability: None,
        })
    }
}
