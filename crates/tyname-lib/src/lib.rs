#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Readable type strings from type shapes.
//!
//! # Example
//!
//! ```
//! use tyname_lib::{NullabilityTree, Primitive, RenderOptions, Renderer, TypeShape};
//!
//! let shape = TypeShape::generic(
//!     "List`1",
//!     "System.Collections.Generic.List`1",
//!     [Primitive::String.into()],
//! );
//! let nullability = NullabilityTree::nullable().with_args([NullabilityTree::nullable()]);
//!
//! let text = Renderer::new(RenderOptions::default()).render(&shape, Some(&nullability));
//! assert_eq!(text, "List<string?>?");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod flags;
pub mod member;
pub mod render;

mod json;

#[cfg(test)]
mod catalog_tests;

pub use tyname_core::{NullabilityState, NullabilityTree, Primitive, TypeKind, TypeName, TypeShape};

pub use catalog::{Catalog, CatalogMember, CatalogType, ShapeDocument};
pub use config::RenderOptions;
pub use error::{Error, Result};
pub use flags::NullableFlags;
pub use member::{Member, MemberKind, NullabilitySource, render_member};
pub use render::{Renderer, render_type};
