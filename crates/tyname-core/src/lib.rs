#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for tyname type descriptions.
//!
//! Two parallel trees:
//! - **Shape** (`TypeShape`): what a declared type is made of
//! - **Nullability** (`NullabilityTree`): reference nullability facts per shape node
//!
//! Both are plain immutable data. Nothing here depends on a live
//! introspection API, so producers can be anything from hand-built test
//! fixtures to metadata readers.

mod nullability;
mod primitive;
mod shape;
pub mod utils;

#[cfg(test)]
mod shape_tests;

pub use nullability::{NullabilityState, NullabilityTree};
pub use primitive::Primitive;
pub use shape::{TypeKind, TypeName, TypeShape};
