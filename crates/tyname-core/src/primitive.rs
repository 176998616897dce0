//! Intrinsic types and their alias spellings.

use std::fmt;

/// Intrinsic data types of the runtime type system.
///
/// Serialized by canonical name (`Int32`); the alias (`int`) and the full
/// name (`System.Int32`) are accepted when deserializing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Primitive {
    #[serde(alias = "sbyte", alias = "System.SByte")]
    SByte,
    #[serde(alias = "byte", alias = "System.Byte")]
    Byte,
    #[serde(alias = "short", alias = "System.Int16")]
    Int16,
    #[serde(alias = "ushort", alias = "System.UInt16")]
    UInt16,
    #[serde(alias = "int", alias = "System.Int32")]
    Int32,
    #[serde(alias = "uint", alias = "System.UInt32")]
    UInt32,
    #[serde(alias = "long", alias = "System.Int64")]
    Int64,
    #[serde(alias = "ulong", alias = "System.UInt64")]
    UInt64,
    #[serde(alias = "nint", alias = "System.IntPtr")]
    IntPtr,
    #[serde(alias = "nuint", alias = "System.UIntPtr")]
    UIntPtr,
    #[serde(alias = "float", alias = "System.Single")]
    Single,
    #[serde(alias = "double", alias = "System.Double")]
    Double,
    #[serde(alias = "decimal", alias = "System.Decimal")]
    Decimal,
    #[serde(alias = "bool", alias = "System.Boolean")]
    Boolean,
    #[serde(alias = "char", alias = "System.Char")]
    Char,
    #[serde(alias = "string", alias = "System.String")]
    String,
    #[serde(alias = "object", alias = "System.Object")]
    Object,
    #[serde(alias = "void", alias = "System.Void")]
    Void,
}

impl Primitive {
    pub const ALL: [Primitive; 18] = [
        Primitive::SByte,
        Primitive::Byte,
        Primitive::Int16,
        Primitive::UInt16,
        Primitive::Int32,
        Primitive::UInt32,
        Primitive::Int64,
        Primitive::UInt64,
        Primitive::IntPtr,
        Primitive::UIntPtr,
        Primitive::Single,
        Primitive::Double,
        Primitive::Decimal,
        Primitive::Boolean,
        Primitive::Char,
        Primitive::String,
        Primitive::Object,
        Primitive::Void,
    ];

    /// Canonical runtime name, e.g. `Int32`.
    pub const fn name(self) -> &'static str {
        match self {
            Primitive::SByte => "SByte",
            Primitive::Byte => "Byte",
            Primitive::Int16 => "Int16",
            Primitive::UInt16 => "UInt16",
            Primitive::Int32 => "Int32",
            Primitive::UInt32 => "UInt32",
            Primitive::Int64 => "Int64",
            Primitive::UInt64 => "UInt64",
            Primitive::IntPtr => "IntPtr",
            Primitive::UIntPtr => "UIntPtr",
            Primitive::Single => "Single",
            Primitive::Double => "Double",
            Primitive::Decimal => "Decimal",
            Primitive::Boolean => "Boolean",
            Primitive::Char => "Char",
            Primitive::String => "String",
            Primitive::Object => "Object",
            Primitive::Void => "Void",
        }
    }

    /// Namespace-qualified name, e.g. `System.Int32`.
    pub const fn full_name(self) -> &'static str {
        match self {
            Primitive::SByte => "System.SByte",
            Primitive::Byte => "System.Byte",
            Primitive::Int16 => "System.Int16",
            Primitive::UInt16 => "System.UInt16",
            Primitive::Int32 => "System.Int32",
            Primitive::UInt32 => "System.UInt32",
            Primitive::Int64 => "System.Int64",
            Primitive::UInt64 => "System.UInt64",
            Primitive::IntPtr => "System.IntPtr",
            Primitive::UIntPtr => "System.UIntPtr",
            Primitive::Single => "System.Single",
            Primitive::Double => "System.Double",
            Primitive::Decimal => "System.Decimal",
            Primitive::Boolean => "System.Boolean",
            Primitive::Char => "System.Char",
            Primitive::String => "System.String",
            Primitive::Object => "System.Object",
            Primitive::Void => "System.Void",
        }
    }

    /// Source-level alias spelling, e.g. `int`.
    ///
    /// `Void` has none and always renders by name.
    pub const fn alias(self) -> Option<&'static str> {
        let alias = match self {
            Primitive::SByte => "sbyte",
            Primitive::Byte => "byte",
            Primitive::Int16 => "short",
            Primitive::UInt16 => "ushort",
            Primitive::Int32 => "int",
            Primitive::UInt32 => "uint",
            Primitive::Int64 => "long",
            Primitive::UInt64 => "ulong",
            Primitive::IntPtr => "nint",
            Primitive::UIntPtr => "nuint",
            Primitive::Single => "float",
            Primitive::Double => "double",
            Primitive::Decimal => "decimal",
            Primitive::Boolean => "bool",
            Primitive::Char => "char",
            Primitive::String => "string",
            Primitive::Object => "object",
            Primitive::Void => return None,
        };
        Some(alias)
    }

    /// `String` and `Object` are references; everything else, `Void`
    /// included, carries no reference nullability.
    pub const fn is_value_type(self) -> bool {
        !matches!(self, Primitive::String | Primitive::Object)
    }

    /// Look up by canonical name, full name, or alias.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name || p.full_name() == name || p.alias() == Some(name))
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
