//! Type tags for declared parameter types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Declared type of a parameter.
///
/// A descriptor carries a type tag; the converter turns a raw token string
/// into a [`crate::Value`] of the tagged type. `Custom` tags are resolved
/// through the caller's converter registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeTag {
    /// Text, passed through verbatim.
    Text,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Boolean.
    Bool,
    /// One of a fixed set of named variants.
    Enum(Vec<String>),
    /// A caller-defined tag, resolved through a registered converter.
    Custom(String),
}

impl TypeTag {
    /// Creates an enum tag from variant names.
    #[must_use]
    pub fn enumeration<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum(variants.into_iter().map(Into::into).collect())
    }

    /// Creates a custom tag with the given name.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Returns true if this tag is handled by the default converter table.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Int | Self::Float | Self::Bool | Self::Enum(_)
        )
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Bool => write!(f, "bool"),
            Self::Enum(variants) => write!(f, "enum[{}]", variants.join("|")),
            Self::Custom(name) => write!(f, "{name}"),
        }
    }
}
