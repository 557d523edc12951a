//! Converted argument values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::TypeTag;

/// A converted argument value.
///
/// Produced by a type converter from a raw token string, and handed to an
/// operation in declared-signature order. `Nil` stands for an optional
/// parameter that was never bound.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Absent optional parameter.
    Nil,
    /// Text value.
    Text(String),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Matched enum variant, in its canonical casing.
    Enum(String),
}

impl Value {
    /// Returns the type tag this value satisfies, where one exists.
    ///
    /// `Nil` and `Enum` carry no complete tag (an enum value does not
    /// remember its sibling variants), so they return `None`.
    #[must_use]
    pub const fn type_tag(&self) -> Option<TypeTag> {
        match self {
            Self::Text(_) => Some(TypeTag::Text),
            Self::Int(_) => Some(TypeTag::Int),
            Self::Float(_) => Some(TypeTag::Float),
            Self::Bool(_) => Some(TypeTag::Bool),
            Self::Nil | Self::Enum(_) => None,
        }
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Attempts to extract a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Enum(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    ///
    /// Integers promote to float.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Text(s) | Self::Enum(s) => write!(f, "{s}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
