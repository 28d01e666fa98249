//! Type descriptors for coercion checks.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type descriptor for a [`LangValue`](crate::LangValue) variant.
///
/// Used to report what an operation needed and what it was handed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// 64-bit signed integer.
    Integer,
    /// UTF-8 string.
    String,
    /// Table of string keys to values.
    Table,
    /// Integer or string (the operands accepted by combine).
    Scalar,
}

impl Type {
    /// Checks if a value type is accepted by this type.
    ///
    /// - `Scalar` accepts `Integer` and `String`
    /// - Every other type must match exactly
    #[must_use]
    pub const fn accepts(self, value_type: Type) -> bool {
        matches!(
            (self, value_type),
            (Self::Integer, Self::Integer)
                | (Self::String, Self::String)
                | (Self::Table, Self::Table)
                | (Self::Scalar, Self::Integer | Self::String | Self::Scalar)
        )
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::String => write!(f, "string"),
            Self::Table => write!(f, "table"),
            Self::Scalar => write!(f, "scalar"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
