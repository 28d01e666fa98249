//! Core value type for the language runtime.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::LtMap;
use crate::error::CoercionError;
use crate::types::Type;

/// The payload of a table value: string keys bound to nested values.
pub type LtTable = LtMap<Arc<str>, LangValue>;

/// A runtime value of the language.
///
/// Values are immutable and cheaply cloneable. Tables are persistent maps,
/// so the table operations return a new value that shares structure with
/// the receiver.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LangValue {
    /// 64-bit signed integer.
    Integer(i64),
    /// String value.
    String(Arc<str>),
    /// Table of string keys to values, nesting to any depth.
    Table(LtTable),
}

impl LangValue {
    /// Creates an integer value.
    #[must_use]
    pub const fn integer(n: i64) -> Self {
        Self::Integer(n)
    }

    /// Creates a string value.
    #[must_use]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Self::String(s.into())
    }

    /// Creates an empty table.
    #[must_use]
    pub fn table() -> Self {
        Self::Table(LtTable::new())
    }

    /// Returns the type of this value.
    #[must_use]
    pub const fn value_type(&self) -> Type {
        match self {
            Self::Integer(_) => Type::Integer,
            Self::String(_) => Type::String,
            Self::Table(_) => Type::Table,
        }
    }

    /// Returns true if this value is an integer.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns true if this value is a string.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns true if this value is a table.
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }

    /// Coerces this value to an integer.
    ///
    /// Strings are parsed as decimal integers. A string that does not parse
    /// (including one that overflows `i64`) yields `0` rather than an error;
    /// existing callers depend on this fallback.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] if this value is a table.
    pub fn as_integer(&self) -> crate::Result<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::String(s) => Ok(s.parse().unwrap_or(0)),
            Self::Table(_) => Err(self.mismatch(Type::Integer)),
        }
    }

    /// Coerces this value to a string.
    ///
    /// Integers are rendered in decimal; strings are borrowed as-is.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] if this value is a table.
    pub fn as_string(&self) -> crate::Result<Cow<'_, str>> {
        match self {
            Self::Integer(n) => Ok(Cow::Owned(n.to_string())),
            Self::String(s) => Ok(Cow::Borrowed(&**s)),
            Self::Table(_) => Err(self.mismatch(Type::String)),
        }
    }

    /// Views this value as a table.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] if this value is not a table.
    pub fn as_table(&self) -> crate::Result<&LtTable> {
        match self {
            Self::Table(t) => Ok(t),
            _ => Err(self.mismatch(Type::Table)),
        }
    }

    /// Returns a table with `key` bound to `value`.
    ///
    /// Any previous binding for `key` is replaced. The receiver is unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] if this value is not a table.
    pub fn set_key(
        &self,
        key: impl Into<Arc<str>>,
        value: LangValue,
    ) -> crate::Result<Self> {
        let table = self.table_for("set-key")?;
        Ok(Self::Table(table.insert(key.into(), value)))
    }

    /// Returns a table without a binding for `key`.
    ///
    /// Removing a key that is not bound succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] if this value is not a table.
    pub fn remove_key(&self, key: &str) -> crate::Result<Self> {
        let table = self.table_for("remove-key")?;
        Ok(Self::Table(table.remove(key)))
    }

    /// Looks up the value bound to `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] if this value is not a table.
    pub fn get_key(&self, key: &str) -> crate::Result<Option<&LangValue>> {
        Ok(self.table_for("get-key")?.get(key))
    }

    /// Returns every bound key, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] if this value is not a table.
    pub fn keys(&self) -> crate::Result<Vec<&str>> {
        Ok(self.table_for("keys")?.keys().map(|k| &**k).collect())
    }

    /// Returns the number of bindings in a table.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] if this value is not a table.
    pub fn len(&self) -> crate::Result<usize> {
        Ok(self.table_for("len")?.len())
    }

    /// Returns true if a table has no bindings.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] if this value is not a table.
    pub fn is_empty(&self) -> crate::Result<bool> {
        Ok(self.table_for("is-empty")?.is_empty())
    }

    /// Combines two values.
    ///
    /// - integer + integer adds (wrapping on overflow)
    /// - any other mix of integers and strings concatenates their string forms
    /// - a table on either side has no result
    #[must_use]
    pub fn combine(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(Self::Integer(a.wrapping_add(*b))),
            (Self::Table(_), _) | (_, Self::Table(_)) => None,
            _ => {
                let mut joined = self.as_string().ok()?.into_owned();
                joined.push_str(&other.as_string().ok()?);
                Some(Self::from(joined))
            }
        }
    }

    /// Combines two values, failing instead of returning `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] naming the first operand that is not a
    /// scalar.
    pub fn try_combine(&self, other: &Self) -> crate::Result<Self> {
        self.combine(other).ok_or_else(|| {
            let culprit = if Type::Scalar.accepts(self.value_type()) {
                other
            } else {
                self
            };
            culprit.mismatch(Type::Scalar).in_operation("combine")
        })
    }

    fn table_for(&self, operation: &'static str) -> crate::Result<&LtTable> {
        self.as_table().map_err(|e| e.in_operation(operation))
    }

    fn mismatch(&self, expected: Type) -> CoercionError {
        CoercionError::new(expected, self.value_type())
    }
}

/// Concatenation of every key in iteration order.
///
/// Tables compare and hash by this string alone; bound values play no part.
fn key_signature(table: &LtTable) -> String {
    table.keys().map(|k| &**k).collect()
}

impl PartialEq for LangValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Table(a), Self::Table(b)) => a
                .keys()
                .flat_map(|k| k.bytes())
                .eq(b.keys().flat_map(|k| k.bytes())),
            _ => false,
        }
    }
}

impl Eq for LangValue {}

impl Hash for LangValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Integer(n) => n.hash(state),
            Self::String(s) => s.hash(state),
            Self::Table(t) => key_signature(t).hash(state),
        }
    }
}

impl Add for &LangValue {
    type Output = Option<LangValue>;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs)
    }
}

impl fmt::Debug for LangValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Table(t) => write!(f, "{t:?}"),
        }
    }
}

impl fmt::Display for LangValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Table(t) => {
                write!(f, "{{")?;
                for (i, (k, v)) in t.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k} {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenience From implementations

impl From<i64> for LangValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for LangValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<&str> for LangValue {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for LangValue {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for LangValue {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<LtTable> for LangValue {
    fn from(t: LtTable) -> Self {
        Self::Table(t)
    }
}
