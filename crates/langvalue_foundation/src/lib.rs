//! Core value type, coercions, and persistent tables for `LangValue`.
//!
//! This crate provides:
//! - [`LangValue`] - The runtime value of the language (integer, string, table)
//! - [`Type`] - Type descriptors naming each variant
//! - [`CoercionError`] - The error raised when a value holds the wrong variant
//! - Persistent collections ([`LtMap`], [`LtSet`]) backing tables and result sets

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod types;
pub mod value;

pub use collections::{LtMap, LtSet};
pub use error::CoercionError;
pub use types::Type;
pub use value::{LangValue, LtTable};

/// Result type for value operations.
pub type Result<T> = std::result::Result<T, CoercionError>;
