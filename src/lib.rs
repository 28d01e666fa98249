//! `LangValue` - Runtime value of a small language
//!
//! This crate re-exports all layers of the `LangValue` workspace for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: langvalue_stdlib     — Fault-tolerant folds, recursive string collection
//! Layer 0: langvalue_foundation — Core types (LangValue, Type, CoercionError)
//! ```

pub use langvalue_foundation as foundation;
pub use langvalue_stdlib as stdlib;

pub use langvalue_foundation::{CoercionError, LangValue, LtSet, LtTable, Type};
pub use langvalue_stdlib::{collect_strings, concat_strings, sum_integers};
