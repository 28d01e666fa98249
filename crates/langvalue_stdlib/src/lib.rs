//! Folds and recursive traversals over `LangValue`.
//!
//! Unlike the accessors in `langvalue_foundation`, every function here
//! tolerates heterogeneous input: an element of the wrong variant is skipped
//! and the rest of the input is still processed.
//!
//! - Folds ([`sum_integers`], [`concat_strings`])
//! - Traversals ([`collect_strings`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collect;
pub mod fold;

pub use collect::collect_strings;
pub use fold::{concat_strings, sum_integers};
