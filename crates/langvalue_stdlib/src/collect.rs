//! Recursive traversal of nested tables.

use langvalue_foundation::{LangValue, LtSet};

/// Collects every string reachable from `root` through nested tables.
///
/// A non-table root yields an empty set. Integers are ignored; duplicates
/// collapse.
#[must_use]
pub fn collect_strings(root: &LangValue) -> LtSet<LangValue> {
    let Ok(table) = root.as_table() else {
        return LtSet::new();
    };

    table.values().fold(LtSet::new(), |found, value| match value {
        LangValue::String(_) => found.insert(value.clone()),
        LangValue::Table(_) => found.union(&collect_strings(value)),
        LangValue::Integer(_) => found,
    })
}
