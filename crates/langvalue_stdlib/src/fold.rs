//! Fault-tolerant folds over sequences of values.

use langvalue_foundation::LangValue;

/// Adds every integer in `values`, starting from `0`.
///
/// Strings and tables are skipped, not coerced.
#[must_use]
pub fn sum_integers<'a, I>(values: I) -> LangValue
where
    I: IntoIterator<Item = &'a LangValue>,
{
    values
        .into_iter()
        .filter(|v| v.is_integer())
        .fold(LangValue::integer(0), accumulate)
}

/// Combines every element onto an empty string, left to right.
///
/// Integers are stringified on the way in. An element that cannot be
/// combined (a table) leaves the running result unchanged.
#[must_use]
pub fn concat_strings<'a, I>(values: I) -> LangValue
where
    I: IntoIterator<Item = &'a LangValue>,
{
    values.into_iter().fold(LangValue::string(""), accumulate)
}

fn accumulate(acc: LangValue, value: &LangValue) -> LangValue {
    acc.combine(value).unwrap_or(acc)
}
