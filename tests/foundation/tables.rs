//! Integration tests for table operations and table equality.

use langvalue_foundation::{LangValue, Type};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_value(v: &LangValue) -> u64 {
    let mut hasher = DefaultHasher::new();
    v.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Table Operations
// =============================================================================

#[test]
fn set_then_get() {
    let t = LangValue::table();
    let t = t.set_key("k", LangValue::integer(10)).unwrap();
    assert_eq!(t.get_key("k").unwrap(), Some(&LangValue::integer(10)));
}

#[test]
fn set_overwrites() {
    let t = LangValue::table()
        .set_key("k", LangValue::integer(10))
        .and_then(|t| t.set_key("k", LangValue::string("ten")))
        .unwrap();
    assert_eq!(t.len(), Ok(1));
    assert_eq!(t.get_key("k").unwrap(), Some(&LangValue::string("ten")));
}

#[test]
fn get_absent_key() {
    assert_eq!(LangValue::table().get_key("nope").unwrap(), None);
}

#[test]
fn remove_present_key() {
    let t = LangValue::table()
        .set_key("a", LangValue::integer(1))
        .and_then(|t| t.set_key("b", LangValue::integer(2)))
        .and_then(|t| t.remove_key("a"))
        .unwrap();
    assert_eq!(t.keys().unwrap(), vec!["b"]);
}

#[test]
fn remove_absent_key_is_noop() {
    let t = LangValue::table()
        .set_key("a", LangValue::integer(1))
        .unwrap();
    let after = t.remove_key("missing").unwrap();
    assert_eq!(after.keys().unwrap(), t.keys().unwrap());
    assert_eq!(after.get_key("a").unwrap(), Some(&LangValue::integer(1)));
}

#[test]
fn keys_lists_every_binding() {
    let t = LangValue::table()
        .set_key("SomeString", LangValue::string("x"))
        .and_then(|t| t.set_key("SomeInt", LangValue::integer(1)))
        .unwrap();
    assert_eq!(t.keys().unwrap(), vec!["SomeInt", "SomeString"]);
}

#[test]
fn table_ops_on_integer_fail() {
    let n = LangValue::integer(3);
    assert!(n.set_key("k", LangValue::integer(1)).is_err());
    assert!(n.remove_key("k").is_err());
    assert!(n.get_key("k").is_err());
    assert!(n.keys().is_err());
    assert!(n.len().is_err());
}

#[test]
fn table_ops_on_string_report_types() {
    let err = LangValue::string("s").get_key("k").unwrap_err();
    assert_eq!(err.expected, Type::Table);
    assert_eq!(err.actual, Type::String);
}

#[test]
fn nested_tables() {
    let sub = LangValue::table()
        .set_key("inner", LangValue::integer(50))
        .unwrap();
    let t = LangValue::table().set_key("sub", sub).unwrap();
    let inner = t
        .get_key("sub")
        .unwrap()
        .and_then(|s| s.get_key("inner").ok().flatten());
    assert_eq!(inner, Some(&LangValue::integer(50)));
}

// =============================================================================
// Table Equality
// =============================================================================

#[test]
fn same_keys_different_values_compare_equal() {
    // Tables compare by their keys only; the bound values are not consulted.
    let a = LangValue::table()
        .set_key("k", LangValue::integer(1))
        .unwrap();
    let b = LangValue::table()
        .set_key("k", LangValue::string("completely different"))
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_value(&a), hash_value(&b));
}

#[test]
fn different_keys_compare_unequal() {
    let a = LangValue::table()
        .set_key("a", LangValue::integer(1))
        .unwrap();
    let b = LangValue::table()
        .set_key("b", LangValue::integer(1))
        .unwrap();
    assert_ne!(a, b);
}

#[test]
fn empty_tables_are_equal() {
    assert_eq!(LangValue::table(), LangValue::table());
}

#[test]
fn insertion_order_does_not_matter() {
    let a = LangValue::table()
        .set_key("x", LangValue::integer(1))
        .and_then(|t| t.set_key("y", LangValue::integer(2)))
        .unwrap();
    let b = LangValue::table()
        .set_key("y", LangValue::integer(2))
        .and_then(|t| t.set_key("x", LangValue::integer(1)))
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_value(&a), hash_value(&b));
}
