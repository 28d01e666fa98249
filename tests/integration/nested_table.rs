//! A table holding scalars and a sub-table, built and then walked.

use langvalue::{LangValue, LtSet, collect_strings};

fn build() -> LangValue {
    let subtable = LangValue::table()
        .set_key("SubtableInt", LangValue::integer(50))
        .and_then(|t| t.set_key("SubtableString", LangValue::string("Another string")))
        .unwrap();

    LangValue::table()
        .set_key("SomeInt", LangValue::integer(10))
        .and_then(|t| t.set_key("SomeString", LangValue::string("Some string")))
        .and_then(|t| t.set_key("Subtable", subtable))
        .unwrap()
}

#[test]
fn collects_strings_from_table_and_subtable() {
    let expected: LtSet<LangValue> = [
        LangValue::string("Some string"),
        LangValue::string("Another string"),
    ]
    .into_iter()
    .collect();

    assert_eq!(collect_strings(&build()), expected);
}

#[test]
fn subtable_is_reachable_by_key() {
    let t = build();
    let sub = t.get_key("Subtable").unwrap().unwrap();
    assert_eq!(sub.keys().unwrap(), vec!["SubtableInt", "SubtableString"]);
    assert_eq!(
        sub.get_key("SubtableInt").unwrap(),
        Some(&LangValue::integer(50))
    );
}

#[test]
fn removing_subtable_drops_its_strings() {
    let t = build().remove_key("Subtable").unwrap();
    let found = collect_strings(&t);
    assert_eq!(found.len(), 1);
    assert!(found.contains(&LangValue::string("Some string")));
}

#[test]
fn display_renders_nested_tables() {
    assert_eq!(
        format!("{}", build()),
        "{SomeInt 10, SomeString Some string, Subtable {SubtableInt 50, SubtableString Another string}}"
    );
}
