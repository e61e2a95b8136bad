use anyhow::{Context, Result};

use crate::{Container, Key, NestedView, Value};

#[test]
fn set_then_get() {
    let root = Container::new();
    let view = NestedView::new(root.clone());

    assert!(!view.exists("key"));
    view.set_raw("key", "value");

    assert!(view.exists("key"));
    assert_eq!(view.get_raw("key"), Some(Value::from("value")));
    assert_eq!(root.get("key"), Some(Value::from("value")));

    view.set_raw("key", 2);
    assert_eq!(view.get_raw("key"), Some(Value::from(2)));
    assert_eq!(view.len(), 1);
}

#[test]
fn remove() {
    let view = NestedView::default();
    view.set_raw("key", "value");

    assert_eq!(view.remove_raw("key"), Some(Value::from("value")));
    assert!(!view.exists("key"));
    assert_eq!(view.remove_raw("key"), None);
}

#[test]
fn exists_is_presence_only() {
    let view = NestedView::default();
    view.set_raw("null", Value::Null);
    view.set_raw("false", false);
    view.set_raw("empty", "");
    view.set_raw("list", Container::new());

    for key in ["null", "false", "empty", "list"] {
        assert!(view.exists(key), "{key} should exist");
    }
}

#[test]
fn get_raw_does_not_wrap() -> Result<()> {
    let inner = Container::new();
    let view = NestedView::default();
    view.set_raw("inner", inner.clone());

    let raw = view.get_raw("inner").context("missing inner")?;
    let raw = raw.into_container().context("expected container")?;
    assert!(raw.ptr_eq(&inner));
    Ok(())
}

#[test]
fn caller_mutations_are_visible() -> Result<()> {
    let root = Container::new();
    let view = NestedView::new(root.clone());

    root.insert("late", 1);
    assert_eq!(view.require("late")?.as_u32(), Some(1));

    root.remove("late");
    assert!(view.lookup("late").is_none());
    Ok(())
}

#[test]
fn integer_and_string_keys_alias() {
    let view = NestedView::default();
    view.set_raw("1", "one");

    assert!(view.exists(1));
    assert_eq!(view.get_raw(1), Some(Value::from("one")));
    assert_eq!(view.keys(), [Key::Index(1)]);

    view.set_raw("01", "zero one");
    assert_eq!(view.len(), 2);
    assert_eq!(view.keys(), [Key::Index(1), Key::from("01")]);
}

#[test]
fn overwrite_keeps_order() {
    let view = NestedView::default();
    view.set_raw("a", 1);
    view.set_raw("b", 2);
    view.set_raw("a", 3);

    assert_eq!(view.keys(), [Key::from("a"), Key::from("b")]);
    assert_eq!(view.to_string(), "{a: 3, b: 2}");

    view.remove_raw("a");
    view.set_raw("a", 4);
    assert_eq!(view.to_string(), "{b: 2, a: 4}");
}

#[test]
fn display() {
    let inner = Container::new();
    inner.insert("x", -1);
    inner.insert("y", 1.5);

    let root = Container::from(vec![
        Value::from(inner),
        Value::from("quoted"),
        Value::Null,
        Value::from(true),
    ]);

    assert_eq!(root.to_string(), "[{x: -1, y: 1.5}, \"quoted\", null, true]");
}

#[test]
fn remove_closes_gap() {
    let view = NestedView::default();

    for n in 0..1000 {
        view.set_raw(n.to_string(), n);
    }

    view.set_raw("500", "overwritten");
    assert_eq!(view.keys()[500], Key::Index(500));

    view.remove_raw(500);
    assert_eq!(view.len(), 999);

    let keys = view.keys();
    assert_eq!(keys[499], Key::Index(499));
    assert_eq!(keys[500], Key::Index(501));
    assert_eq!(keys.last(), Some(&Key::Index(999)));
    assert_eq!(view.get_raw("999"), Some(Value::from(999)));
}

#[test]
fn push_at_largest_index() {
    let container = Container::new();
    container.insert(0, "zero");
    container.insert(usize::MAX, "max");

    assert_eq!(container.push("pushed"), None);
    assert_eq!(container.keys(), [Key::Index(0), Key::Index(usize::MAX)]);
    assert_eq!(container.get(0), Some(Value::from("zero")));

    container.remove(usize::MAX);
    assert_eq!(container.push("pushed"), Some(1));
}

#[test]
fn equality_is_ordered() {
    let a: Container = [("x", 1), ("y", 2)].into_iter().collect();
    let b: Container = [("y", 2), ("x", 1)].into_iter().collect();
    let c: Container = [("x", 1), ("y", 2)].into_iter().collect();

    assert_ne!(a, b);
    assert_eq!(a, c);
}
