use anyhow::{Context, Result};

use crate::{Any, Container, ErrorKind, Key, NestedView, Opaque, Value};

fn sample() -> Container {
    let inner = Container::new();
    inner.insert("b", 2);

    let root = Container::new();
    root.insert("flag", true);
    root.insert("count", 42);
    root.insert("ratio", 0.5);
    root.insert("name", "root");
    root.insert("nothing", Value::Null);
    root.insert("a", inner);
    root
}

#[test]
fn materialize_is_same_storage() {
    let root = sample();
    let view = NestedView::new(root.clone());

    let materialized = view.materialize();
    assert!(materialized.ptr_eq(&root));
    assert_eq!(materialized, root);
}

#[test]
fn default_view_is_empty() {
    let view = NestedView::default();
    assert!(view.is_empty());
    assert!(view.materialize().is_empty());
}

#[test]
fn absent_keys() {
    let view = NestedView::new(sample());

    for key in ["missing", "", "0", "flag.b"] {
        let error = view.require(key).unwrap_err();
        assert!(error.is_not_found());
        assert_eq!(error.key(), &Key::from(key));

        assert!(view.lookup(key).is_none());
        assert_eq!(view.lookup_or(key, "fallback").as_str(), Some("fallback"));
        assert!(view.lookup_or(key, Value::Null).is_null());
    }
}

#[test]
fn default_container_is_not_shaped() {
    let view = NestedView::new(sample());
    let default = Container::new();
    default.insert("x", 1);

    match view.lookup_or("missing", default.clone()) {
        Any::Value(Value::Container(container)) => assert!(container.ptr_eq(&default)),
        other => panic!("expected raw container, got {other:?}"),
    }
}

#[test]
fn scalars_pass_through() -> Result<()> {
    let view = NestedView::new(sample());

    assert_eq!(view.require("flag")?, Value::from(true));
    assert_eq!(view.require("count")?, Value::from(42));
    assert_eq!(view.require("ratio")?, Value::from(0.5));
    assert_eq!(view.require("name")?, Value::from("root"));

    assert_eq!(view.lookup("flag").context("flag")?, Value::from(true));
    assert_eq!(view.lookup("count").and_then(|v| v.as_i64()), Some(42));
    assert_eq!(view.lookup("ratio").and_then(|v| v.as_f64()), Some(0.5));
    Ok(())
}

#[test]
fn null_is_not_a_scalar_but_passes_through() -> Result<()> {
    let view = NestedView::new(sample());

    let value = view.require("nothing")?;
    assert!(value.is_null());
    assert!(value.as_view().is_none());
    assert!(!value.as_value().context("raw")?.is_scalar());
    Ok(())
}

#[test]
fn opaque_passes_through() -> Result<()> {
    let opaque = Opaque::new(vec![1u8, 2, 3]);

    let root = Container::new();
    root.insert("handle", opaque.clone());

    let view = NestedView::new(root);
    let value = view.require("handle")?;

    let found = value.as_opaque().context("expected opaque")?;
    assert!(found.ptr_eq(&opaque));
    assert_eq!(found.downcast_ref::<Vec<u8>>(), Some(&vec![1, 2, 3]));
    Ok(())
}

#[test]
fn containers_are_wrapped() -> Result<()> {
    let root = sample();
    let inner = root.get("a").and_then(Value::into_container).context("inner")?;

    let view = NestedView::new(root);
    let nested = view.require("a")?.into_view().context("expected view")?;

    assert_eq!(nested.materialize(), inner);
    assert!(nested.materialize().ptr_eq(&inner));

    nested.set_raw("c", 3);
    assert_eq!(inner.get("c"), Some(Value::from(3)));
    Ok(())
}

#[test]
fn lookups_produce_distinct_views() -> Result<()> {
    let view = NestedView::new(sample());

    let mut first = view.require("a")?.into_view().context("first")?;
    let second = view.require("a")?.into_view().context("second")?;

    assert!(first.ptr_eq(&second));

    // Each view has its own cursor.
    first.advance();
    assert_eq!(first.current_key(), 1);
    assert_eq!(second.current_key(), 0);
    Ok(())
}

#[test]
fn chained_lookups() -> Result<()> {
    let view = NestedView::new(sample());

    let b = view.lookup("a").and_then(|a| a.lookup("b"));
    assert_eq!(b.and_then(|b| b.as_u32()), Some(2));

    // Raw values cannot be navigated.
    assert!(view.lookup("name").and_then(|n| n.lookup("b")).is_none());
    Ok(())
}

#[test]
fn paths() -> Result<()> {
    let view = NestedView::new(sample());

    assert_eq!(view.require_path(["a", "b"])?.as_u32(), Some(2));
    assert_eq!(view.require_dotted("a.b")?.as_u32(), Some(2));
    assert_eq!(view.lookup_dotted("a.b").and_then(|v| v.as_u32()), Some(2));

    let root = view.require_path(Vec::<&str>::new())?.into_view().context("root")?;
    assert!(root.ptr_eq(&view));

    let error = view.require_dotted("a.missing").unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotFound(key) if *key == Key::from("missing")));

    let error = view.require_dotted("name.first").unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotAContainer(key) if *key == Key::from("name")));
    assert_eq!(error.to_string(), "value at name is not a container");
    Ok(())
}

#[test]
fn dotted_paths_address_positions() -> Result<()> {
    let root = Container::new();
    root.insert("list", vec!["zero", "one"]);

    let view = NestedView::new(root);
    assert_eq!(view.require_dotted("list.1")?.as_str(), Some("one"));
    assert!(view.lookup_dotted("list.01").is_none());
    Ok(())
}
