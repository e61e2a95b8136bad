#![cfg(feature = "serde")]

use anyhow::{Context, Result};
use nested_view::{Any, Container, Key, NestedView, Value};
use serde::Deserialize;

const SOURCE: &str = r#"
name: Descartes
year: 1596
alive: false
spouse: ~
books:
- year: 1637
  title: Discours de la méthode
- year: 1641
  title: Meditationes de prima philosophia
"0": zero
"#;

#[test]
fn navigate_decoded_document() -> Result<()> {
    let view: NestedView = serde_yaml::from_str(SOURCE)?;

    assert_eq!(view.require("name")?.as_str(), Some("Descartes"));
    assert_eq!(view.require("year")?.as_u32(), Some(1596));
    assert_eq!(view.require("alive")?.as_bool(), Some(false));
    assert!(view.require("spouse")?.is_null());
    assert!(view.exists("spouse"));

    // Quoted integer keys are normalized.
    assert_eq!(view.require(0)?.as_str(), Some("zero"));

    let books = view.require("books")?.into_view().context("books")?;
    assert!(books.materialize().is_list());

    let titles = books
        .positions()
        .map(|(_, book)| book.lookup("title").and_then(|t| t.as_str().map(String::from)))
        .collect::<Option<Vec<_>>>()
        .context("missing title")?;

    assert_eq!(
        titles,
        ["Discours de la méthode", "Meditationes de prima philosophia"]
    );

    assert_eq!(view.require_dotted("books.1.year")?.as_u32(), Some(1641));
    Ok(())
}

#[test]
fn reserialize_after_mutation() -> Result<()> {
    let view: NestedView = serde_yaml::from_str(
        r#"
        server:
          host: localhost
          port: 8080
        "#,
    )?;

    let server = view.require("server")?.into_view().context("server")?;
    server.set_raw("port", 9090);
    server.remove_raw("host");
    server.set_raw("tags", vec!["a", "b"]);

    let output = serde_yaml::to_string(&view.materialize())?;
    assert_eq!(output, "server:\n  port: 9090\n  tags:\n  - a\n  - b\n");
    Ok(())
}

#[test]
fn sequences_decode_as_lists() -> Result<()> {
    let container: Container = serde_yaml::from_str("[{a: 1}, {a: 2}, {a: 3}]")?;
    assert_eq!(container.keys(), [Key::Index(0), Key::Index(1), Key::Index(2)]);

    let mut view = NestedView::new(container);
    let mut seen = Vec::new();

    view.reset();

    while view.has_current() {
        seen.push(view.current_value()?.require("a")?.as_u32());
        view.advance();
    }

    assert_eq!(seen, [Some(1), Some(2), Some(3)]);
    Ok(())
}

#[test]
fn scalars_are_not_containers() {
    let result = serde_yaml::from_str::<Container>("42");
    assert!(result.is_err());

    let value: Value = serde_yaml::from_str("42").unwrap();
    assert_eq!(value, Value::from(42));
}

#[test]
fn any_serializes_shaped() -> Result<()> {
    let view: NestedView = serde_yaml::from_str("{a: {b: 1}, c: text}")?;

    let a = view.require("a")?;
    assert!(matches!(a, Any::View(..)));
    assert_eq!(serde_yaml::to_string(&a)?, "b: 1\n");

    let c = view.require("c")?;
    assert_eq!(serde_yaml::to_string(&c)?, "text\n");
    Ok(())
}

#[test]
fn typed_from_materialized() -> Result<()> {
    #[derive(Debug, PartialEq, Deserialize)]
    struct Book {
        year: u32,
        title: String,
    }

    let view: NestedView = serde_yaml::from_str(SOURCE)?;
    let books = view.require("books")?.into_view().context("books")?;

    let value = serde_yaml::to_value(books.materialize())?;
    let books: Vec<Book> = serde_yaml::from_value(value)?;

    assert_eq!(
        books,
        [
            Book {
                year: 1637,
                title: String::from("Discours de la méthode"),
            },
            Book {
                year: 1641,
                title: String::from("Meditationes de prima philosophia"),
            },
        ]
    );
    Ok(())
}

#[test]
fn empty_mapping_encodes_as_sequence() -> Result<()> {
    let view: NestedView = serde_yaml::from_str("{}")?;
    assert!(view.is_empty());
    assert!(view.materialize().is_list());
    assert_eq!(serde_yaml::to_string(&view)?, "[]\n");
    Ok(())
}

#[test]
fn large_mapping() -> Result<()> {
    let mut source = String::new();

    for n in 0..20_000 {
        source.push_str(&format!("key{n}: {n}\n"));
    }

    let view: NestedView = serde_yaml::from_str(&source)?;
    assert_eq!(view.len(), 20_000);
    assert_eq!(view.require("key19999")?.as_u32(), Some(19_999));
    assert_eq!(view.keys().first(), Some(&Key::from("key0")));
    Ok(())
}
