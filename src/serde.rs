//! Serde support.
//!
//! With the `serde` feature enabled (which it is by default), [`Value`],
//! [`Container`] and [`NestedView`] implement [`Deserialize`], so any serde
//! data format can act as the decoder which produces the raw nested data. They
//! also implement [`Serialize`] together with [`Any`] and [`Key`], so a
//! materialized tree can be written back out.
//!
//! Decoding follows these rules:
//! * Mappings become containers. Keys are normalized the same way as
//!   [`Key::from_bytes`], booleans become the integer keys `0` and `1`, and
//!   other keys are rendered as strings.
//! * Sequences become list-shaped containers keyed `0..len`.
//! * Unit and `None` become [`Value::Null`].
//! * Byte strings become strings.
//!
//! When encoding, list-shaped containers are written as sequences and every
//! other container as a map. An empty container is list-shaped, so a decoded
//! empty mapping such as `{}` is written back as an empty sequence. [`Opaque`]
//! values cannot be inspected and are written as unit.
//!
//! [`Serialize`]: serde::Serialize
//! [`Deserialize`]: serde::Deserialize
//! [`Value`]: crate::Value
//! [`Value::Null`]: crate::Value::Null
//! [`Container`]: crate::Container
//! [`NestedView`]: crate::NestedView
//! [`Any`]: crate::Any
//! [`Key`]: crate::Key
//! [`Key::from_bytes`]: crate::Key::from_bytes
//! [`Opaque`]: crate::Opaque
//!
//! ```
//! use anyhow::Context;
//! use nested_view::NestedView;
//!
//! const SOURCE: &str = r#"
//! name: Descartes
//! year: 1596
//! books:
//! - year: 1637
//!   title: Discours de la méthode
//! - year: 1641
//!   title: Meditationes de prima philosophia
//! "#;
//!
//! let view: NestedView = serde_yaml::from_str(SOURCE)?;
//!
//! assert_eq!(view.require("name")?.as_str(), Some("Descartes"));
//!
//! let mut books = view.require("books")?.into_view().context("books is not a container")?;
//! let mut titles = Vec::new();
//!
//! books.reset();
//!
//! while books.has_current() {
//!     let book = books.current_value()?;
//!     titles.push(book.require("title")?.as_str().map(String::from));
//!     books.advance();
//! }
//!
//! assert_eq!(titles.len(), 2);
//!
//! view.set_raw("year", 1597);
//! let output = serde_yaml::to_string(&view)?;
//! assert!(output.contains("year: 1597"));
//! # Ok::<_, anyhow::Error>(())
//! ```

mod de;
mod ser;
