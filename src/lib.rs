//! Recursive, shape-aware views over untyped nested data.
//!
//! Data decoded from formats like JSON or YAML into generic containers is
//! tedious to walk by hand: every step needs to check whether a value is
//! something that can be read directly or a container that has to be descended
//! into. This crate provides a single type, [`NestedView`], which hides that
//! distinction behind one uniform way of accessing values.
//!
//! <br>
//!
//! ## Working with views
//!
//! Raw data lives in a [`Container`], an ordered mapping of [`Key`]s to
//! [`Value`]s. Containers are shared handles: a [`NestedView`] constructed over
//! a container does not copy it, so modifications made through either are
//! visible through both.
//!
//! Looking up a key through a view *shapes* the value that was found:
//! * Scalars, that is booleans, numbers and strings, are returned as they are.
//! * Containers are wrapped in a new [`NestedView`], so navigation can
//!   continue through them.
//! * Anything else, such as null or [`Opaque`] values, is returned as it is.
//!
//! Shaped values are represented by [`Any`].
//!
//! ```
//! use anyhow::Context;
//! use nested_view::{Container, NestedView, Value};
//!
//! let server = Container::new();
//! server.insert("host", "localhost");
//! server.insert("port", 8080);
//!
//! let root = Container::new();
//! root.insert("server", server);
//!
//! let view = NestedView::new(root);
//!
//! let server = view.require("server")?.into_view().context("server is not a container")?;
//! assert_eq!(server.require("port")?.as_u16(), Some(8080));
//! assert_eq!(server.lookup_or("timeout", 30).as_u32(), Some(30));
//!
//! // Chained lookups.
//! assert_eq!(view.lookup_dotted("server.host").and_then(|v| v.as_str().map(String::from)), Some(String::from("localhost")));
//!
//! // Raw access bypasses shaping.
//! assert!(matches!(view.get_raw("server"), Some(Value::Container(..))));
//! # Ok::<_, anyhow::Error>(())
//! ```
//!
//! <br>
//!
//! ## Two surfaces
//!
//! The shaped surface ([`NestedView::lookup`], [`NestedView::lookup_or`] and
//! [`NestedView::require`]) never copies data and never fails, except for
//! `require` which reports a missing key through [`Error`].
//!
//! The raw surface ([`NestedView::exists`], [`NestedView::get_raw`],
//! [`NestedView::set_raw`] and [`NestedView::remove_raw`]) reads and writes
//! the container directly without any shaping.
//!
//! <br>
//!
//! ## Positional iteration
//!
//! Views carry a cursor which can be walked with [`NestedView::reset`],
//! [`NestedView::advance`], [`NestedView::has_current`],
//! [`NestedView::current_key`] and [`NestedView::current_value`].
//!
//! Iteration is *positional*: the cursor addresses the integer keys `0`, `1`,
//! `2` and so on, and stops at the first one which is absent. Containers which
//! are keyed by strings, or whose integer keys do not start at `0`, iterate as
//! empty. Use [`NestedView::keys`] to enumerate such containers instead.
//!
//! ```
//! use nested_view::{Container, NestedView};
//!
//! let associative = Container::new();
//! associative.insert("x", 1);
//! associative.insert("y", 2);
//!
//! let mut view = NestedView::new(associative);
//! view.reset();
//!
//! assert!(!view.has_current());
//! assert_eq!(view.positions().count(), 0);
//! assert_eq!(view.keys().len(), 2);
//! ```
//!
//! <br>
//!
//! ## Threading
//!
//! Containers use shared ownership with interior mutability and are neither
//! [`Send`] nor [`Sync`]. All operations are synchronous.
//!
//! <br>
//!
//! ## Features
//!
//! * `serde` (default): implements `Serialize` and `Deserialize` for the data
//!   model, see the [`serde` module][mod@crate::serde].

#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]


mod any;
pub use self::any::Any;

mod container;
pub use self::container::Container;

mod error;
pub use self::error::{Error, ErrorKind};

mod key;
pub use self::key::{AsKey, Key};

mod number;
pub use self::number::Number;

mod value;
pub use self::value::{Opaque, Value};

pub mod view;
#[doc(inline)]
pub use self::view::NestedView;

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod serde;
