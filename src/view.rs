//! The [`NestedView`] over a [`Container`].

mod iter;
pub use self::iter::Positions;

use core::fmt;

use crate::any::shape;
use crate::error::{Error, ErrorKind};
use crate::key::private::Sealed as _;
use crate::key::AsKey;
use crate::{Any, Container, Key, Value};

/// A navigable view over a [`Container`].
///
/// The view shares storage with the container it was constructed from.
/// Looking up a key which holds a nested container produces a *new* view
/// over that nested storage, so views can be chained to walk arbitrarily deep
/// structures.
///
/// A view provides two surfaces:
/// * Shaped access through [`lookup`], [`lookup_or`] and [`require`], which
///   wraps nested containers and hands back everything else unchanged.
/// * Raw access through [`exists`], [`get_raw`], [`set_raw`] and
///   [`remove_raw`], which reads and writes the container as it is stored.
///
/// [`lookup`]: NestedView::lookup
/// [`lookup_or`]: NestedView::lookup_or
/// [`require`]: NestedView::require
/// [`exists`]: NestedView::exists
/// [`get_raw`]: NestedView::get_raw
/// [`set_raw`]: NestedView::set_raw
/// [`remove_raw`]: NestedView::remove_raw
///
/// # Examples
///
/// ```
/// use anyhow::Context;
/// use nested_view::{Container, NestedView, Value};
///
/// let book = Container::new();
/// book.insert("title", "Discours de la méthode");
/// book.insert("year", 1637);
///
/// let root = Container::new();
/// root.insert("name", "Descartes");
/// root.insert("books", vec![Value::from(book)]);
///
/// let view = NestedView::new(root.clone());
///
/// assert_eq!(view.require("name")?.as_str(), Some("Descartes"));
///
/// let year = view
///     .lookup_dotted("books.0.year")
///     .and_then(|v| v.as_u32())
///     .context("missing year")?;
///
/// assert_eq!(year, 1637);
///
/// // Mutations through the view are visible through the original container.
/// view.set_raw("country", "France");
/// assert_eq!(root.get("country"), Some(Value::from("France")));
/// # Ok::<_, anyhow::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct NestedView {
    container: Container,
    cursor: usize,
}

impl NestedView {
    /// Construct a view over the given container.
    ///
    /// The container is not copied or validated.
    #[must_use]
    #[inline]
    pub fn new(container: Container) -> Self {
        Self {
            container,
            cursor: 0,
        }
    }

    /// Get the underlying container.
    ///
    /// This returns a handle to the same storage the view wraps, not a copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{Container, NestedView};
    ///
    /// let container = Container::new();
    /// let view = NestedView::new(container.clone());
    ///
    /// assert!(view.materialize().ptr_eq(&container));
    /// ```
    #[must_use]
    #[inline]
    pub fn materialize(&self) -> Container {
        self.container.clone()
    }

    /// Convert the view into the underlying container.
    #[must_use]
    #[inline]
    pub fn into_container(self) -> Container {
        self.container
    }

    /// Look up a key, failing if it is not present.
    ///
    /// The found value is shaped the same way as in [`NestedView::lookup`].
    ///
    /// # Errors
    ///
    /// Errors with [`ErrorKind::NotFound`] if the key is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{Container, ErrorKind, NestedView};
    ///
    /// let container = Container::new();
    /// container.insert("port", 8080);
    ///
    /// let view = NestedView::new(container);
    /// assert_eq!(view.require("port")?.as_u16(), Some(8080));
    ///
    /// let error = view.require("host").unwrap_err();
    /// assert!(matches!(error.kind(), ErrorKind::NotFound(..)));
    /// # Ok::<_, nested_view::Error>(())
    /// ```
    pub fn require<K>(&self, key: K) -> Result<Any, Error>
    where
        K: AsKey,
    {
        match self.lookup(&key) {
            Some(value) => Ok(value),
            None => Err(Error::new(ErrorKind::NotFound(key.key_ref().into_key()))),
        }
    }

    /// Look up a key.
    ///
    /// * Absent keys produce `None`.
    /// * Scalars (booleans, numbers and strings) are returned unchanged.
    /// * Containers are wrapped in a new [`NestedView`] sharing their storage.
    /// * Anything else, including null, is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{Any, Container, NestedView, Value};
    ///
    /// let container = Container::new();
    /// container.insert("flag", true);
    /// container.insert("nothing", Value::Null);
    /// container.insert("nested", Container::new());
    ///
    /// let view = NestedView::new(container);
    ///
    /// assert_eq!(view.lookup("flag").and_then(|v| v.as_bool()), Some(true));
    /// assert!(view.lookup("nothing").map_or(false, |v| v.is_null()));
    /// assert!(matches!(view.lookup("nested"), Some(Any::View(..))));
    /// assert!(view.lookup("missing").is_none());
    /// ```
    #[must_use]
    pub fn lookup<K>(&self, key: K) -> Option<Any>
    where
        K: AsKey,
    {
        let value = self.container.get(key)?;
        Some(shape(value))
    }

    /// Look up a key, falling back to `default` if it is absent.
    ///
    /// The default is returned verbatim and is not shaped, even if it is a
    /// container.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{Any, Container, NestedView, Value};
    ///
    /// let view = NestedView::new(Container::new());
    ///
    /// assert_eq!(view.lookup_or("retries", 3).as_u32(), Some(3));
    /// assert!(matches!(view.lookup_or("missing", Container::new()), Any::Value(Value::Container(..))));
    /// ```
    #[must_use]
    pub fn lookup_or<K, V>(&self, key: K, default: V) -> Any
    where
        K: AsKey,
        V: Into<Value>,
    {
        match self.lookup(key) {
            Some(value) => value,
            None => Any::Value(default.into()),
        }
    }

    /// Look up a sequence of keys, descending one level per key.
    ///
    /// Returns `None` if any key is absent or if a value which is not a
    /// container is reached before the last key. An empty sequence of keys
    /// produces a view over this view's container.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{Container, NestedView};
    ///
    /// let inner = Container::new();
    /// inner.insert("b", "found");
    ///
    /// let root = Container::new();
    /// root.insert("a", inner);
    ///
    /// let view = NestedView::new(root);
    /// assert_eq!(view.lookup_path(["a", "b"]).and_then(|v| v.as_str().map(String::from)), Some(String::from("found")));
    /// assert!(view.lookup_path(["a", "b", "c"]).is_none());
    /// ```
    #[must_use]
    pub fn lookup_path<I>(&self, keys: I) -> Option<Any>
    where
        I: IntoIterator,
        I::Item: AsKey,
    {
        let mut current = Any::View(NestedView::new(self.materialize()));

        for key in keys {
            current = current.lookup(key)?;
        }

        Some(current)
    }

    /// Look up a sequence of keys, failing with a descriptive error.
    ///
    /// # Errors
    ///
    /// Errors with [`ErrorKind::NotFound`] naming the first key which is
    /// absent, or [`ErrorKind::NotAContainer`] naming the key whose value
    /// cannot be descended into.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{Container, ErrorKind, Key, NestedView};
    ///
    /// let root = Container::new();
    /// root.insert("a", 1);
    ///
    /// let view = NestedView::new(root);
    ///
    /// let error = view.require_path(["a", "b"]).unwrap_err();
    /// assert!(matches!(error.kind(), ErrorKind::NotAContainer(key) if *key == Key::from("a")));
    ///
    /// let error = view.require_path(["x", "b"]).unwrap_err();
    /// assert!(matches!(error.kind(), ErrorKind::NotFound(key) if *key == Key::from("x")));
    /// ```
    pub fn require_path<I>(&self, keys: I) -> Result<Any, Error>
    where
        I: IntoIterator,
        I::Item: AsKey,
    {
        let mut view = NestedView::new(self.materialize());
        let mut keys = keys.into_iter().peekable();

        while let Some(key) = keys.next() {
            let value = view.require(&key)?;

            if keys.peek().is_none() {
                return Ok(value);
            }

            match value {
                Any::View(next) => {
                    view = next;
                }
                Any::Value(..) => {
                    let key = key.key_ref().into_key();
                    return Err(Error::new(ErrorKind::NotAContainer(key)));
                }
            }
        }

        Ok(Any::View(view))
    }

    /// Look up a dot-separated path such as `"servers.0.port"`.
    ///
    /// Every segment is treated as a key, so integer segments address list
    /// positions.
    #[must_use]
    pub fn lookup_dotted(&self, path: &str) -> Option<Any> {
        self.lookup_path(path.split('.'))
    }

    /// Look up a dot-separated path, failing with a descriptive error.
    ///
    /// # Errors
    ///
    /// See [`NestedView::require_path`].
    pub fn require_dotted(&self, path: &str) -> Result<Any, Error> {
        self.require_path(path.split('.'))
    }

    /// Test if the key is present.
    ///
    /// This only tests for presence: a key holding null or `false` exists.
    /// To treat a null entry as absent, combine [`NestedView::lookup`] with
    /// [`Any::is_null`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{NestedView, Value};
    ///
    /// let view = NestedView::default();
    /// view.set_raw("spouse", Value::Null);
    ///
    /// assert!(view.exists("spouse"));
    /// assert!(view.lookup("spouse").map_or(true, |v| v.is_null()));
    /// assert!(!view.exists("children"));
    /// ```
    #[must_use]
    #[inline]
    pub fn exists<K>(&self, key: K) -> bool
    where
        K: AsKey,
    {
        self.container.contains_key(key)
    }

    /// Get the value at the key exactly as it is stored.
    ///
    /// Unlike [`NestedView::lookup`], a nested container is returned as a raw
    /// [`Container`] handle rather than wrapped in a view.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{Container, NestedView, Value};
    ///
    /// let container = Container::new();
    /// container.insert("nested", Container::new());
    ///
    /// let view = NestedView::new(container);
    /// assert!(matches!(view.get_raw("nested"), Some(Value::Container(..))));
    /// assert!(view.get_raw("missing").is_none());
    /// ```
    #[must_use]
    #[inline]
    pub fn get_raw<K>(&self, key: K) -> Option<Value>
    where
        K: AsKey,
    {
        self.container.get(key)
    }

    /// Store a value at the key, overwriting any existing value.
    #[inline]
    pub fn set_raw<K, V>(&self, key: K, value: V)
    where
        K: AsKey,
        V: Into<Value>,
    {
        self.container.insert(key, value);
    }

    /// Remove the value at the key, returning it if it was present.
    #[inline]
    pub fn remove_raw<K>(&self, key: K) -> Option<Value>
    where
        K: AsKey,
    {
        self.container.remove(key)
    }

    /// Get the number of entries in the underlying container.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Test if the underlying container is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Get a snapshot of the keys in the underlying container, in order.
    #[must_use]
    #[inline]
    pub fn keys(&self) -> Vec<Key> {
        self.container.keys()
    }

    /// Test if two views wrap the same storage.
    #[must_use]
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.container.ptr_eq(&other.container)
    }

    /// Move the cursor back to position `0`.
    #[inline]
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor forward by one position.
    ///
    /// The cursor saturates at [`usize::MAX`].
    #[inline]
    pub fn advance(&mut self) {
        self.cursor = self.cursor.saturating_add(1);
    }

    /// Test if the container has an entry whose key is the current cursor
    /// position.
    ///
    /// The cursor is positional: it addresses the integer keys `0`, `1`, `2`
    /// and so on. A container without a `0` key, such as one keyed by
    /// strings only, has no current entry right after [`reset`] and iterates
    /// as empty. Like [`NestedView::exists`], an entry holding null counts.
    ///
    /// [`reset`]: NestedView::reset
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{Container, NestedView};
    ///
    /// let container = Container::new();
    /// container.insert("x", 1);
    /// container.insert("y", 2);
    ///
    /// let mut view = NestedView::new(container);
    /// view.reset();
    /// assert!(!view.has_current());
    /// ```
    #[must_use]
    #[inline]
    pub fn has_current(&self) -> bool {
        self.container.contains_key(self.cursor)
    }

    /// Get the current cursor position.
    ///
    /// This is the position itself, which is only a key of the container if
    /// [`NestedView::has_current`] holds.
    #[must_use]
    #[inline]
    pub fn current_key(&self) -> usize {
        self.cursor
    }

    /// Get a new view over the container stored at the cursor position.
    ///
    /// # Errors
    ///
    /// Errors with [`ErrorKind::NotFound`] if there is no entry at the cursor
    /// position, and with [`ErrorKind::NotAContainer`] if the entry is not a
    /// container.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{Container, NestedView};
    ///
    /// let list = Container::new();
    ///
    /// for n in 1..=3 {
    ///     let item = Container::new();
    ///     item.insert("a", n);
    ///     list.push(item);
    /// }
    ///
    /// let mut view = NestedView::new(list);
    /// let mut seen = Vec::new();
    ///
    /// view.reset();
    ///
    /// while view.has_current() {
    ///     let item = view.current_value()?;
    ///     seen.push((view.current_key(), item.require("a")?.as_u32()));
    ///     view.advance();
    /// }
    ///
    /// assert_eq!(seen, [(0, Some(1)), (1, Some(2)), (2, Some(3))]);
    /// # Ok::<_, nested_view::Error>(())
    /// ```
    pub fn current_value(&self) -> Result<NestedView, Error> {
        match self.container.get(self.cursor) {
            Some(Value::Container(container)) => Ok(NestedView::new(container)),
            Some(..) => Err(Error::new(ErrorKind::NotAContainer(Key::Index(
                self.cursor,
            )))),
            None => Err(Error::new(ErrorKind::NotFound(Key::Index(self.cursor)))),
        }
    }

    /// Iterate over the positions `0`, `1`, `2`, ... of the container until
    /// the first position which is absent.
    ///
    /// This follows the same positional rules as the cursor, but does not
    /// move it. Values are shaped like [`NestedView::lookup`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{Container, NestedView};
    ///
    /// let view = NestedView::new(Container::from(vec![10, 20, 30]));
    /// let values = view.positions().map(|(n, v)| (n, v.as_u32())).collect::<Vec<_>>();
    /// assert_eq!(values, [(0, Some(10)), (1, Some(20)), (2, Some(30))]);
    /// ```
    #[must_use]
    pub fn positions(&self) -> Positions {
        Positions::new(self.materialize())
    }
}

impl From<Container> for NestedView {
    #[inline]
    fn from(container: Container) -> Self {
        Self::new(container)
    }
}

impl fmt::Display for NestedView {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.container, f)
    }
}

impl fmt::Debug for NestedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedView")
            .field("cursor", &self.cursor)
            .field("container", &self.container)
            .finish()
    }
}
