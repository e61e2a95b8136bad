use core::cell::{Ref, RefCell};
use core::fmt;
use std::rc::Rc;

use indexmap::map::Slice;
use indexmap::IndexMap;

use crate::key::AsKey;
use crate::{Key, Value};

/// A shared, ordered mapping of [`Key`]s to [`Value`]s.
///
/// Cloning a container clones the *handle*: both handles refer to the same
/// storage, and a modification made through one is visible through the other.
/// Use [`Container::deep_clone`] to get independent storage.
///
/// Entries keep the order in which they were first inserted. Overwriting an
/// existing key keeps its position, and removing a key shifts the entries
/// after it down to close the gap.
///
/// # Examples
///
/// ```
/// use nested_view::{Container, Value};
///
/// let container = Container::new();
/// let alias = container.clone();
///
/// container.insert("name", "Descartes");
/// assert_eq!(alias.get("name"), Some(Value::from("Descartes")));
/// assert!(alias.ptr_eq(&container));
/// ```
#[derive(Clone, Default)]
pub struct Container {
    inner: Rc<RefCell<IndexMap<Key, Value>>>,
}

impl Container {
    /// Construct a new empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of entries in the container.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Test if the container is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Test if the container has an entry for the given key.
    ///
    /// An entry holding [`Value::Null`] is still present.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{Container, Value};
    ///
    /// let container = Container::new();
    /// container.insert("empty", Value::Null);
    ///
    /// assert!(container.contains_key("empty"));
    /// assert!(!container.contains_key("missing"));
    /// ```
    #[must_use]
    pub fn contains_key<K>(&self, key: K) -> bool
    where
        K: AsKey,
    {
        self.inner.borrow().contains_key(&key.key_ref())
    }

    /// Get the value stored at the given key.
    ///
    /// The value is returned as stored. A nested container is returned as a
    /// handle to the same storage.
    #[must_use]
    pub fn get<K>(&self, key: K) -> Option<Value>
    where
        K: AsKey,
    {
        self.inner.borrow().get(&key.key_ref()).cloned()
    }

    /// Insert a value, returning the previous value stored at the key if
    /// there was one.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{Container, Value};
    ///
    /// let container = Container::new();
    /// assert_eq!(container.insert("a", 1), None);
    /// assert_eq!(container.insert("b", 2), None);
    /// assert_eq!(container.insert("a", 3), Some(Value::from(1)));
    ///
    /// assert_eq!(container.to_string(), "{a: 3, b: 2}");
    /// ```
    pub fn insert<K, V>(&self, key: K, value: V) -> Option<Value>
    where
        K: AsKey,
        V: Into<Value>,
    {
        let key = key.key_ref();
        // Converting the value might clone another handle to this container,
        // so it has to happen before the storage is borrowed.
        let value = value.into();
        let mut items = self.inner.borrow_mut();

        if let Some(existing) = items.get_mut(&key) {
            return Some(core::mem::replace(existing, value));
        }

        items.insert(key.into_key(), value);
        None
    }

    /// Append a value at the next free integer key, which is one past the
    /// largest integer key currently in use, or `0`.
    ///
    /// Returns the key the value was stored at, or `None` without storing
    /// anything if [`usize::MAX`] is already in use as a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::Container;
    ///
    /// let container = Container::new();
    /// assert_eq!(container.push("first"), Some(0));
    /// container.insert(7, "seventh");
    /// assert_eq!(container.push("eighth"), Some(8));
    ///
    /// container.insert(usize::MAX, "last");
    /// assert_eq!(container.push("overflow"), None);
    /// assert_eq!(container.len(), 4);
    /// ```
    pub fn push<V>(&self, value: V) -> Option<usize>
    where
        V: Into<Value>,
    {
        let value = value.into();
        let mut items = self.inner.borrow_mut();

        let index = match items.keys().filter_map(Key::as_index).max() {
            Some(n) => n.checked_add(1)?,
            None => 0,
        };

        items.insert(Key::Index(index), value);
        Some(index)
    }

    /// Remove the entry at the given key, returning its value.
    ///
    /// Removing a key which is not present does nothing. The entries after a
    /// removed key keep their relative order.
    pub fn remove<K>(&self, key: K) -> Option<Value>
    where
        K: AsKey,
    {
        self.inner.borrow_mut().shift_remove(&key.key_ref())
    }

    /// Borrow the entries of the container in order.
    ///
    /// # Panics
    ///
    /// The container cannot be modified while the returned guard is alive.
    /// Doing so through any handle panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{Container, Key};
    ///
    /// let container = Container::new();
    /// container.insert("a", 1);
    /// container.insert(4, 2);
    ///
    /// let keys = container.entries().iter().map(|(k, _)| k.clone()).collect::<Vec<_>>();
    /// assert_eq!(keys, [Key::from("a"), Key::Index(4)]);
    /// ```
    #[must_use]
    pub fn entries(&self) -> Ref<'_, Slice<Key, Value>> {
        Ref::map(self.inner.borrow(), |items| items.as_slice())
    }

    /// Get a snapshot of the keys in the container, in order.
    #[must_use]
    pub fn keys(&self) -> Vec<Key> {
        self.inner.borrow().keys().cloned().collect()
    }

    /// Test if this handle refers to the same storage as `other`.
    #[must_use]
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Test if the container is list-shaped, which is when its keys are
    /// exactly `0..len` in order. An empty container is list-shaped.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::Container;
    ///
    /// let list = Container::from(vec![1, 2, 3]);
    /// assert!(list.is_list());
    ///
    /// let sparse = Container::new();
    /// sparse.insert(1, "one");
    /// assert!(!sparse.is_list());
    ///
    /// assert!(Container::new().is_list());
    /// ```
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.inner
            .borrow()
            .keys()
            .enumerate()
            .all(|(n, k)| *k == Key::Index(n))
    }

    /// Copy the container into new storage, recursively copying nested
    /// containers.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{Container, Value};
    ///
    /// let inner = Container::new();
    /// inner.insert("a", 1);
    ///
    /// let outer = Container::new();
    /// outer.insert("inner", inner.clone());
    ///
    /// let copy = outer.deep_clone();
    /// inner.insert("a", 2);
    ///
    /// assert_eq!(copy.get("inner").and_then(|v| v.into_container()?.get("a")), Some(Value::from(1)));
    /// ```
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        let items = self
            .inner
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.deep_clone()))
            .collect();

        Self {
            inner: Rc::new(RefCell::new(items)),
        }
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }

        let a = self.inner.borrow();
        let b = other.inner.borrow();
        // Order matters, unlike for plain map equality.
        a.len() == b.len() && a.iter().eq(b.iter())
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self.inner.borrow();

        if self.is_list() {
            f.write_str("[")?;

            for (n, (_, value)) in items.iter().enumerate() {
                if n > 0 {
                    f.write_str(", ")?;
                }

                fmt::Display::fmt(value, f)?;
            }

            f.write_str("]")
        } else {
            f.write_str("{")?;

            for (n, (key, value)) in items.iter().enumerate() {
                if n > 0 {
                    f.write_str(", ")?;
                }

                write!(f, "{key}: {value}")?;
            }

            f.write_str("}")
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.inner.borrow().iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Container
where
    K: AsKey,
    V: Into<Value>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let container = Container::new();

        for (key, value) in iter {
            container.insert(key, value);
        }

        container
    }
}

impl<T> From<Vec<T>> for Container
where
    T: Into<Value>,
{
    fn from(values: Vec<T>) -> Self {
        let items = values
            .into_iter()
            .enumerate()
            .map(|(n, value)| (Key::Index(n), value.into()))
            .collect();

        Self {
            inner: Rc::new(RefCell::new(items)),
        }
    }
}
