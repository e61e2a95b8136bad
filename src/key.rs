use core::fmt;
use core::hash::{Hash, Hasher};

use bstr::{BStr, BString, ByteSlice};

pub(crate) mod private {
    use bstr::{BStr, BString};

    use super::{Key, KeyRef};

    pub trait Sealed {
        fn key_ref(&self) -> KeyRef<'_>;
    }

    impl Sealed for usize {
        #[inline]
        fn key_ref(&self) -> KeyRef<'_> {
            KeyRef::Index(*self)
        }
    }

    impl Sealed for str {
        #[inline]
        fn key_ref(&self) -> KeyRef<'_> {
            KeyRef::from_bytes(self.as_bytes())
        }
    }

    impl Sealed for String {
        #[inline]
        fn key_ref(&self) -> KeyRef<'_> {
            KeyRef::from_bytes(self.as_bytes())
        }
    }

    impl Sealed for BStr {
        #[inline]
        fn key_ref(&self) -> KeyRef<'_> {
            KeyRef::from_bytes(self)
        }
    }

    impl Sealed for BString {
        #[inline]
        fn key_ref(&self) -> KeyRef<'_> {
            KeyRef::from_bytes(self)
        }
    }

    impl Sealed for Key {
        #[inline]
        fn key_ref(&self) -> KeyRef<'_> {
            self.as_key_ref()
        }
    }

    impl<T> Sealed for &T
    where
        T: ?Sized + Sealed,
    {
        #[inline]
        fn key_ref(&self) -> KeyRef<'_> {
            (**self).key_ref()
        }
    }
}

/// A type which can be used to address an entry in a
/// [`Container`][crate::Container] or [`NestedView`][crate::NestedView].
///
/// This is implemented for [`usize`], string types and [`Key`] itself, as
/// well as references to any of them.
///
/// Strings which are the canonical decimal rendering of a non-negative integer
/// address the same entry as that integer.
///
/// # Examples
///
/// ```
/// use nested_view::{Container, Value};
///
/// let container = Container::new();
/// container.insert(1, "one");
///
/// assert_eq!(container.get("1"), Some(Value::from("one")));
/// assert_eq!(container.get(1), Some(Value::from("one")));
/// assert_eq!(container.get("01"), None);
/// ```
pub trait AsKey: private::Sealed {}

impl AsKey for usize {}
impl AsKey for str {}
impl AsKey for String {}
impl AsKey for BStr {}
impl AsKey for BString {}
impl AsKey for Key {}
impl<T> AsKey for &T where T: ?Sized + AsKey {}

/// A key inside of a [`Container`][crate::Container].
///
/// Keys are either non-negative integers or byte strings. Use
/// [`Key::from_bytes`] or one of the [`From`] implementations to construct a
/// key with string normalization applied.
///
/// # Examples
///
/// ```
/// use nested_view::Key;
///
/// assert_eq!(Key::from("42"), Key::Index(42));
/// assert_eq!(Key::from("042").as_str(), Some("042"));
/// assert_eq!(Key::from("name").as_index(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key {
    /// An integer key.
    Index(usize),
    /// A string key.
    Name(BString),
}

impl Key {
    /// Construct a key from bytes, normalizing canonical integers into
    /// [`Key::Index`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::Key;
    ///
    /// assert_eq!(Key::from_bytes(b"0"), Key::Index(0));
    /// assert_eq!(Key::from_bytes(b"+1"), Key::Name("+1".into()));
    /// assert_eq!(Key::from_bytes(b"-1"), Key::Name("-1".into()));
    /// assert_eq!(Key::from_bytes(b""), Key::Name("".into()));
    /// ```
    #[must_use]
    pub fn from_bytes<B>(bytes: B) -> Self
    where
        B: AsRef<[u8]>,
    {
        KeyRef::from_bytes(bytes.as_ref()).into_key()
    }

    /// Get the key as an integer index, if it is one.
    #[must_use]
    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(..) => None,
        }
    }

    /// Get the key as a [`BStr`], if it is a string key.
    #[must_use]
    #[inline]
    pub fn as_bstr(&self) -> Option<&BStr> {
        match self {
            Key::Index(..) => None,
            Key::Name(name) => Some(name.as_bstr()),
        }
    }

    /// Get the key as a [`str`], if it is a string key containing valid
    /// UTF-8.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.as_bstr()?.to_str().ok()
    }

    #[inline]
    pub(crate) fn as_key_ref(&self) -> KeyRef<'_> {
        match self {
            Key::Index(index) => KeyRef::Index(*index),
            Key::Name(name) => KeyRef::Name(name.as_bstr()),
        }
    }
}

// Hashes through the borrowed form so that `KeyRef` can look up `Key`s.
impl Hash for Key {
    #[inline]
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.as_key_ref().hash(state);
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_key_ref(), f)
    }
}

impl From<usize> for Key {
    #[inline]
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    #[inline]
    fn from(name: &str) -> Self {
        Key::from_bytes(name)
    }
}

impl From<String> for Key {
    #[inline]
    fn from(name: String) -> Self {
        Key::from_bytes(name)
    }
}

impl From<&BStr> for Key {
    #[inline]
    fn from(name: &BStr) -> Self {
        Key::from_bytes(name)
    }
}

impl From<BString> for Key {
    #[inline]
    fn from(name: BString) -> Self {
        Key::from_bytes(name)
    }
}

/// A borrowed, already normalized key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRef<'a> {
    Index(usize),
    Name(&'a BStr),
}

impl<'a> KeyRef<'a> {
    pub(crate) fn from_bytes(bytes: &'a [u8]) -> Self {
        match parse_index(bytes) {
            Some(index) => KeyRef::Index(index),
            None => KeyRef::Name(BStr::new(bytes)),
        }
    }

    pub(crate) fn into_key(self) -> Key {
        match self {
            KeyRef::Index(index) => Key::Index(index),
            KeyRef::Name(name) => Key::Name(BString::from(&name[..])),
        }
    }

}

impl indexmap::Equivalent<Key> for KeyRef<'_> {
    #[inline]
    fn equivalent(&self, key: &Key) -> bool {
        *self == key.as_key_ref()
    }
}

impl fmt::Display for KeyRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRef::Index(index) => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(*index))
            }
            KeyRef::Name(name) => fmt::Display::fmt(name, f),
        }
    }
}

/// Parse a canonical non-negative decimal integer.
///
/// Leading zeros, signs and values which overflow `usize` are rejected.
fn parse_index(bytes: &[u8]) -> Option<usize> {
    match bytes {
        [] => return None,
        [b'0'] => return Some(0),
        [b'0', ..] => return None,
        _ => {}
    }

    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    lexical_core::parse(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_index, Key};

    #[test]
    fn canonical_indexes() {
        assert_eq!(parse_index(b"0"), Some(0));
        assert_eq!(parse_index(b"10"), Some(10));
        assert_eq!(parse_index(b"00"), None);
        assert_eq!(parse_index(b"01"), None);
        assert_eq!(parse_index(b" 1"), None);
        assert_eq!(parse_index(b"1.0"), None);
        assert_eq!(parse_index(b"99999999999999999999999999"), None);
    }

    #[test]
    fn display() {
        assert_eq!(Key::Index(12).to_string(), "12");
        assert_eq!(Key::from("name").to_string(), "name");
    }
}
