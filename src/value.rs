use core::fmt;
use std::any::Any as StdAny;
use std::rc::Rc;

use bstr::{BStr, BString, ByteSlice};

use crate::{Container, Number};

macro_rules! as_number {
    ($name:ident, $ty:ty, $doc:literal, $lit:literal) => {
        #[doc = concat!("Try and get the value as a ", $doc, ".")]
        ///
        /// # Examples
        ///
        /// ```
        /// use nested_view::Value;
        ///
        #[doc = concat!("let value = Value::from(", stringify!($lit), ");")]
        #[doc = concat!("assert_eq!(value.", stringify!($name), "(), Some(", stringify!($lit), "));")]
        /// ```
        #[must_use]
        #[inline]
        pub fn $name(&self) -> Option<$ty> {
            self.as_number()?.$name()
        }
    };
}

/// A value of any type which the view does not inspect.
///
/// Opaque values are passed through navigation unchanged. Cloning an opaque
/// value clones the handle, not the value behind it, and two opaque values
/// only compare equal if they are the same handle.
///
/// # Examples
///
/// ```
/// use nested_view::Opaque;
///
/// struct Connection {
///     port: u16,
/// }
///
/// let opaque = Opaque::new(Connection { port: 8080 });
/// let other = opaque.clone();
///
/// assert_eq!(opaque, other);
/// assert_eq!(other.downcast_ref::<Connection>().map(|c| c.port), Some(8080));
/// assert!(other.downcast_ref::<String>().is_none());
/// assert_ne!(opaque, Opaque::new(Connection { port: 8080 }));
/// ```
#[derive(Clone)]
pub struct Opaque {
    inner: Rc<dyn StdAny>,
}

impl Opaque {
    /// Wrap an arbitrary value.
    pub fn new<T>(value: T) -> Self
    where
        T: 'static,
    {
        Self {
            inner: Rc::new(value),
        }
    }

    /// Try to get a reference to the wrapped value as `T`.
    #[must_use]
    #[inline]
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: 'static,
    {
        self.inner.downcast_ref()
    }

    /// Test if two opaque values are the same handle.
    #[must_use]
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::as_ptr(&self.inner).cast::<()>() == Rc::as_ptr(&other.inner).cast::<()>()
    }
}

impl PartialEq for Opaque {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Opaque(..)")
    }
}

/// A raw value stored inside of a [`Container`].
///
/// This is the closed set of shapes the crate distinguishes between. Booleans,
/// numbers and strings are *scalars*. Containers are the only values which can
/// be navigated further. Null and [`Opaque`] values are neither and are passed
/// through unchanged.
///
/// # Examples
///
/// ```
/// use nested_view::{Container, Value};
///
/// assert!(Value::from(true).is_scalar());
/// assert!(Value::from(1.5).is_scalar());
/// assert!(Value::from("text").is_scalar());
/// assert!(!Value::Null.is_scalar());
/// assert!(!Value::from(Container::new()).is_scalar());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(Number),
    /// A byte string.
    String(BString),
    /// A nested container.
    Container(Container),
    /// A value the crate does not inspect.
    Opaque(Opaque),
}

impl Value {
    /// Test if the value is a scalar, that is a boolean, number or string.
    ///
    /// Null is not a scalar.
    #[must_use]
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Bool(..) | Value::Number(..) | Value::String(..))
    }

    /// Test if the value is null.
    #[must_use]
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the value as a boolean.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::Value;
    ///
    /// assert_eq!(Value::from(true).as_bool(), Some(true));
    /// assert_eq!(Value::from("true").as_bool(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the value as a [`Number`].
    #[must_use]
    #[inline]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(number) => Some(number),
            _ => None,
        }
    }

    /// Get the value as a [`BStr`].
    #[must_use]
    #[inline]
    pub fn as_bstr(&self) -> Option<&BStr> {
        match self {
            Value::String(string) => Some(string.as_bstr()),
            _ => None,
        }
    }

    /// Get the value as a [`str`]. This fails if the underlying string is not
    /// valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(&b"\xff"[..]).as_str(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.as_bstr()?.to_str().ok()
    }

    /// Get the value as a [`Container`].
    #[must_use]
    #[inline]
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Value::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Convert the value into a [`Container`].
    #[must_use]
    #[inline]
    pub fn into_container(self) -> Option<Container> {
        match self {
            Value::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Get the value as an [`Opaque`] handle.
    #[must_use]
    #[inline]
    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Value::Opaque(opaque) => Some(opaque),
            _ => None,
        }
    }

    as_number!(as_f32, f32, "32-bit float", 10.42);
    as_number!(as_f64, f64, "64-bit float", 10.42);
    as_number!(as_u8, u8, "8-bit unsigned integer", 42);
    as_number!(as_i8, i8, "8-bit signed integer", -42);
    as_number!(as_u16, u16, "16-bit unsigned integer", 42);
    as_number!(as_i16, i16, "16-bit signed integer", -42);
    as_number!(as_u32, u32, "32-bit unsigned integer", 42);
    as_number!(as_i32, i32, "32-bit signed integer", -42);
    as_number!(as_u64, u64, "64-bit unsigned integer", 42);
    as_number!(as_i64, i64, "64-bit signed integer", -42);
    as_number!(as_u128, u128, "128-bit unsigned integer", 42);
    as_number!(as_i128, i128, "128-bit signed integer", -42);
    as_number!(as_usize, usize, "pointer-sized unsigned integer", 42);

    /// Copy the value, recursively copying any nested containers into new
    /// storage.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        match self {
            Value::Container(container) => Value::Container(container.deep_clone()),
            value => value.clone(),
        }
    }
}

impl Default for Value {
    #[inline]
    fn default() -> Self {
        Value::Null
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(true) => f.write_str("true"),
            Value::Bool(false) => f.write_str("false"),
            Value::Number(number) => fmt::Display::fmt(number, f),
            Value::String(string) => fmt::Debug::fmt(string.as_bstr(), f),
            Value::Container(container) => fmt::Display::fmt(container, f),
            Value::Opaque(..) => f.write_str("<opaque>"),
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl From<Number> for Value {
    #[inline]
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(BString::from(value))
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(BString::from(value))
    }
}

impl From<&[u8]> for Value {
    #[inline]
    fn from(value: &[u8]) -> Self {
        Value::String(BString::from(value))
    }
}

impl From<&BStr> for Value {
    #[inline]
    fn from(value: &BStr) -> Self {
        Value::String(BString::from(&value[..]))
    }
}

impl From<BString> for Value {
    #[inline]
    fn from(value: BString) -> Self {
        Value::String(value)
    }
}

impl From<Container> for Value {
    #[inline]
    fn from(value: Container) -> Self {
        Value::Container(value)
    }
}

impl From<Opaque> for Value {
    #[inline]
    fn from(value: Opaque) -> Self {
        Value::Opaque(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    /// Construct a list-shaped container keyed `0..n`.
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Value::Container(Container::from(values))
    }
}
