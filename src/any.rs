use core::fmt;

use bstr::BStr;

use crate::key::AsKey;
use crate::{NestedView, Number, Opaque, Value};

macro_rules! as_number {
    ($name:ident, $ty:ty, $doc:literal) => {
        #[doc = concat!("Try and get the result as a ", $doc, ".")]
        #[must_use]
        #[inline]
        pub fn $name(&self) -> Option<$ty> {
            self.as_value()?.$name()
        }
    };
}

/// The result of looking up a key through a [`NestedView`].
///
/// Containers are wrapped in a fresh [`NestedView`] so that navigation can
/// continue. Everything else, including null and [`Opaque`] values, is handed
/// back as the raw [`Value`] it was stored as.
///
/// # Examples
///
/// ```
/// use nested_view::{Any, Container, NestedView};
///
/// let inner = Container::new();
/// inner.insert("b", 42);
///
/// let root = Container::new();
/// root.insert("a", inner);
/// root.insert("name", "root");
///
/// let view = NestedView::new(root);
///
/// assert!(matches!(view.lookup("a"), Some(Any::View(..))));
/// assert!(matches!(view.lookup("name"), Some(Any::Value(..))));
///
/// let b = view.lookup("a").and_then(|a| a.lookup("b"));
/// assert_eq!(b.and_then(|b| b.as_u32()), Some(42));
/// ```
#[derive(Debug, Clone)]
pub enum Any {
    /// A value returned as-is.
    Value(Value),
    /// A nested container wrapped in a new view.
    View(NestedView),
}

impl Any {
    /// Get the raw value, unless this is a view.
    #[must_use]
    #[inline]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Any::Value(value) => Some(value),
            Any::View(..) => None,
        }
    }

    /// Convert into the raw value, unless this is a view.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Any::Value(value) => Some(value),
            Any::View(..) => None,
        }
    }

    /// Get the nested view, if this is one.
    #[must_use]
    #[inline]
    pub fn as_view(&self) -> Option<&NestedView> {
        match self {
            Any::Value(..) => None,
            Any::View(view) => Some(view),
        }
    }

    /// Convert into the nested view, if this is one.
    #[must_use]
    #[inline]
    pub fn into_view(self) -> Option<NestedView> {
        match self {
            Any::Value(..) => None,
            Any::View(view) => Some(view),
        }
    }

    /// Convert back into a raw [`Value`], unwrapping views into the container
    /// they hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::{Container, NestedView, Value};
    ///
    /// let inner = Container::new();
    /// let root = Container::new();
    /// root.insert("inner", inner.clone());
    ///
    /// let view = NestedView::new(root);
    /// let raw = view.lookup("inner").map(|v| v.into_raw());
    ///
    /// assert!(raw.as_ref().and_then(Value::as_container).map_or(false, |c| c.ptr_eq(&inner)));
    /// ```
    #[must_use]
    pub fn into_raw(self) -> Value {
        match self {
            Any::Value(value) => value,
            Any::View(view) => Value::Container(view.into_container()),
        }
    }

    /// Look up a key in the nested view.
    ///
    /// Always returns `None` for raw values, since they cannot be navigated.
    #[must_use]
    pub fn lookup<K>(&self, key: K) -> Option<Any>
    where
        K: AsKey,
    {
        self.as_view()?.lookup(key)
    }

    /// Test if the result is a raw null value.
    #[must_use]
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Any::Value(Value::Null))
    }

    /// Get the result as a boolean.
    #[must_use]
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_value()?.as_bool()
    }

    /// Get the result as a [`Number`].
    #[must_use]
    #[inline]
    pub fn as_number(&self) -> Option<&Number> {
        self.as_value()?.as_number()
    }

    /// Get the result as a [`BStr`].
    #[must_use]
    #[inline]
    pub fn as_bstr(&self) -> Option<&BStr> {
        self.as_value()?.as_bstr()
    }

    /// Get the result as a [`str`].
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.as_value()?.as_str()
    }

    /// Get the result as an [`Opaque`] handle.
    #[must_use]
    #[inline]
    pub fn as_opaque(&self) -> Option<&Opaque> {
        self.as_value()?.as_opaque()
    }

    as_number!(as_f32, f32, "32-bit float");
    as_number!(as_f64, f64, "64-bit float");
    as_number!(as_u8, u8, "8-bit unsigned integer");
    as_number!(as_i8, i8, "8-bit signed integer");
    as_number!(as_u16, u16, "16-bit unsigned integer");
    as_number!(as_i16, i16, "16-bit signed integer");
    as_number!(as_u32, u32, "32-bit unsigned integer");
    as_number!(as_i32, i32, "32-bit signed integer");
    as_number!(as_u64, u64, "64-bit unsigned integer");
    as_number!(as_i64, i64, "64-bit signed integer");
    as_number!(as_u128, u128, "128-bit unsigned integer");
    as_number!(as_i128, i128, "128-bit signed integer");
    as_number!(as_usize, usize, "pointer-sized unsigned integer");
}

/// Shape a raw value for navigation.
pub(crate) fn shape(value: Value) -> Any {
    match value {
        // Scalars are terminal.
        value @ (Value::Bool(..) | Value::Number(..) | Value::String(..)) => Any::Value(value),
        Value::Container(container) => Any::View(NestedView::new(container)),
        // Null is not a scalar, it passes through like any opaque value.
        value @ (Value::Null | Value::Opaque(..)) => Any::Value(value),
    }
}

impl PartialEq<Value> for Any {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Any::Value(value), other) => value == other,
            (Any::View(view), Value::Container(container)) => view.materialize() == *container,
            (Any::View(..), _) => false,
        }
    }
}

impl fmt::Display for Any {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Any::Value(value) => fmt::Display::fmt(value, f),
            Any::View(view) => fmt::Display::fmt(view, f),
        }
    }
}
