use core::fmt;

macro_rules! as_integer {
    ($name:ident, $ty:ty, $doc:literal, $lit:literal) => {
        #[doc = concat!("Try and get the number as a ", $doc, ".")]
        ///
        /// Fails if the number is a float or out of range for the target type.
        ///
        /// # Examples
        ///
        /// ```
        /// use nested_view::Number;
        ///
        #[doc = concat!("let number = Number::from(", stringify!($lit), ");")]
        #[doc = concat!("assert_eq!(number.", stringify!($name), "(), Some(", stringify!($lit), "));")]
        #[doc = concat!("assert_eq!(Number::from(1.5).", stringify!($name), "(), None);")]
        /// ```
        #[must_use]
        #[inline]
        pub fn $name(&self) -> Option<$ty> {
            match self.repr {
                Repr::Signed(n) => <$ty>::try_from(n).ok(),
                Repr::Unsigned(n) => <$ty>::try_from(n).ok(),
                Repr::Float(..) => None,
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Repr {
    /// Only used for negative numbers.
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

/// A numeric scalar stored inside of a [`Value`][crate::Value].
///
/// Integers and floats are kept apart: an integer never compares equal to a
/// float, even if they represent the same quantity.
///
/// # Examples
///
/// ```
/// use nested_view::Number;
///
/// assert_eq!(Number::from(42), Number::from(42u64));
/// assert_ne!(Number::from(42), Number::from(42.0));
/// assert_eq!(Number::from(-42).as_i32(), Some(-42));
/// assert_eq!(Number::from(-42).as_u32(), None);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Number {
    repr: Repr,
}

impl Number {
    /// Test if the number is an integer.
    #[must_use]
    #[inline]
    pub fn is_integer(&self) -> bool {
        !self.is_float()
    }

    /// Test if the number is a float.
    #[must_use]
    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self.repr, Repr::Float(..))
    }

    /// Get the number as a 64-bit float.
    ///
    /// Integers are converted, which might lose precision.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::Number;
    ///
    /// assert_eq!(Number::from(10.42).as_f64(), Some(10.42));
    /// assert_eq!(Number::from(10).as_f64(), Some(10.0));
    /// ```
    #[must_use]
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self.repr {
            Repr::Signed(n) => Some(n as f64),
            Repr::Unsigned(n) => Some(n as f64),
            Repr::Float(n) => Some(n),
        }
    }

    /// Get the number as a 32-bit float.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_view::Number;
    ///
    /// assert_eq!(Number::from(10.42).as_f32(), Some(10.42));
    /// ```
    #[must_use]
    #[inline]
    pub fn as_f32(&self) -> Option<f32> {
        Some(self.as_f64()? as f32)
    }

    as_integer!(as_u8, u8, "8-bit unsigned integer", 42);
    as_integer!(as_i8, i8, "8-bit signed integer", -42);
    as_integer!(as_u16, u16, "16-bit unsigned integer", 42);
    as_integer!(as_i16, i16, "16-bit signed integer", -42);
    as_integer!(as_u32, u32, "32-bit unsigned integer", 42);
    as_integer!(as_i32, i32, "32-bit signed integer", -42);
    as_integer!(as_u64, u64, "64-bit unsigned integer", 42);
    as_integer!(as_i64, i64, "64-bit signed integer", -42);
    as_integer!(as_u128, u128, "128-bit unsigned integer", 42);
    as_integer!(as_i128, i128, "128-bit signed integer", -42);
    as_integer!(as_usize, usize, "pointer-sized unsigned integer", 42);
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::Signed(n) => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(n))
            }
            Repr::Unsigned(n) => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(n))
            }
            Repr::Float(n) => {
                let mut buffer = ryu::Buffer::new();
                f.write_str(buffer.format(n))
            }
        }
    }
}

impl fmt::Debug for Number {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                #[inline]
                fn from(value: $ty) -> Self {
                    let value = i64::from(value);

                    let repr = match u64::try_from(value) {
                        Ok(value) => Repr::Unsigned(value),
                        Err(..) => Repr::Signed(value),
                    };

                    Self { repr }
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self {
                        repr: Repr::Unsigned(u64::from(value)),
                    }
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<f32> for Number {
    #[inline]
    fn from(value: f32) -> Self {
        Self::from(f64::from(value))
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Self {
            repr: Repr::Float(value),
        }
    }
}

impl From<usize> for Number {
    #[inline]
    fn from(value: usize) -> Self {
        // usize is at most 64 bits on every supported target.
        Self {
            repr: Repr::Unsigned(value as u64),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Number {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.repr {
            Repr::Signed(n) => serializer.serialize_i64(n),
            Repr::Unsigned(n) => serializer.serialize_u64(n),
            Repr::Float(n) => serializer.serialize_f64(n),
        }
    }
}
