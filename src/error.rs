use core::fmt;

use crate::Key;

/// An error raised by the strict accessors of a
/// [`NestedView`][crate::NestedView].
///
/// # Examples
///
/// ```
/// use nested_view::{Container, Key, NestedView};
///
/// let view = NestedView::new(Container::new());
/// let error = view.require("missing").unwrap_err();
///
/// assert!(error.is_not_found());
/// assert_eq!(error.key(), &Key::from("missing"));
/// assert_eq!(error.to_string(), "no value set for missing");
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    #[inline]
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Get the kind of the error.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Get the key the error refers to.
    #[must_use]
    #[inline]
    pub fn key(&self) -> &Key {
        match &self.kind {
            ErrorKind::NotFound(key) | ErrorKind::NotAContainer(key) => key,
        }
    }

    /// Test if the error was caused by a missing key.
    #[must_use]
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound(..))
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for Error {}

/// The kind of an [`Error`].
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// No value is stored at the key.
    NotFound(Key),
    /// The value at the key is not a container, so navigation cannot continue
    /// through it.
    NotAContainer(Key),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotFound(key) => write!(f, "no value set for {key}"),
            ErrorKind::NotAContainer(key) => write!(f, "value at {key} is not a container"),
        }
    }
}
