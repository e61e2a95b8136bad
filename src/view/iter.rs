use core::iter::FusedIterator;

use crate::any::shape;
use crate::{Any, Container};

/// A positional iterator over a [`NestedView`][crate::NestedView].
///
/// See [`NestedView::positions`][crate::NestedView::positions].
pub struct Positions {
    container: Container,
    index: Option<usize>,
}

impl Positions {
    #[inline]
    pub(crate) fn new(container: Container) -> Self {
        Self {
            container,
            index: Some(0),
        }
    }
}

impl Iterator for Positions {
    type Item = (usize, Any);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index?;

        let Some(value) = self.container.get(index) else {
            self.index = None;
            return None;
        };

        self.index = index.checked_add(1);
        Some((index, shape(value)))
    }
}

impl FusedIterator for Positions {}
