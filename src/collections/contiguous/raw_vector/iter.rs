use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use super::RawVector;

impl<'a> IntoIterator for &'a RawVector {
    type Item = &'a [u8];

    type IntoIter = Slots<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Slots {
            vec: self,
            front: 0,
            back: self.len,
        }
    }
}

/// A borrowed iterator over the bytes of each element in a [`RawVector`].
#[derive(Clone)]
pub struct Slots<'a> {
    pub(crate) vec: &'a RawVector,
    // Elements in front..back are yet to be yielded.
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<'a> Iterator for Slots<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: front < back <= len.
        let slot = unsafe { self.vec.slot(self.front) };
        self.front += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl DoubleEndedIterator for Slots<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: front <= back < len.
        Some(unsafe { self.vec.slot(self.back) })
    }
}

impl ExactSizeIterator for Slots<'_> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl FusedIterator for Slots<'_> {}

impl Debug for Slots<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
