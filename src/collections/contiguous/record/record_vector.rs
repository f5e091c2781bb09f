use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::Record;
use crate::collections::contiguous::{RawVector, Slots};
use crate::util::error::{IndexOutOfBounds, ReserveError};
use crate::util::result::ResultExtension;

/// A typed view over a [`RawVector`], storing values of any [`Record`] type as `R::WIDTH` bytes
/// each.
///
/// All growth, bounds checking and removal behaves exactly as it does for the underlying
/// RawVector. Values are encoded when pushed and decoded on every read, so accessors return owned
/// values rather than references.
pub struct RecordVector<R: Record> {
    pub(crate) raw: RawVector,
    pub(crate) _phantom: PhantomData<R>,
}

impl<R: Record> RecordVector<R> {
    /// Creates a new, empty RecordVector with the default capacity.
    ///
    /// # Panics
    /// Panics if the memory can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use raw_collections::collections::contiguous::RecordVector;
    /// let mut vec = RecordVector::<u32>::new();
    /// vec.push(&7);
    /// assert_eq!(vec.get(0), 7);
    /// assert_eq!(vec.as_raw().width(), 4);
    /// ```
    pub fn new() -> RecordVector<R> {
        RecordVector::try_new().throw()
    }

    /// Creates a new, empty RecordVector with the default capacity, returning an [`Err`] if the
    /// memory can't be obtained.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the allocation is too large or fails.
    pub fn try_new() -> Result<RecordVector<R>, ReserveError> {
        Ok(RecordVector::from_raw(RawVector::try_new(R::WIDTH)?))
    }

    /// Creates a new RecordVector with capacity exactly equal to the provided value.
    ///
    /// # Panics
    /// Panics if the memory can't be allocated.
    pub fn with_cap(cap: usize) -> RecordVector<R> {
        RecordVector::try_with_cap(cap).throw()
    }

    /// Creates a new RecordVector with capacity exactly equal to the provided value, returning an
    /// [`Err`] if the memory can't be obtained.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the allocation is too large or fails.
    pub fn try_with_cap(cap: usize) -> Result<RecordVector<R>, ReserveError> {
        Ok(RecordVector::from_raw(RawVector::try_with_cap(R::WIDTH, cap)?))
    }

    /// Returns the number of records in the RecordVector.
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the RecordVector contains no records.
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of records the RecordVector can hold before reallocating.
    pub const fn cap(&self) -> usize {
        self.raw.cap()
    }

    /// Encodes `record` onto the end of the RecordVector, doubling the capacity if it is full.
    ///
    /// # Panics
    /// Panics if the RecordVector needs to grow and can't.
    pub fn push(&mut self, record: &R) {
        self.try_push(record).throw()
    }

    /// Encodes `record` onto the end of the RecordVector, returning an [`Err`] if it needs to grow
    /// and can't.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the new capacity is too large or can't be allocated.
    pub fn try_push(&mut self, record: &R) -> Result<(), ReserveError> {
        self.raw.try_push_with(|slot| record.write_bytes(slot))
    }

    /// Removes and decodes the last record, if there is one.
    ///
    /// # Examples
    /// ```
    /// # use raw_collections::collections::contiguous::RecordVector;
    /// let mut vec = RecordVector::<i16>::new();
    /// vec.push(&-3);
    /// assert_eq!(vec.pop(), Some(-3));
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<R> {
        self.raw.pop_with(R::read_bytes)
    }

    /// Decodes the record at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the RecordVector.
    pub fn get(&self, index: usize) -> R {
        self.try_get(index).throw()
    }

    /// Decodes the record at `index`, returning an [`Err`] on a failure rather than panicking.
    ///
    /// # Errors
    /// Returns an [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<R, IndexOutOfBounds> {
        self.raw.try_get(index).map(R::read_bytes)
    }

    /// Overwrites the record at `index` with `record`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the RecordVector.
    pub fn set(&mut self, index: usize, record: &R) {
        self.try_set(index, record).throw()
    }

    /// Overwrites the record at `index` with `record`, returning an [`Err`] on a failure rather
    /// than panicking.
    ///
    /// # Errors
    /// Returns an [`IndexOutOfBounds`] if `index >= len`. The RecordVector is left unchanged.
    pub fn try_set(&mut self, index: usize, record: &R) -> Result<(), IndexOutOfBounds> {
        record.write_bytes(self.raw.try_get_mut(index)?);
        Ok(())
    }

    /// Returns an iterator which decodes each record in order.
    pub fn iter(&self) -> Records<'_, R> {
        self.into_iter()
    }

    /// Returns the underlying untyped RawVector.
    pub const fn as_raw(&self) -> &RawVector {
        &self.raw
    }

    /// Unwraps the underlying untyped RawVector.
    pub fn into_raw(self) -> RawVector {
        self.raw
    }

    const fn from_raw(raw: RawVector) -> RecordVector<R> {
        RecordVector {
            raw,
            _phantom: PhantomData,
        }
    }
}

impl<R: Record> Default for RecordVector<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Clone for RecordVector<R> {
    fn clone(&self) -> Self {
        RecordVector::from_raw(self.raw.clone())
    }
}

impl<R: Record> PartialEq for RecordVector<R> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<R: Record> Eq for RecordVector<R> {}

impl<R: Record> Extend<R> for RecordVector<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for record in iter {
            self.push(&record);
        }
    }
}

impl<R: Record> FromIterator<R> for RecordVector<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut vec = RecordVector::new();
        vec.extend(iter);
        vec
    }
}

impl<R: Record + Debug> Debug for RecordVector<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordVector")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<'a, R: Record> IntoIterator for &'a RecordVector<R> {
    type Item = R;

    type IntoIter = Records<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        Records {
            slots: self.raw.iter(),
            _phantom: PhantomData,
        }
    }
}

/// An iterator which decodes each record of a [`RecordVector`].
pub struct Records<'a, R: Record> {
    pub(crate) slots: Slots<'a>,
    pub(crate) _phantom: PhantomData<R>,
}

impl<R: Record> Iterator for Records<'_, R> {
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(R::read_bytes)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<R: Record> DoubleEndedIterator for Records<'_, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(R::read_bytes)
    }
}

impl<R: Record> ExactSizeIterator for Records<'_, R> {}

impl<R: Record> FusedIterator for Records<'_, R> {}

impl<R: Record> Clone for Records<'_, R> {
    fn clone(&self) -> Self {
        Records {
            slots: self.slots.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<R: Record + Debug> Debug for Records<'_, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
