use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ptr;
use std::slice;

use super::Slots;
use crate::collections::contiguous::RawArray;
#[doc(inline)]
pub use crate::util::error::{
    AllocError, CapacityOverflow, EmptyCollection, IndexOutOfBounds, PopError, PushError,
    ReserveError, WidthMismatch,
};
use crate::util::result::ResultExtension;

/// The capacity of a RawVector created with [`RawVector::new`], also used when growing a
/// RawVector with no capacity.
pub const DEFAULT_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection of untyped elements, based on [`RawArray`].
///
/// Every element is a block of exactly [`width`](RawVector::width) bytes, fixed when the RawVector
/// is created. The RawVector never interprets these bytes, it is up to the caller to encode values
/// when pushing and decode them again when reading. See
/// [`RecordVector`](super::super::RecordVector) for a typed wrapper.
///
/// Capacity doubles whenever a push finds the RawVector full and is never reduced by removing
/// elements. The bytes of a popped element stay in memory until they are overwritten by the next
/// push.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the RawVector.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `pop_into` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `clear` | `O(1)` |
///
/// \* If the RawVector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the RawVector has enough capacity for the additional elements already, `reserve` is
/// `O(1)`.
pub struct RawVector {
    pub(crate) arr: RawArray,
    pub(crate) len: usize,
}

impl RawVector {
    /// Creates a new, empty RawVector for elements of `width` bytes with capacity
    /// [`DEFAULT_CAP`].
    ///
    /// # Panics
    /// Panics if the memory can't be allocated, see [`RawVector::try_new`].
    ///
    /// # Examples
    /// ```
    /// # use raw_collections::collections::contiguous::RawVector;
    /// let vec = RawVector::new(8);
    /// assert_eq!(vec.width(), 8);
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 2);
    /// ```
    pub fn new(width: usize) -> RawVector {
        RawVector::try_new(width).throw()
    }

    /// Creates a new, empty RawVector for elements of `width` bytes with capacity
    /// [`DEFAULT_CAP`], returning an [`Err`] if the memory can't be obtained.
    ///
    /// # Errors
    /// Returns a [`CapacityOverflow`] if the size of the allocation would exceed [`isize::MAX`]
    /// bytes, or an [`AllocError`] if the allocator fails.
    pub fn try_new(width: usize) -> Result<RawVector, ReserveError> {
        RawVector::try_with_cap(width, DEFAULT_CAP)
    }

    /// Creates a new RawVector with capacity exactly equal to the provided value, allowing `cap`
    /// elements to be added without reallocation.
    ///
    /// # Panics
    /// Panics if the memory can't be allocated, see [`RawVector::try_with_cap`].
    ///
    /// # Examples
    /// ```
    /// # use raw_collections::collections::contiguous::RawVector;
    /// let mut vec = RawVector::with_cap(1, 3);
    /// vec.push(&[1]);
    /// vec.push(&[2]);
    /// vec.push(&[3]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn with_cap(width: usize, cap: usize) -> RawVector {
        RawVector::try_with_cap(width, cap).throw()
    }

    /// Creates a new RawVector with capacity exactly equal to the provided value, returning an
    /// [`Err`] if the memory can't be obtained.
    ///
    /// # Errors
    /// Returns a [`CapacityOverflow`] if `width * cap` would exceed [`isize::MAX`], or an
    /// [`AllocError`] if the allocator fails.
    pub fn try_with_cap(width: usize, cap: usize) -> Result<RawVector, ReserveError> {
        Ok(RawVector {
            arr: RawArray::try_new_uninit(width, cap)?,
            len: 0,
        })
    }

    /// Returns the width of each element, in bytes.
    pub const fn width(&self) -> usize {
        self.arr.width()
    }

    /// Returns the number of elements in the RawVector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the RawVector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the RawVector can hold before reallocating.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Copies `value` onto the end of the RawVector, doubling the capacity if it is full.
    ///
    /// # Panics
    /// Panics if `value` isn't exactly [`width`](RawVector::width) bytes long, or if the
    /// RawVector can't grow. See [`RawVector::try_push`].
    ///
    /// # Examples
    /// ```
    /// # use raw_collections::collections::contiguous::RawVector;
    /// let mut vec = RawVector::new(2);
    /// for i in 0..5_u16 {
    ///     vec.push(&i.to_le_bytes());
    /// }
    /// assert_eq!(vec.len(), 5);
    /// assert_eq!(vec.cap(), 8);
    /// assert_eq!(vec.get(3), &[3, 0]);
    /// ```
    pub fn push(&mut self, value: &[u8]) {
        self.try_push(value).throw()
    }

    /// Copies `value` onto the end of the RawVector, doubling the capacity if it is full. On
    /// failure, the RawVector is left unchanged.
    ///
    /// # Errors
    /// Returns a [`WidthMismatch`] if `value` isn't exactly [`width`](RawVector::width) bytes long
    /// and a [`ReserveError`] if the RawVector needs to grow and can't.
    pub fn try_push(&mut self, value: &[u8]) -> Result<(), PushError> {
        self.check_width(value.len())?;
        self.try_push_with(|slot| slot.copy_from_slice(value))?;
        Ok(())
    }

    /// Appends a new element, growing if required, and passes its bytes to `write` to be
    /// initialized. The slot is zeroed before `write` is called, so any bytes it doesn't write are
    /// left as zero.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the RawVector needs to grow and can't, in which case `write`
    /// isn't called.
    ///
    /// # Examples
    /// ```
    /// # use raw_collections::collections::contiguous::RawVector;
    /// let mut vec = RawVector::new(4);
    /// vec.try_push_with(|slot| slot[..2].copy_from_slice(&[7, 7])).unwrap();
    /// assert_eq!(vec.get(0), &[7, 7, 0, 0]);
    /// ```
    pub fn try_push_with<F: FnOnce(&mut [u8])>(&mut self, write: F) -> Result<(), ReserveError> {
        if self.len == self.cap() {
            self.try_grow()?;
        }

        // SAFETY: len < cap after growing, so the slot is within the allocation. Zeroing the slot
        // initializes it before a reference is created.
        let slot = unsafe {
            let ptr = self.arr.slot_ptr(self.len).as_ptr();
            ptr::write_bytes(ptr, 0, self.width());
            slice::from_raw_parts_mut(ptr, self.width())
        };
        write(slot);

        self.len += 1;
        Ok(())
    }

    /// Copies `value` onto the end of the RawVector, assuming that there is enough capacity to do
    /// so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the RawVector has spare capacity (`len < cap`) and
    /// that `value` is exactly [`width`](RawVector::width) bytes long. Using this method otherwise
    /// is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use raw_collections::collections::contiguous::RawVector;
    /// let mut vec = RawVector::with_cap(1, 3);
    /// for i in 1..=3_u8 {
    ///     // SAFETY: vec has enough capacity for all 3 single byte elements.
    ///     unsafe { vec.push_unchecked(&[i]) };
    /// }
    /// assert_eq!(vec.as_bytes(), &[1, 2, 3]);
    /// ```
    pub const unsafe fn push_unchecked(&mut self, value: &[u8]) {
        // SAFETY: The caller ensures that the slot at len is within the allocation and that value
        // has exactly width bytes. value can't overlap memory exclusively owned by self.
        unsafe {
            ptr::copy_nonoverlapping(
                value.as_ptr(),
                self.arr.slot_ptr(self.len).as_ptr(),
                self.width(),
            );
        }
        self.len += 1;
    }

    /// Removes the last element, copying its bytes into `out`.
    ///
    /// # Errors
    /// Returns an [`EmptyCollection`] if the RawVector has no elements and a [`WidthMismatch`] if
    /// `out` isn't exactly [`width`](RawVector::width) bytes long. In both cases, neither self nor
    /// `out` is modified.
    ///
    /// # Examples
    /// ```
    /// # use raw_collections::collections::contiguous::RawVector;
    /// let mut vec = RawVector::new(2);
    /// vec.push(&[1, 2]);
    ///
    /// let mut out = [0; 2];
    /// vec.pop_into(&mut out).unwrap();
    /// assert_eq!(out, [1, 2]);
    /// assert!(vec.pop_into(&mut out).unwrap_err().is_empty_collection());
    /// ```
    pub fn pop_into(&mut self, out: &mut [u8]) -> Result<(), PopError> {
        if self.is_empty() {
            Err(EmptyCollection)?
        }
        self.check_width(out.len())?;

        self.pop_with(|bytes| out.copy_from_slice(bytes));
        Ok(())
    }

    /// Removes the last element, returning an owned copy of its bytes if the RawVector has length
    /// greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use raw_collections::collections::contiguous::RawVector;
    /// let mut vec = RawVector::new(1);
    /// vec.push(&[4]);
    /// vec.push(&[5]);
    /// assert_eq!(vec.pop().as_deref(), Some(&[5_u8][..]));
    /// assert_eq!(vec.pop().as_deref(), Some(&[4_u8][..]));
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<Box<[u8]>> {
        self.pop_with(|bytes| Box::from(bytes))
    }

    /// Removes the last element, passing its bytes to `read` and returning the result. Returns
    /// [`None`] without calling `read` if the RawVector is empty.
    pub fn pop_with<T, F: FnOnce(&[u8]) -> T>(&mut self, read: F) -> Option<T> {
        let last = self.last()?;
        let value = read(last);

        // The popped bytes stay where they are until the next push overwrites them.
        self.len -= 1;
        Some(value)
    }

    /// Returns the bytes of the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the RawVector.
    pub fn get(&self, index: usize) -> &[u8] {
        self.try_get(index).throw()
    }

    /// Returns the bytes of the element at `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    ///
    /// # Errors
    /// Returns an [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use raw_collections::collections::contiguous::RawVector;
    /// let mut vec = RawVector::new(3);
    /// vec.push(b"abc");
    /// assert_eq!(vec.try_get(0), Ok(&b"abc"[..]));
    /// assert!(vec.try_get(1).is_err());
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&[u8], IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the element is within the allocation and initialized.
        Ok(unsafe { self.slot(index) })
    }

    /// Returns the bytes of the element at `index` mutably, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the RawVector.
    pub fn get_mut(&mut self, index: usize) -> &mut [u8] {
        self.try_get_mut(index).throw()
    }

    /// Returns the bytes of the element at `index` mutably, returning an [`Err`] on a failure
    /// rather than panicking.
    ///
    /// # Errors
    /// Returns an [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut [u8], IndexOutOfBounds> {
        self.check_index(index)?;
        let width = self.width();
        // SAFETY: index < len, so the element is within the allocation and initialized.
        Ok(unsafe { &mut self.arr.initialized_mut(self.len)[index * width..(index + 1) * width] })
    }

    /// Returns the bytes of the last element, if there is one.
    pub fn last(&self) -> Option<&[u8]> {
        match self.len.checked_sub(1) {
            // SAFETY: len - 1 is always in bounds when len > 0.
            Some(index) => Some(unsafe { self.slot(index) }),
            None => None,
        }
    }

    /// Returns the bytes of every element, laid out contiguously.
    pub const fn as_bytes(&self) -> &[u8] {
        // SAFETY: All elements before len are initialized and len <= size.
        unsafe { self.arr.initialized(self.len) }
    }

    /// Returns an iterator over the bytes of each element.
    ///
    /// # Examples
    /// ```
    /// # use raw_collections::collections::contiguous::RawVector;
    /// let mut vec = RawVector::new(2);
    /// vec.push(&[1, 2]);
    /// vec.push(&[3, 4]);
    /// let mut iter = vec.iter();
    /// assert_eq!(iter.next(), Some(&[1_u8, 2][..]));
    /// assert_eq!(iter.next(), Some(&[3_u8, 4][..]));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Slots<'_> {
        self.into_iter()
    }

    /// Removes every element. The capacity is unchanged.
    pub const fn clear(&mut self) {
        self.len = 0;
    }

    /// Ensures that the RawVector has capacity to hold an additional `extra` elements. After
    /// invoking this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the RawVector can't grow, see [`RawVector::try_reserve`].
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Ensures that the RawVector has capacity to hold an additional `extra` elements, returning
    /// an [`Err`] if it can't grow.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the new capacity is too large or can't be allocated.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), ReserveError> {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if new_cap <= self.cap() {
            return Ok(());
        }

        self.realloc_with_cap(new_cap)
    }

    /// Grows the internal RawArray to allow for the addition of another element, doubling its
    /// capacity.
    pub(crate) fn try_grow(&mut self) -> Result<(), ReserveError> {
        let new_cap = match self.cap() {
            0 => DEFAULT_CAP,
            cap => cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?,
        };

        self.realloc_with_cap(new_cap)
    }

    /// Reallocates the internal RawArray with the provided capacity, keeping all elements.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        tracing::trace!(
            width = self.width(),
            len = self.len,
            old_cap = self.cap(),
            new_cap,
            "reallocating raw vector"
        );
        self.arr.try_realloc(new_cap, self.len)
    }

    /// Returns the bytes of the element at `index` without checking bounds.
    ///
    /// # Safety
    /// `index` must be less than len.
    pub(crate) const unsafe fn slot(&self, index: usize) -> &[u8] {
        // SAFETY: The caller ensures index < len, so the element is initialized and within the
        // allocation.
        unsafe { slice::from_raw_parts(self.arr.slot_ptr(index).as_ptr(), self.width()) }
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    pub(crate) const fn check_width(&self, found: usize) -> Result<(), WidthMismatch> {
        if found != self.width() {
            Err(WidthMismatch {
                expected: self.width(),
                found,
            })
        } else {
            Ok(())
        }
    }
}

impl Clone for RawVector {
    /// Clones the RawVector with the same capacity.
    ///
    /// # Panics
    /// Panics if the memory for the clone can't be allocated.
    fn clone(&self) -> Self {
        let mut vec = RawVector::with_cap(self.width(), self.cap());

        // SAFETY: Both have the same width and capacity, so the new RawVector can hold len
        // elements. The source bytes are initialized and the allocations don't overlap.
        unsafe {
            ptr::copy_nonoverlapping(
                self.arr.ptr.as_ptr().cast_const(),
                vec.arr.ptr.as_ptr(),
                self.as_bytes().len(),
            );
        }
        vec.len = self.len;

        vec
    }
}

impl PartialEq for RawVector {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width() && self.len == other.len && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for RawVector {}

impl Hash for RawVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width().hash(state);
        self.len.hash(state);
        self.as_bytes().hash(state);
    }
}

impl Debug for RawVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawVector")
            .field("contents", &self.iter())
            .field("width", &self.width())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
