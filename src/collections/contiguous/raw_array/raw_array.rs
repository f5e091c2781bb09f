use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::{AllocError, CapacityOverflow, ReserveError};

/// A heap allocated block of memory, sized at runtime to hold `size` elements of `width` bytes
/// each. The type of the elements is unknown to the RawArray, so it never reads, initializes or
/// drops them. It is only responsible for obtaining and releasing the memory.
///
/// Memory handed out by a RawArray starts uninitialized. Keeping track of which elements have been
/// written is the responsibility of the owner, see [`RawVector`](super::super::RawVector).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements kept during reallocation.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `width` | `O(1)` |
/// | `try_realloc` | `O(n)`*, `O(1)` |
///
/// \* Reallocation is `O(1)` if the size is unchanged or the element width is zero.
pub struct RawArray {
    pub(crate) ptr: NonNull<u8>,
    pub(crate) size: usize,
    pub(crate) width: usize,
}

impl RawArray {
    /// Allocates a new RawArray with space for `size` elements of `width` bytes. The contents are
    /// uninitialized.
    ///
    /// # Errors
    /// Returns a [`CapacityOverflow`] if `size * width` exceeds [`isize::MAX`] or an [`AllocError`]
    /// if the global allocator can't provide the memory.
    ///
    /// # Examples
    /// ```
    /// # use raw_collections::collections::contiguous::RawArray;
    /// let arr = RawArray::try_new_uninit(8, 4).unwrap();
    /// assert_eq!(arr.size(), 4);
    /// assert_eq!(arr.byte_size(), 32);
    /// ```
    pub fn try_new_uninit(width: usize, size: usize) -> Result<RawArray, ReserveError> {
        let layout = RawArray::make_layout(width, size)?;
        let ptr = RawArray::make_ptr(layout)?;

        Ok(RawArray {
            ptr,
            size,
            width,
        })
    }

    /// Returns the number of elements the RawArray has space for.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the width of a single element, in bytes.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the total number of bytes held by the RawArray.
    pub const fn byte_size(&self) -> usize {
        // Can't overflow, checked when the layout was created.
        self.size * self.width
    }

    /// Reallocates the RawArray to hold `new_size` elements, keeping the first `keep` elements.
    /// The bytes of any other elements are not carried over.
    ///
    /// A new block is allocated, the kept bytes are copied across and the old block is released.
    /// If the allocation fails, self is left unchanged.
    ///
    /// # Errors
    /// Returns a [`CapacityOverflow`] if `new_size * width` exceeds [`isize::MAX`] or an
    /// [`AllocError`] if the global allocator can't provide the memory.
    ///
    /// # Panics
    /// Panics if `keep` is greater than either the current or new size.
    pub fn try_realloc(&mut self, new_size: usize, keep: usize) -> Result<(), ReserveError> {
        assert!(
            keep <= self.size && keep <= new_size,
            "Can't keep {keep} elements when reallocating from {} to {new_size}!",
            self.size,
        );

        if new_size == self.size {
            return Ok(());
        }

        let new_layout = RawArray::make_layout(self.width, new_size)?;
        let new_ptr = RawArray::make_ptr(new_layout)?;

        // SAFETY: Both blocks are valid for at least keep * width bytes, which can't overflow
        // because keep <= new_size. The new block is a fresh allocation so they can't overlap.
        // Zero-width elements copy nothing, which is fine for dangling pointers.
        unsafe {
            ptr::copy_nonoverlapping(
                self.ptr.as_ptr().cast_const(),
                new_ptr.as_ptr(),
                keep * self.width,
            );
        }

        // SAFETY: self.ptr was allocated with the current layout, which is only deallocated here
        // and in drop. It is replaced immediately, so it won't be deallocated twice.
        unsafe { self.dealloc() };

        self.ptr = new_ptr;
        self.size = new_size;
        Ok(())
    }

    /// Returns a pointer to the first byte of the element at `index`.
    ///
    /// # Safety
    /// `index` must be less than `size`. Reading through the pointer is only valid if the element
    /// has been initialized.
    pub(crate) const unsafe fn slot_ptr(&self, index: usize) -> NonNull<u8> {
        // SAFETY: index < size, so the offset is within the allocated block and can't overflow
        // isize::MAX.
        unsafe { self.ptr.add(index * self.width) }
    }

    /// Returns the bytes of the first `count` elements as a slice.
    ///
    /// # Safety
    /// `count` must be less than or equal to `size` and all of the first `count` elements must be
    /// initialized.
    pub(crate) const unsafe fn initialized(&self, count: usize) -> &[u8] {
        // SAFETY: The caller guarantees that the range is within the block and initialized. The
        // pointer is nonnull and u8 has no alignment requirements.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), count * self.width) }
    }

    /// Returns the bytes of the first `count` elements as a mutable slice.
    ///
    /// # Safety
    /// The same requirements as [`RawArray::initialized`] apply.
    pub(crate) const unsafe fn initialized_mut(&mut self, count: usize) -> &mut [u8] {
        // SAFETY: As above, with &mut self ensuring exclusive access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), count * self.width) }
    }

    /// A helper function to create a [`Layout`] for `size` elements of `width` bytes each.
    pub(crate) fn make_layout(width: usize, size: usize) -> Result<Layout, CapacityOverflow> {
        let bytes = width.checked_mul(size).ok_or(CapacityOverflow)?;
        Layout::array::<u8>(bytes).map_err(|_| CapacityOverflow)
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    pub(crate) fn make_ptr(layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: Zero-sized layouts have been guarded against.
        let raw_ptr = unsafe { alloc::alloc(layout) };

        NonNull::new(raw_ptr).ok_or_else(|| {
            tracing::debug!(bytes = layout.size(), "allocation failed");
            AllocError { bytes: layout.size() }
        })
    }

    /// Releases the block currently held by self, without updating ptr or size.
    ///
    /// # Safety
    /// The pointer must not be used or deallocated again afterwards.
    unsafe fn dealloc(&mut self) {
        // The layout was valid when the block was allocated, so recreating it can't fail.
        let Ok(layout) = RawArray::make_layout(self.width, self.size) else {
            return;
        };

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator with this layout. Zero-sized
            // layouts aren't allocated and are guarded against deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr(), layout) }
        }
    }
}

impl Drop for RawArray {
    fn drop(&mut self) {
        // Elements are plain bytes, so there is nothing to drop in place.
        // SAFETY: self is never used again.
        unsafe { self.dealloc() };
    }
}

// SAFETY: RawArray uniquely owns its allocation and only holds plain bytes.
unsafe impl Send for RawArray {}
// SAFETY: RawArray's API only hands out shared access through &self, with no interior mutability.
unsafe impl Sync for RawArray {}

impl Debug for RawArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawArray")
            .field("size", &self.size)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}
