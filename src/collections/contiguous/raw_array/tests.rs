#![cfg(test)]

use super::*;
use crate::util::error::{CapacityOverflow, ReserveError};
use crate::util::panic::assert_panics;

#[test]
fn test_zero_width() {
    let mut arr = RawArray::try_new_uninit(0, 5).unwrap();
    assert_eq!(arr.byte_size(), 0);

    let old_ptr = arr.ptr;
    arr.try_realloc(30, 5).unwrap();
    assert_eq!(arr.size(), 30);
    assert_eq!(
        arr.ptr, old_ptr,
        "Pointer shouldn't change when reallocated for zero-width elements."
    );
}

#[test]
fn test_realloc_keeps_bytes() {
    let mut arr = RawArray::try_new_uninit(2, 3).unwrap();
    // SAFETY: All 3 elements are written before being read.
    unsafe {
        for i in 0..3 {
            arr.slot_ptr(i).write(i as u8);
            arr.slot_ptr(i).add(1).write(0xA0 + i as u8);
        }
    }

    arr.try_realloc(6, 3).unwrap();
    assert_eq!(arr.size(), 6);
    assert_eq!(
        // SAFETY: The first 3 elements were kept.
        unsafe { arr.initialized(3) },
        &[0, 0xA0, 1, 0xA1, 2, 0xA2],
        "Kept elements should be copied into the new block."
    );

    arr.try_realloc(1, 1).unwrap();
    assert_eq!(
        // SAFETY: The first element was kept.
        unsafe { arr.initialized(1) },
        &[0, 0xA0],
        "Shrinking should keep the leading elements."
    );
}

#[test]
fn test_realloc_same_size() {
    let mut arr = RawArray::try_new_uninit(4, 4).unwrap();
    let old_ptr = arr.ptr;
    arr.try_realloc(4, 0).unwrap();
    assert_eq!(
        arr.ptr, old_ptr,
        "When reallocating to the same size, the pointer shouldn't change."
    );
}

#[test]
fn test_capacity_overflow() {
    assert_eq!(
        RawArray::try_new_uninit(2, isize::MAX as usize).unwrap_err(),
        ReserveError::CapacityOverflow(CapacityOverflow),
    );
    assert_eq!(
        RawArray::try_new_uninit(usize::MAX, 2).unwrap_err(),
        ReserveError::CapacityOverflow(CapacityOverflow),
    );

    let mut arr = RawArray::try_new_uninit(8, 2).unwrap();
    assert!(arr.try_realloc(usize::MAX / 4, 2).unwrap_err().is_capacity_overflow());
    assert_eq!(arr.size(), 2, "A failed reallocation should leave the RawArray unchanged.");
}

#[test]
fn test_keep_out_of_range() {
    assert_panics!({
        let mut arr = RawArray::try_new_uninit(1, 2).unwrap();
        let _ = arr.try_realloc(4, 3);
    });
}
