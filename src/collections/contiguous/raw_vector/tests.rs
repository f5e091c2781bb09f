#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::util::panic::assert_panics;

fn record(a: u32, b: u32) -> [u8; 8] {
    let mut bytes = [0; 8];
    bytes[..4].copy_from_slice(&a.to_le_bytes());
    bytes[4..].copy_from_slice(&b.to_le_bytes());
    bytes
}

#[test]
fn test_new() {
    let vec = RawVector::new(8);
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.cap(), DEFAULT_CAP, "New RawVectors should start with the default capacity.");
    assert_eq!(vec.width(), 8);
    assert!(vec.is_empty());
    assert!(vec.as_bytes().is_empty());
}

#[test]
fn test_growth_doubles_once() {
    let mut vec = RawVector::new(4);
    let mut caps = [0; 9];

    for i in 0..9_u32 {
        vec.push(&i.to_le_bytes());
        caps[i as usize] = vec.cap();
    }

    assert_eq!(
        caps,
        [2, 2, 4, 4, 8, 8, 8, 8, 16],
        "Capacity should double exactly when a push finds the RawVector full."
    );
}

#[test]
fn test_grow_from_zero_cap() {
    let mut vec = RawVector::with_cap(1, 0);
    assert_eq!(vec.cap(), 0);
    vec.push(&[1]);
    assert_eq!(vec.cap(), DEFAULT_CAP, "A RawVector with no capacity should grow to the default.");
}

#[test]
fn test_pop_after_three_pushes() {
    let mut vec = RawVector::new(8);
    vec.push(&record(1, 10));
    vec.push(&record(2, 20));
    vec.push(&record(3, 30));

    let mut out = [0; 8];
    vec.pop_into(&mut out).unwrap();
    assert_eq!(out, record(3, 30), "Pop should return the most recently pushed element.");
    assert_eq!(vec.len(), 2);
    assert_eq!(vec.cap(), 4, "Popping should never shrink the RawVector.");
    assert_eq!(
        vec.get(1),
        &record(2, 20),
        "Remaining elements shouldn't be changed by a pop."
    );
}

#[test]
fn test_pop_empty() {
    let mut vec = RawVector::new(2);
    let mut out = [9, 9];

    assert_eq!(
        vec.pop_into(&mut out),
        Err(PopError::EmptyCollection(EmptyCollection)),
    );
    assert_eq!(out, [9, 9], "A failed pop should leave the output untouched.");
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.cap(), DEFAULT_CAP);
    assert_eq!(vec.pop(), None);
}

#[test]
fn test_width_mismatch() {
    let mut vec = RawVector::new(4);
    assert_eq!(
        vec.try_push(&[1, 2, 3]),
        Err(PushError::WidthMismatch(WidthMismatch { expected: 4, found: 3 })),
    );
    assert!(vec.is_empty(), "A rejected push shouldn't add an element.");

    vec.push(&[1, 2, 3, 4]);
    let mut out = [0; 5];
    assert!(vec.pop_into(&mut out).unwrap_err().is_width_mismatch());
    assert_eq!(vec.len(), 1, "A rejected pop shouldn't remove an element.");

    assert_panics!({
        let mut vec = RawVector::new(4);
        vec.push(&[1]);
    });
}

#[test]
fn test_popped_bytes_overwritten() {
    let mut vec = RawVector::new(1);
    vec.push(&[1]);
    vec.push(&[2]);
    assert_eq!(vec.pop().as_deref(), Some(&[2_u8][..]));

    vec.push(&[3]);
    assert_eq!(vec.as_bytes(), &[1, 3], "The next push should overwrite the popped slot.");
}

#[test]
fn test_index_out_of_bounds() {
    let mut vec = RawVector::new(2);
    vec.push(&[0, 1]);

    assert_eq!(vec.try_get(1), Err(IndexOutOfBounds { index: 1, len: 1 }));
    assert_eq!(vec.try_get(0), Ok(&[0_u8, 1][..]));
    assert!(vec.try_get_mut(7).is_err());
    assert!(vec.last().is_some());

    assert_panics!({
        let vec = RawVector::new(2);
        vec.get(0);
    });
}

#[test]
fn test_get_mut() {
    let mut vec = RawVector::new(2);
    vec.push(&[0, 0]);
    vec.push(&[1, 1]);
    vec.get_mut(1).copy_from_slice(&[5, 6]);
    assert_eq!(vec.as_bytes(), &[0, 0, 5, 6]);
}

#[test]
fn test_zero_width() {
    let mut vec = RawVector::new(0);
    for _ in 0..10 {
        vec.push(&[]);
    }
    assert_eq!(vec.len(), 10);
    assert_eq!(vec.iter().count(), 10);
    assert!(vec.get(9).is_empty());
    assert_eq!(vec.pop().map(|bytes| bytes.len()), Some(0));
    assert_eq!(vec.len(), 9);
}

#[test]
fn test_reserve_and_clear() {
    let mut vec = RawVector::new(3);
    vec.reserve(10);
    assert_eq!(vec.cap(), 10);
    vec.reserve(5);
    assert_eq!(vec.cap(), 10, "Reserving available capacity shouldn't reallocate.");

    vec.push(b"abc");
    vec.push(b"def");
    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 10, "Clearing shouldn't shrink the RawVector.");

    assert!(vec.try_reserve(usize::MAX).unwrap_err().is_capacity_overflow());
}

#[test]
fn test_alloc_error() {
    let err = RawVector::try_with_cap(1, isize::MAX as usize).unwrap_err();
    assert!(err.is_alloc_error(), "Expected an AllocError, got {err:?}.");
    assert_panics!({
        RawVector::with_cap(1, isize::MAX as usize);
    });
}

#[test]
fn test_failed_reserve_leaves_vec_unchanged() {
    let mut vec = RawVector::new(1);
    vec.push(&[1]);
    vec.push(&[2]);

    let err = vec.try_reserve(isize::MAX as usize - 2).unwrap_err();
    assert!(err.is_alloc_error(), "Expected an AllocError, got {err:?}.");
    assert_eq!(vec.len(), 2);
    assert_eq!(vec.cap(), 2, "A failed reserve shouldn't change the capacity.");
    assert_eq!(vec.as_bytes(), &[1, 2]);

    vec.push(&[3]);
    assert_eq!(vec.cap(), 4, "The RawVector should still grow after a failed reserve.");
    assert_eq!(vec.as_bytes(), &[1, 2, 3]);
}

#[test]
fn test_iter() {
    let mut vec = RawVector::new(2);
    for i in 0..4_u16 {
        vec.push(&i.to_le_bytes());
    }

    let mut iter = vec.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&[0_u8, 0][..]));
    assert_eq!(iter.next_back(), Some(&[3_u8, 0][..]));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some(&[1_u8, 0][..]));
    assert_eq!(iter.next_back(), Some(&[2_u8, 0][..]));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_clone_eq() {
    let mut vec = RawVector::new(2);
    vec.push(&[1, 2]);
    vec.push(&[3, 4]);
    vec.push(&[5, 6]);

    let mut clone = vec.clone();
    assert_eq!(clone, vec);
    assert_eq!(clone.cap(), vec.cap());

    clone.pop();
    assert_ne!(clone, vec);
    assert_ne!(RawVector::new(1), RawVector::new(2), "Width should be part of equality.");
}

#[test]
fn test_debug() {
    let mut vec = RawVector::new(1);
    vec.push(&[7]);
    assert_eq!(
        format!("{vec:?}"),
        "RawVector { contents: [[7]], width: 1, len: 1, cap: 2 }"
    );
}

proptest! {
    #[test]
    fn prop_len_and_cap_after_pushes(width in 0usize..16, count in 0usize..200) {
        let mut vec = RawVector::new(width);
        let value = vec![0xAB; width];
        for _ in 0..count {
            vec.push(&value);
        }

        let mut expected_cap = DEFAULT_CAP;
        while expected_cap < count {
            expected_cap *= 2;
        }

        prop_assert_eq!(vec.len(), count);
        prop_assert_eq!(vec.cap(), expected_cap);
    }

    #[test]
    fn prop_pop_returns_last_push(values in prop::collection::vec(any::<[u8; 6]>(), 1..64)) {
        let mut vec = RawVector::new(6);
        for value in &values {
            vec.push(value);
        }

        for (remaining, value) in values.iter().enumerate().rev() {
            let mut out = [0; 6];
            prop_assert!(vec.pop_into(&mut out).is_ok());
            prop_assert_eq!(&out, value);
            prop_assert_eq!(vec.len(), remaining);
        }

        prop_assert!(vec.pop_into(&mut [0; 6]).unwrap_err().is_empty_collection());
    }

    #[test]
    fn prop_push_pop_round_trip(
        prefix in prop::collection::vec(any::<u64>(), 0..16),
        value in any::<u64>(),
    ) {
        let mut vec = RawVector::new(8);
        for item in &prefix {
            vec.push(&item.to_le_bytes());
        }
        let before = vec.as_bytes().to_vec();

        vec.push(&value.to_le_bytes());
        let popped = vec.pop();

        prop_assert_eq!(popped.as_deref(), Some(&value.to_le_bytes()[..]));
        prop_assert_eq!(vec.as_bytes(), &before[..]);
    }
}
