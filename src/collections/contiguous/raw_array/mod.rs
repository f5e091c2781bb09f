//! A module containing [`RawArray`], the untyped block of memory backing
//! [`RawVector`](super::RawVector).

mod raw_array;
mod tests;

pub use raw_array::*;
