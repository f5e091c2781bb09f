//! A module containing [`RawVector`] and associated types.
//!
//! [`Slots`] provides borrowed iteration over the bytes of each element. [`RawVector`] is also
//! re-exported under the parent module.

mod iter;
mod raw_vector;
mod tests;

pub use iter::*;
pub use raw_vector::*;
