//! Contiguous collection types, storing untyped fixed-width elements in a single block of memory.
//!
//! [`RawVector`] is the growable buffer itself, built on top of [`RawArray`]. [`RecordVector`]
//! layers a type over it through the [`Record`] trait.

pub mod raw_array;
pub mod raw_vector;
pub mod record;

#[doc(inline)]
pub use raw_array::RawArray;
#[doc(inline)]
pub use raw_vector::{RawVector, Slots};
#[doc(inline)]
pub use record::{Record, RecordVector, Records};
