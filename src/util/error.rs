//! Error types shared by the collections in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was greater than or equal to the length of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The requested index.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A requested capacity exceeded the maximum size of an allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The global allocator was unable to provide a block of `bytes` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError {
    /// The size of the failed allocation.
    pub bytes: usize,
}

impl Display for AllocError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to allocate {} bytes!", self.bytes)
    }
}

impl Error for AllocError {}

/// An element was requested from a collection with none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to remove an element from an empty collection!")
    }
}

impl Error for EmptyCollection {}

/// A byte slice didn't match the element width of an untyped collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthMismatch {
    /// The element width of the collection.
    pub expected: usize,
    /// The length of the provided slice.
    pub found: usize,
}

impl Display for WidthMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expected {} bytes for an element, found {}!",
            self.expected, self.found
        )
    }
}

impl Error for WidthMismatch {}

/// Errors which can occur while allocating memory for a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ReserveError {
    /// The allocator couldn't provide the memory.
    AllocError(AllocError),
    /// The requested size doesn't fit in an `isize`.
    CapacityOverflow(CapacityOverflow),
}

/// Errors which can occur while pushing to an untyped collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum PushError {
    /// The pushed bytes weren't exactly one element wide.
    #[from]
    WidthMismatch(WidthMismatch),
    /// The collection was full and couldn't grow.
    #[from(ReserveError, AllocError, CapacityOverflow)]
    ReserveError(ReserveError),
}

/// Errors which can occur while popping from an untyped collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum PopError {
    /// There was no element to pop.
    EmptyCollection(EmptyCollection),
    /// The output buffer wasn't exactly one element wide.
    WidthMismatch(WidthMismatch),
}
