//! Two classic data structures, written from scratch on top of raw allocations: an untyped growable
//! buffer and a singly-linked list.
//!
//! # Purpose
//! This crate is a learning exercise, with no expectation for it to be used in production. Each
//! structure shows a technique that is normally hidden behind [`Vec`] or
//! [`LinkedList`](std::collections::LinkedList):
//! - [`RawVector`](collections::contiguous::RawVector) stores elements of a width chosen at
//!   runtime as plain bytes, doubling its capacity when it fills up. Generic storage is emulated by
//!   copying bytes in and out, with [`Record`](collections::contiguous::Record) describing how a
//!   type maps onto those bytes.
//! - [`ForwardList`](collections::linked::ForwardList) is a chain of heap allocated nodes, each
//!   owning the next, with a cached tail for constant time appends and a visitor-based traversal.
//!
//! # Error Handling
//! Most operations come in two flavours. `try_*` methods return strongly typed errors: one struct
//! per condition implementing [`Error`](std::error::Error), combined into enums for operations that
//! can fail in more than one way. The plain versions panic with the error's message instead, which
//! is more ergonomic when a failure can only be caused by a bug in the caller.
//!
//! Allocation failures are always reported as an [`AllocError`](error::AllocError) rather than
//! aborting.
//!
//! # Features
//! - `contiguous`: [`RawArray`](collections::contiguous::RawArray),
//!   [`RawVector`](collections::contiguous::RawVector) and
//!   [`RecordVector`](collections::contiguous::RecordVector).
//! - `linked`: [`ForwardList`](collections::linked::ForwardList).
//! - `collections-all` (default): all of the above.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub use util::error;

pub(crate) mod util;
