//! Various general-purpose collection types.
//!
//! # Purpose
//! These types exist to demonstrate how the data structures work underneath, including concepts
//! such as raw allocation, type erasure, ownership chains and visitor-based traversal.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
