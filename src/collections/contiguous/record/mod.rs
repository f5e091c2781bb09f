//! A module containing the [`Record`] trait and [`RecordVector`], a typed wrapper around
//! [`RawVector`](super::RawVector).

mod record;
mod record_vector;

pub use record::*;
pub use record_vector::*;
