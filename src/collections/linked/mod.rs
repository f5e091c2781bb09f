//! Linked collection types. Currently this is only [`ForwardList`], a singly-linked list which
//! grows at the back and is walked front to back.

pub mod forward_list;

#[doc(inline)]
pub use forward_list::{ForwardList, Node};
