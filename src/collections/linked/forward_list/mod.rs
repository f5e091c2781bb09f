mod forward_list;
mod iter;
mod length;
mod node;
mod tests;

pub use forward_list::*;
pub use iter::*;
pub(crate) use length::*;
pub use node::Node;
pub(crate) use node::NodeRef;
