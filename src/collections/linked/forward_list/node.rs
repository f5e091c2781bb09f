use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are allocated with Box<T> rather than alloc, because Box<T> allows the value to be
// moved back out of the heap when a node is taken.

/// A pointer to a heap allocated [`Node`], owned by the node before it (or the list, for the
/// head). Copying a NodeRef doesn't copy ownership, the list only ever frees each node once.
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Returns a reference to the node, with a lifetime chosen by the caller.
    pub const fn node<'a>(self) -> &'a Node<T> {
        // SAFETY: NodeRefs are only created from live allocations and the owning list bounds the
        // lifetime of any reference it hands out.
        unsafe { self.0.as_ref() }
    }

    /// Returns a mutable reference to the link to the next node.
    pub const fn next_mut<'a>(self) -> &'a mut Link<T> {
        // SAFETY: As above, with the owning list taking &mut self when calling this method.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Frees the node, moving its contents back out of the heap.
    ///
    /// # Safety
    /// The node must not be accessed through any other NodeRef afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The node was allocated with Box::new and the caller ensures it isn't used again.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Debug for NodeRef<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.0).finish()
    }
}

/// A single node of a [`ForwardList`](super::ForwardList), holding a value and a link to the node
/// after it.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Returns a reference to the value held by this node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the node following this one, or [`None`] if this is the last node.
    pub const fn next(&self) -> Option<&Node<T>> {
        match self.next {
            Some(next) => Some(next.node()),
            None => None,
        }
    }

    /// Returns true if another node follows this one.
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.has_next())
            .finish()
    }
}
