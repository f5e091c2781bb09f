use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use derive_more::IsVariant;

use super::{Iter, Length, Node, NodeRef, ONE};
#[doc(inline)]
pub use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A list with links in one direction, from the front to the back. Values can only be added at the
/// back, and are visited in the order they were added.
///
/// The list owns its first node and every node owns the node after it. A pointer to the last node
/// is kept alongside, so that adding a value never requires walking the list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ForwardList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_back` | `O(1)` |
/// | `traverse` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct ForwardList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> ForwardList<T> {
    /// Creates a new ForwardList with no elements.
    pub const fn new() -> ForwardList<T> {
        ForwardList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the ForwardList.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the ForwardList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match self.head() {
            Some(node) => Some(node.value()),
            None => None,
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.node().value()),
        }
    }

    /// Returns the first node of the list, which can be used to walk the list manually.
    pub const fn head(&self) -> Option<&Node<T>> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.node()),
        }
    }

    /// Add the provided element to the back of the ForwardList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use raw_collections::collections::linked::ForwardList;
    /// let mut list = ForwardList::new();
    /// list.push_back(5);
    /// list.push_back(10);
    /// assert_eq!(list.front(), Some(&5));
    /// assert_eq!(list.back(), Some(&10));
    /// ```
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Applies `visitor` to every node of the list, in order from front to back. The visitor is
    /// never called for an empty list.
    ///
    /// Each node is visited exactly once and the last node visited is the only one without a
    /// [`next`](Node::next) node.
    ///
    /// # Examples
    /// ```
    /// # use raw_collections::collections::linked::ForwardList;
    /// let list: ForwardList<i32> = [5, 10, 20].into_iter().collect();
    /// let mut total = 0;
    /// list.traverse(|node| total += node.value());
    /// assert_eq!(total, 35);
    /// ```
    pub fn traverse<F: FnMut(&Node<T>)>(&self, mut visitor: F) {
        let mut curr = self.head();
        while let Some(node) = curr {
            visitor(node);
            curr = node.next();
        }
    }

    /// Applies `visitor` to the value of every node, in order from front to back.
    pub fn traverse_values<F: FnMut(&T)>(&self, mut visitor: F) {
        self.traverse(|node| visitor(node.value()));
    }

    /// Returns a borrowed iterator over the values of the ForwardList, from head to tail. Each
    /// call starts again from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> ForwardList<T> {
    /// Returns true if any value in the ForwardList is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T> ListContents<T> {
    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodeRef::from_node(Node {
            value,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        // Walk the list with a loop rather than letting each node drop the next, which would
        // recurse once per node.
        if let Full(ListContents { head, .. }) = self.state {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                // SAFETY: Each node is owned by exactly one link, which is being followed for the
                // last time.
                let node = unsafe { ptr.take_node() };
                curr = node.next;
            }
        }
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

// SAFETY: ForwardList uniquely owns all of its nodes, so it can be sent when T: Send.
unsafe impl<T: Send> Send for ForwardList<T> {}
// SAFETY: Nodes are only mutated through &mut self, so no interior mutability occurs and
// ForwardList<T> can be shared when T: Sync.
unsafe impl<T: Sync> Sync for ForwardList<T> {}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardList")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value:?})")?;
        }
        Ok(())
    }
}
