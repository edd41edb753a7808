use crate::Value;

use super::Node;

/// Owning forward link of a singly linked list
pub type Link = Option<Box<ListNode>>;

/// Singly linked list cell. Owns the rest of the chain through `next`.
pub struct ListNode {
    pub(crate) value: Value,
    pub(crate) next: Link,
}

impl ListNode {
    pub fn new(value: Value) -> Self {
        Self { value, next: None }
    }

    /// Attach `next` as the successor of this node, dropping any previous successor
    pub fn with_next(mut self, next: Link) -> Self {
        self.next = next;
        self
    }

    pub fn next(&self) -> Option<&ListNode> {
        self.next.as_deref()
    }

    /// Detach and return the rest of the chain
    pub(crate) fn take_next(&mut self) -> Link {
        self.next.take()
    }

    /// Replace the successor, returning the previous one
    pub(crate) fn set_next(&mut self, next: Link) -> Link {
        std::mem::replace(&mut self.next, next)
    }
}

impl Node for ListNode {
    fn value(&self) -> Value {
        self.value
    }

    fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    fn num_children(&self) -> usize {
        self.next.is_some() as usize
    }
}

impl std::fmt::Debug for ListNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListNode")
            .field("value", &self.value)
            .field("next", &format_args!("{:?}", self.next().map(|n| n.value)))
            .finish()
    }
}

// Release the chain one node at a time so long lists don't recurse in drop glue
impl Drop for ListNode {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Walk `index` links forward from `link`, returning the link slot at that position.
///
/// Position `n` of a chain of length `n` is the empty link terminating it.
pub(crate) fn link_at(mut link: &mut Link, index: usize) -> Option<&mut Link> {
    for _ in 0..index {
        link = &mut link.as_mut()?.next;
    }
    Some(link)
}

/// Walk forward to the empty link terminating the chain
pub(crate) fn tail_link(mut link: &mut Link) -> &mut Link {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

/// Store `node` in the empty slot `tail` and return the node's own `next` slot
pub(crate) fn append(tail: &mut Link, node: Box<ListNode>) -> &mut Link {
    &mut tail.insert(node).next
}
