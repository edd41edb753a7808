use tracing::{debug, error};

use crate::{
    node::list::{append, link_at, tail_link},
    Error, Link, ListNode, Result, Value,
};

pub mod ops;

/// Singly linked list owning every node reachable from `head`.
///
/// `len` always equals the number of nodes in the chain, so `head` is `None`
/// exactly when `len` is zero.
#[derive(Default)]
pub struct LinkedList {
    len: usize,
    head: Link,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a detached chain, counting its nodes
    pub fn from_link(head: Link) -> Self {
        let mut len = 0;
        let mut cur = head.as_deref();
        while let Some(node) = cur {
            len += 1;
            cur = node.next();
        }
        Self { len, head }
    }

    /// Detach the whole chain, leaving the list empty
    pub fn into_link(mut self) -> Link {
        self.len = 0;
        self.head.take()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head(&self) -> Option<&ListNode> {
        self.head.as_deref()
    }

    /// Mutable access to the head link. Callers must not change the node count.
    pub(crate) fn head_mut(&mut self) -> &mut Link {
        &mut self.head
    }

    /// Insert `value` so that it becomes the element at `index` (0 ≤ index ≤ len)
    pub fn insert_at(&mut self, index: usize, value: Value) -> Result<()> {
        if index > self.len {
            error!(
                "Attempted to insert at index {} into list with length {}",
                index, self.len
            );
            return Err(Error::InvalidIndex {
                index,
                len: self.len,
            });
        }

        let len = self.len;
        let link = link_at(&mut self.head, index).ok_or(Error::InvalidIndex { index, len })?;
        let next = link.take();
        *link = Some(Box::new(ListNode::new(value).with_next(next)));
        self.len += 1;

        Ok(())
    }

    /// Return the node at `index`, or `None` outside `[0, len)`
    pub fn find_node(&self, index: usize) -> Option<&ListNode> {
        if index >= self.len {
            return None;
        }

        let mut cur = self.head.as_deref();
        for _ in 0..index {
            cur = cur?.next();
        }
        cur
    }

    /// Mutable access to the value at `index`. Links stay owned by the list so
    /// `len` keeps matching the chain.
    pub fn find_value_mut(&mut self, index: usize) -> Option<&mut Value> {
        if index >= self.len {
            return None;
        }

        link_at(&mut self.head, index)?
            .as_deref_mut()
            .map(|node| &mut node.value)
    }

    /// Unlink and release the node at `index`, returning its value
    pub fn remove_at(&mut self, index: usize) -> Result<Value> {
        if index >= self.len {
            error!(
                "Attempted to remove index {} from list with length {}",
                index, self.len
            );
            return Err(Error::InvalidIndex {
                index,
                len: self.len,
            });
        }

        let len = self.len;
        let link = link_at(&mut self.head, index).ok_or(Error::InvalidIndex { index, len })?;
        let mut node = link.take().ok_or(Error::InvalidIndex { index, len })?;
        *link = node.take_next();
        self.len -= 1;

        Ok(node.value)
    }

    pub fn push_front(&mut self, value: Value) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode::new(value).with_next(next)));
        self.len += 1;
    }

    pub fn push_back(&mut self, value: Value) {
        *tail_link(&mut self.head) = Some(Box::new(ListNode::new(value)));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<Value> {
        self.head.take().map(|mut node| {
            self.head = node.take_next();
            self.len -= 1;
            node.value
        })
    }

    /// Release every node
    pub fn clear(&mut self) {
        debug!("Clearing {} nodes", self.len);
        // ListNode's drop walks the chain iteratively
        self.head = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Values in traversal order
    pub fn values(&self) -> Vec<Value> {
        self.iter().collect()
    }
}

impl FromIterator<Value> for LinkedList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl Extend<Value> for LinkedList {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        let mut tail = tail_link(&mut self.head);
        let mut added = 0;
        for value in iter {
            tail = append(tail, Box::new(ListNode::new(value)));
            added += 1;
        }
        self.len += added;
    }
}

impl From<&[Value]> for LinkedList {
    fn from(values: &[Value]) -> Self {
        values.iter().copied().collect()
    }
}

impl<const N: usize> From<[Value; N]> for LinkedList {
    fn from(values: [Value; N]) -> Self {
        values.into_iter().collect()
    }
}

impl std::fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedList")
            .field("len", &self.len)
            .field("values", &format_args!("{:?}", self.values()))
            .finish()
    }
}

/// Borrowing iterator over list values, head first
pub struct Iter<'a> {
    next: Option<&'a ListNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next();
            node.value
        })
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::Node as _;

    #[traced_test]
    #[test]
    fn insert_at_positions() {
        let mut list = LinkedList::new();
        list.insert_at(0, 2).unwrap();
        list.insert_at(1, 4).unwrap();
        list.insert_at(1, 3).unwrap();
        list.insert_at(0, 1).unwrap();

        assert_eq!(list.values(), vec![1, 2, 3, 4]);
        assert_eq!(list.len(), 4);
    }

    #[traced_test]
    #[test]
    fn insert_at_out_of_range() {
        let mut list = LinkedList::from([1, 2]);
        assert_eq!(
            list.insert_at(3, 9),
            Err(Error::InvalidIndex { index: 3, len: 2 })
        );
        assert_eq!(list.values(), vec![1, 2]);
        assert!(logs_contain("Attempted to insert at index 3"));

        // Appending at index == len is allowed
        list.insert_at(2, 3).unwrap();
        assert_eq!(list.values(), vec![1, 2, 3]);
    }

    #[traced_test]
    #[test]
    fn find_node() {
        let list = LinkedList::from([10, 20, 30]);
        assert_eq!(list.find_node(0).map(|n| n.value()), Some(10));
        assert_eq!(list.find_node(2).map(|n| n.value()), Some(30));
        assert!(list.find_node(3).is_none());
        assert!(LinkedList::new().find_node(0).is_none());
    }

    #[traced_test]
    #[test]
    fn find_value_mut() {
        let mut list = LinkedList::from([10, 20, 30]);
        if let Some(value) = list.find_value_mut(1) {
            *value = 25;
        }
        assert_eq!(list.values(), vec![10, 25, 30]);
        assert!(list.find_value_mut(3).is_none());
    }

    #[traced_test]
    #[test]
    fn len_tracks_chain_through_mutation() {
        let mut list = LinkedList::from([1, 2]);
        if let Some(value) = list.find_value_mut(1) {
            *value += 1;
        }
        assert_eq!(list.values(), vec![1, 3]);
        assert_eq!(list.len(), 2);

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);
    }

    #[traced_test]
    #[test]
    fn remove_at() {
        let mut list = LinkedList::from([1, 2, 3, 4]);
        assert_eq!(list.remove_at(0), Ok(1));
        assert_eq!(list.remove_at(2), Ok(4));
        assert_eq!(list.remove_at(2), Err(Error::InvalidIndex { index: 2, len: 2 }));
        assert_eq!(list.values(), vec![2, 3]);
        assert_eq!(list.len(), 2);
    }

    #[traced_test]
    #[test]
    fn push_and_pop() {
        let mut list = LinkedList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.values(), vec![1, 2, 3]);

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
        assert!(list.head().is_none());
    }

    #[traced_test]
    #[test]
    fn extend_appends() {
        let mut list = LinkedList::from([1]);
        list.extend([2, 3]);
        assert_eq!(list.values(), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[traced_test]
    #[test]
    fn link_round_trip_counts_nodes() {
        let list = LinkedList::from([5, 6, 7]);
        let link = list.into_link();
        let list = LinkedList::from_link(link);
        assert_eq!(list.len(), 3);
        assert_eq!(list.values(), vec![5, 6, 7]);
    }

    #[traced_test]
    #[test]
    fn clear_releases_everything() {
        let mut list: LinkedList = (0..1000).collect();
        list.clear();
        assert!(list.is_empty());
        assert!(list.head().is_none());
        assert!(logs_contain("Clearing 1000 nodes"));
    }
}
