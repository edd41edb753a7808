//! Node-relinking drills over [`LinkedList`] and bare [`Link`] chains.
//!
//! All of these move existing nodes between positions or owners. No value is
//! ever copied into a freshly allocated node.

use colored::Colorize;
use tracing::{debug, debug_span};

use crate::{
    node::list::{append, link_at},
    Error, Link, LinkedList, ListNode, Result, Value,
};

fn is_odd(value: Value) -> bool {
    value % 2 != 0
}

impl LinkedList {
    /// Insert `value` in ascending position, returning the index it landed at.
    ///
    /// The value goes before the first element that is not less than it.
    /// Returns [`Error::DuplicateValue`] and leaves the list unchanged if the
    /// value is already present.
    pub fn insert_sorted(&mut self, value: Value) -> Result<usize> {
        let mut index = 0;
        for existing in self.iter() {
            if existing == value {
                debug!("{} {} already present", "insert_sorted".bright_purple(), value);
                return Err(Error::DuplicateValue(value));
            }
            if existing > value {
                break;
            }
            index += 1;
        }

        self.insert_at(index, value)?;
        Ok(index)
    }

    /// Splice one node of `other` after each node of `self`, while both have nodes.
    ///
    /// Nodes left over in `self` stay at its tail. Nodes left over in `other`
    /// remain in `other`, so `other` is empty whenever it was no longer than
    /// `self`.
    pub fn alternate_merge(&mut self, other: &mut LinkedList) {
        debug_span!("alternate_merge").in_scope(|| {
            let mut moved = 0;
            let mut cursor = self.head.as_deref_mut();

            while let Some(node) = cursor {
                let Some(mut incoming) = other.head.take() else {
                    break;
                };
                other.head = incoming.take_next();

                incoming.next = node.next.take();
                let incoming = node.next.insert(incoming);
                moved += 1;

                cursor = incoming.next.as_deref_mut();
            }

            self.len += moved;
            other.len -= moved;

            debug!(
                "{} {} nodes, {} left behind",
                "Merged".bright_purple(),
                moved,
                other.len
            );
        })
    }

    /// Stable partition: nodes matching `predicate` move behind the others.
    ///
    /// Relative order inside each group is preserved.
    pub fn move_partition_to_back<F>(&mut self, predicate: F)
    where
        F: Fn(Value) -> bool,
    {
        debug_span!("move_partition_to_back").in_scope(|| {
            let mut rest = self.head.take();

            let mut kept: Link = None;
            let mut kept_tail = &mut kept;
            let mut moved: Link = None;
            let mut moved_tail = &mut moved;
            let mut moved_count = 0;

            while let Some(mut node) = rest {
                rest = node.take_next();
                if predicate(node.value) {
                    moved_tail = append(moved_tail, node);
                    moved_count += 1;
                } else {
                    kept_tail = append(kept_tail, node);
                }
            }

            *kept_tail = moved;
            self.head = kept;

            debug!("{} {} nodes to the back", "Moved".bright_purple(), moved_count);
        })
    }

    /// Move odd values behind the even ones, keeping each group's order
    pub fn move_odd_items_to_back(&mut self) {
        self.move_partition_to_back(is_odd)
    }

    /// Move even values behind the odd ones, keeping each group's order
    pub fn move_even_items_to_back(&mut self) {
        self.move_partition_to_back(|value| !is_odd(value))
    }

    /// Split the list into `(front, back)`, leaving `self` empty.
    ///
    /// With an odd count the extra node goes to the front, so
    /// `front.len() == (n + 1) / 2`.
    pub fn front_back_split(&mut self) -> (LinkedList, LinkedList) {
        let total = self.len;
        let front_len = (total + 1) / 2;

        let mut front = self.head.take();
        let back: Link = link_at(&mut front, front_len).and_then(|link| link.take());
        self.len = 0;

        debug!(
            "{} {} nodes into {} + {}",
            "Split".bright_purple(),
            total,
            front_len,
            total - front_len
        );

        (
            LinkedList {
                len: front_len,
                head: front,
            },
            LinkedList {
                len: total - front_len,
                head: back,
            },
        )
    }

    /// Relink the largest node as the head. See [`move_max_to_front`].
    pub fn move_max_to_front(&mut self) -> Option<usize> {
        move_max_to_front(self.head_mut())
    }

    /// Reverse the list in place. See [`reverse_in_place`].
    pub fn reverse(&mut self) {
        reverse_in_place(self.head_mut())
    }
}

/// Unlink the node holding the largest value and relink it as the new head.
///
/// The remaining nodes keep their relative order, and the first maximum wins
/// ties. Returns the index the maximum was found at, or `None` for an empty
/// chain.
pub fn move_max_to_front(head: &mut Link) -> Option<usize> {
    let mut max_index = 0;
    let mut max_value = head.as_ref()?.value;

    let mut cur = head.as_deref().and_then(|node| node.next());
    let mut index = 1;
    while let Some(node) = cur {
        if node.value > max_value {
            max_value = node.value;
            max_index = index;
        }
        index += 1;
        cur = node.next();
    }

    if max_index > 0 {
        let link = link_at(head, max_index)?;
        let mut max_node = link.take()?;
        *link = max_node.take_next();

        max_node.set_next(head.take());
        *head = Some(max_node);

        debug!(
            "{} {} from index {}",
            "Moved max".bright_purple(),
            max_value,
            max_index
        );
    }

    Some(max_index)
}

/// Reverse the direction of every link, making the former tail the new head.
///
/// Descends to the tail, which becomes the new head, then re-points each
/// node's successor back at it while unwinding. Recurses once per node.
pub fn reverse_in_place(head: &mut Link) {
    if let Some(first) = head.take() {
        relink_reversed(head, first);
    }
}

/// Reverse the chain starting at `node` into the empty `head` slot, returning
/// the empty link terminating the reversed chain
fn relink_reversed(head: &mut Link, mut node: Box<ListNode>) -> &mut Link {
    match node.take_next() {
        None => append(head, node),
        Some(successor) => {
            let tail = relink_reversed(head, successor);
            append(tail, node)
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::test::list_of;

    #[traced_test]
    #[test]
    fn insert_sorted_builds_ascending() {
        let mut list = LinkedList::new();
        assert_eq!(list.insert_sorted(5), Ok(0));
        assert_eq!(list.len(), 1);

        let mut list = LinkedList::new();
        assert_eq!(list.insert_sorted(2), Ok(0));
        assert_eq!(list.insert_sorted(3), Ok(1));
        assert_eq!(list.insert_sorted(5), Ok(2));
        assert_eq!(list.insert_sorted(7), Ok(3));
        assert_eq!(list.insert_sorted(9), Ok(4));
        assert_eq!(list, [2, 3, 5, 7, 9]);

        assert_eq!(list.insert_sorted(8), Ok(4));
        assert_eq!(list, [2, 3, 5, 7, 8, 9]);
    }

    #[traced_test]
    #[test]
    fn insert_sorted_rejects_duplicate() {
        let mut list = list_of(&[2, 3, 5, 7, 8, 9]);
        assert_eq!(list.insert_sorted(5), Err(Error::DuplicateValue(5)));
        assert_eq!(list.len(), 6);
        assert!(logs_contain("already present"));
    }

    #[traced_test]
    #[test]
    fn insert_sorted_at_front() {
        let mut list = LinkedList::new();
        list.insert_sorted(10).unwrap();
        list.insert_sorted(20).unwrap();
        assert_eq!(list.insert_sorted(5), Ok(0));
        assert_eq!(list, [5, 10, 20]);
    }

    #[traced_test]
    #[test]
    fn alternate_merge_longer_other() {
        let mut a = list_of(&[1, 2, 3]);
        let mut b = list_of(&[4, 5, 6, 7]);
        a.alternate_merge(&mut b);

        assert_eq!(a, [1, 4, 2, 5, 3, 6]);
        assert_eq!(b, [7]);
        assert_eq!(a.len() + b.len(), 7);
    }

    #[traced_test]
    #[test]
    fn alternate_merge_longer_self() {
        let mut a = list_of(&[1, 2, 3, 4, 5, 6]);
        let mut b = list_of(&[10, 11, 12]);
        a.alternate_merge(&mut b);

        assert_eq!(a.len(), 9);
        assert_eq!(a, [1, 10, 2, 11, 3, 12, 4, 5, 6]);
        assert!(b.is_empty());
        assert!(b.head().is_none());
    }

    #[traced_test]
    #[test]
    fn alternate_merge_empty_sides() {
        let mut a = list_of(&[1, 2]);
        let mut b = LinkedList::new();
        a.alternate_merge(&mut b);
        assert_eq!(a, [1, 2]);

        let mut a = LinkedList::new();
        let mut b = list_of(&[1, 2]);
        a.alternate_merge(&mut b);
        assert!(a.is_empty());
        assert_eq!(b, [1, 2]);
    }

    #[traced_test]
    #[test]
    fn move_odd_items_to_back() {
        let mut list = list_of(&[2, 3, 4, 7, 15, 18]);
        list.move_odd_items_to_back();
        assert_eq!(list, [2, 4, 18, 3, 7, 15]);

        let mut list = list_of(&[2, 7, 18, 3, 4, 15]);
        list.move_odd_items_to_back();
        assert_eq!(list, [2, 18, 4, 7, 3, 15]);
    }

    #[traced_test]
    #[test]
    fn move_even_items_to_back() {
        let mut list = list_of(&[2, 3, 4, 7, 15, 18]);
        list.move_even_items_to_back();
        assert_eq!(list, [3, 7, 15, 2, 4, 18]);

        let mut list = list_of(&[2, 7, 18, 3, 4, 15]);
        list.move_even_items_to_back();
        assert_eq!(list, [7, 3, 15, 2, 18, 4]);
    }

    #[traced_test]
    #[test]
    fn partition_uniform_lists_unchanged() {
        for values in [[1, 3, 5], [2, 4, 6]] {
            let mut odd_back = list_of(&values);
            odd_back.move_odd_items_to_back();
            assert_eq!(odd_back, values);

            let mut even_back = list_of(&values);
            even_back.move_even_items_to_back();
            assert_eq!(even_back, values);
        }

        let mut empty = LinkedList::new();
        empty.move_odd_items_to_back();
        assert!(empty.is_empty());
    }

    #[traced_test]
    #[test]
    fn partition_negative_values() {
        let mut list = list_of(&[-3, -2, 0, 5]);
        list.move_odd_items_to_back();
        assert_eq!(list, [-2, 0, -3, 5]);
        assert_eq!(list.len(), 4);
    }

    #[traced_test]
    #[test]
    fn partition_custom_predicate() {
        let mut list = list_of(&[5, 1, 8, 2, 9]);
        list.move_partition_to_back(|v| v > 4);
        assert_eq!(list, [1, 2, 5, 8, 9]);
    }

    #[traced_test]
    #[test]
    fn front_back_split() {
        let mut list = list_of(&[2, 3, 5, 6, 7]);
        let (front, back) = list.front_back_split();
        assert_eq!(front, [2, 3, 5]);
        assert_eq!(back, [6, 7]);
        assert!(list.is_empty());
        assert!(list.head().is_none());

        let mut list = list_of(&[1, 2, 3, 4]);
        let (front, back) = list.front_back_split();
        assert_eq!(front, [1, 2]);
        assert_eq!(back, [3, 4]);
    }

    #[traced_test]
    #[test]
    fn front_back_split_small() {
        let mut list = list_of(&[42]);
        let (front, back) = list.front_back_split();
        assert_eq!(front, [42]);
        assert!(back.is_empty());

        let mut list = LinkedList::new();
        let (front, back) = list.front_back_split();
        assert!(front.is_empty());
        assert!(back.is_empty());
    }

    #[traced_test]
    #[test]
    fn move_max_to_front() {
        let mut list = list_of(&[30, 20, 40, 70, 50]);
        assert_eq!(list.move_max_to_front(), Some(3));
        assert_eq!(list, [70, 30, 20, 40, 50]);

        let mut list = list_of(&[10, 20, 30, 40, 50]);
        list.move_max_to_front();
        assert_eq!(list, [50, 10, 20, 30, 40]);

        let mut list = list_of(&[100, 20, 30]);
        assert_eq!(list.move_max_to_front(), Some(0));
        assert_eq!(list, [100, 20, 30]);
    }

    #[traced_test]
    #[test]
    fn move_max_to_front_small() {
        let mut list = list_of(&[42]);
        list.move_max_to_front();
        assert_eq!(list, [42]);

        let mut list = LinkedList::new();
        assert_eq!(list.move_max_to_front(), None);
        assert!(list.is_empty());
    }

    #[traced_test]
    #[test]
    fn move_max_to_front_first_tie_wins() {
        let mut list = list_of(&[1, 9, 2, 9]);
        assert_eq!(list.move_max_to_front(), Some(1));
        assert_eq!(list, [9, 1, 2, 9]);
    }

    #[traced_test]
    #[test]
    fn move_max_on_bare_chain() {
        let mut head = list_of(&[3, 8, 1]).into_link();
        assert_eq!(super::move_max_to_front(&mut head), Some(1));
        assert_eq!(LinkedList::from_link(head), [8, 3, 1]);
    }

    #[traced_test]
    #[test]
    fn reverse() {
        for (input, expected) in [
            (vec![1, 2, 3, 4, 5], vec![5, 4, 3, 2, 1]),
            (vec![10, 20], vec![20, 10]),
            (vec![42], vec![42]),
            (vec![1, 2, 3], vec![3, 2, 1]),
            (vec![], vec![]),
        ] {
            let mut list = list_of(&input);
            list.reverse();
            assert_eq!(list.values(), expected);
            assert_eq!(list.len(), input.len());
        }
    }

    #[traced_test]
    #[test]
    fn reverse_twice_restores() {
        let mut head = list_of(&[4, 8, 15, 16, 23, 42]).into_link();
        reverse_in_place(&mut head);
        reverse_in_place(&mut head);
        assert_eq!(LinkedList::from_link(head), [4, 8, 15, 16, 23, 42]);
    }

    #[traced_test]
    #[test]
    fn reverse_bare_chain_terminates() {
        let mut head = list_of(&[1, 2, 3]).into_link();
        reverse_in_place(&mut head);

        // The former head is the new tail and ends the chain
        let list = LinkedList::from_link(head);
        assert_eq!(list.len(), 3);
        assert_eq!(list.find_node(2).map(|n| n.next().is_none()), Some(true));
        assert_eq!(list, [3, 2, 1]);

        let mut empty: Link = None;
        reverse_in_place(&mut empty);
        assert!(empty.is_none());
    }
}
