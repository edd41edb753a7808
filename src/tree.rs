use std::cmp::Ordering;

use tracing::{debug, error};

use crate::{display::TreeDisplay, Error, PreOrderIter, Result, Subtree, TreeNode, Value};

pub mod ops;

/// Binary tree owning every node below `root`.
///
/// Shape is free-form when built with [`TreeBuilder`](crate::TreeBuilder) or
/// [`BinaryTree::from_root`]. [`BinaryTree::insert`] maintains binary search
/// tree order: smaller values to the left, larger to the right, no duplicates.
#[derive(Default)]
pub struct BinaryTree {
    root: Subtree,
}

impl BinaryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_root(root: TreeNode) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    pub fn from_subtree(root: Subtree) -> Self {
        Self { root }
    }

    /// Build a search tree by inserting `values` in order
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value)?;
        }
        Ok(tree)
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn root_mut(&mut self) -> Option<&mut TreeNode> {
        self.root.as_deref_mut()
    }

    /// Detach the root, leaving the tree empty
    pub fn take_root(&mut self) -> Subtree {
        self.root.take()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Release every node
    pub fn clear(&mut self) {
        // TreeNode's drop releases subtrees from an explicit stack
        self.root = None;
    }

    /// Pre-order iterator over the nodes, with their depth and side
    pub fn iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self.root())
    }

    /// Insert `value` at its search tree position
    pub fn insert(&mut self, value: Value) -> Result<()> {
        let mut link = &mut self.root;
        let mut depth = 0;

        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    error!("Attempted to insert duplicate value {}", value);
                    return Err(Error::DuplicateValue(value));
                }
            };
            depth += 1;
        }

        *link = Some(Box::new(TreeNode::new(value)));
        debug!("Inserted {} at depth {}", value, depth);

        Ok(())
    }

    /// Search tree lookup, following one branch per level
    pub fn contains(&self, value: Value) -> bool {
        let mut cur = self.root();
        while let Some(node) = cur {
            cur = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }
}

impl From<TreeNode> for BinaryTree {
    fn from(root: TreeNode) -> Self {
        Self::from_root(root)
    }
}

impl std::fmt::Display for BinaryTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        TreeDisplay::format(self.root(), f)
    }
}

impl std::fmt::Debug for BinaryTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        TreeDisplay::format(self.root(), f)
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::test::sample_bst_full;

    #[traced_test]
    #[test]
    fn insert_keeps_search_order() {
        let tree = BinaryTree::from_values([20, 15, 50, 10, 18, 25, 80]).unwrap();
        assert_eq!(tree, sample_bst_full());
        assert_eq!(tree.len(), 7);

        let mut in_order = Vec::new();
        tree.in_order(|v| in_order.push(v));
        assert_eq!(in_order, vec![10, 15, 18, 20, 25, 50, 80]);
    }

    #[traced_test]
    #[test]
    fn insert_rejects_duplicate() {
        let mut tree = sample_bst_full();
        assert_eq!(tree.insert(18), Err(Error::DuplicateValue(18)));
        assert_eq!(tree.len(), 7);
        assert!(logs_contain("duplicate value 18"));

        assert!(BinaryTree::from_values([3, 1, 3]).is_err());
    }

    #[traced_test]
    #[test]
    fn contains() {
        let tree = sample_bst_full();
        for value in [20, 15, 50, 10, 18, 25, 80] {
            assert!(tree.contains(value));
        }
        assert!(!tree.contains(19));
        assert!(!BinaryTree::new().contains(1));
    }

    #[traced_test]
    #[test]
    fn clear_and_take_root() {
        let mut tree = sample_bst_full();
        let root = tree.take_root();
        assert_eq!(root.as_ref().map(|n| n.value), Some(20));
        assert!(tree.is_empty());

        let mut tree = BinaryTree::from_subtree(root);
        assert_eq!(tree.len(), 7);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }
}
