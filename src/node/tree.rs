use crate::Value;

use super::Node;

/// Owning child link of a binary tree
pub type Subtree = Option<Box<TreeNode>>;

/// Binary tree cell owning up to two children
pub struct TreeNode {
    pub(crate) value: Value,
    pub(crate) left: Subtree,
    pub(crate) right: Subtree,
}

impl TreeNode {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, left: TreeNode) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn with_right(mut self, right: TreeNode) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut TreeNode> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut TreeNode> {
        self.right.as_deref_mut()
    }

    /// Replace the left subtree, returning the previous one
    pub fn set_left(&mut self, left: Subtree) -> Subtree {
        std::mem::replace(&mut self.left, left)
    }

    /// Replace the right subtree, returning the previous one
    pub fn set_right(&mut self, right: Subtree) -> Subtree {
        std::mem::replace(&mut self.right, right)
    }

    /// Both children, left first
    pub fn children(&self) -> [Option<&TreeNode>; 2] {
        [self.left(), self.right()]
    }
}

impl Node for TreeNode {
    fn value(&self) -> Value {
        self.value
    }

    fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    fn num_children(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }
}

impl std::fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeNode")
            .field("value", &self.value)
            .field("hash", &format_args!("0x{:X}", self.xxhash()))
            .field("left", &format_args!("{:?}", self.left().map(|n| n.value)))
            .field("right", &format_args!("{:?}", self.right().map(|n| n.value)))
            .finish()
    }
}

// Detach subtrees onto an explicit stack so drop depth doesn't follow tree height
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[traced_test]
    #[test]
    fn set_children() {
        let mut node = TreeNode::new(10);
        assert!(node.set_left(Some(Box::new(TreeNode::new(5)))).is_none());

        let old = node.set_left(Some(Box::new(TreeNode::new(4))));
        assert_eq!(old.map(|n| n.value), Some(5));

        node.set_right(Some(Box::new(TreeNode::new(20))));
        let values: Vec<Option<Value>> = node
            .children()
            .iter()
            .map(|c| c.map(|n| n.value))
            .collect();
        assert_eq!(values, vec![Some(4), Some(20)]);
    }

    #[traced_test]
    #[test]
    fn deep_tree_drops_without_recursion() {
        let mut root = TreeNode::new(0);
        let mut cursor = &mut root;
        for value in 1..100_000 {
            let next: &mut TreeNode = cursor.left.insert(Box::new(TreeNode::new(value)));
            cursor = next;
        }
        drop(root);
    }

    #[traced_test]
    #[test]
    fn debug_lists_child_values() {
        let node = TreeNode::new(2).with_right(TreeNode::new(3));
        let debug = format!("{:?}", node);
        assert!(debug.contains("left: None"));
        assert!(debug.contains("right: Some(3)"));
    }
}
