use crate::{identical, BinaryTree, LinkedList, TreeNode, Value};

// Lists compare by length and values in traversal order

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

impl PartialEq<[Value]> for LinkedList {
    fn eq(&self, other: &[Value]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter().copied())
    }
}

impl<const N: usize> PartialEq<[Value; N]> for LinkedList {
    fn eq(&self, other: &[Value; N]) -> bool {
        *self == other[..]
    }
}

impl PartialEq<Vec<Value>> for LinkedList {
    fn eq(&self, other: &Vec<Value>) -> bool {
        *self == other[..]
    }
}

// Trees compare structurally: same shape and the same value at every position

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        identical(Some(self), Some(other))
    }
}

impl Eq for TreeNode {}

impl PartialEq for BinaryTree {
    fn eq(&self, other: &Self) -> bool {
        self.is_identical(other)
    }
}

impl Eq for BinaryTree {}
