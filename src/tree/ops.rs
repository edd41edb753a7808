//! Shape and aggregate drills over [`BinaryTree`].
//!
//! None of these rely on search tree order. Queries that recurse use one
//! stack frame per tree level.

use colored::Colorize;
use tracing::{debug, debug_span};

use crate::{BinaryTree, Node as _, TreeNode, Value};

/// True when both trees have the same shape and the same value at every position.
///
/// Two empty trees are identical, an empty and a non-empty tree are not.
pub fn identical(a: Option<&TreeNode>, b: Option<&TreeNode>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.value == b.value
                && identical(a.left(), b.left())
                && identical(a.right(), b.right())
        }
        _ => false,
    }
}

fn height(node: Option<&TreeNode>) -> isize {
    match node {
        None => -1,
        Some(node) => 1 + height(node.left()).max(height(node.right())),
    }
}

fn count_single_child(node: Option<&TreeNode>) -> usize {
    match node {
        None => 0,
        Some(node) => {
            let own = (node.num_children() == 1) as usize;
            own + count_single_child(node.left()) + count_single_child(node.right())
        }
    }
}

fn sum_odd(node: Option<&TreeNode>) -> Value {
    match node {
        None => 0,
        Some(node) => {
            let own = if node.value % 2 != 0 { node.value } else { 0 };
            own + sum_odd(node.left()) + sum_odd(node.right())
        }
    }
}

fn mirror_node(node: &mut TreeNode) {
    if let Some(left) = node.left_mut() {
        mirror_node(left);
    }
    if let Some(right) = node.right_mut() {
        mirror_node(right);
    }
    std::mem::swap(&mut node.left, &mut node.right);
}

/// Post-order walk returning the subtree height, emitting every node whose
/// subtree reaches three levels below it
fn emit_great_grandparents<F>(node: Option<&TreeNode>, emit: &mut F) -> isize
where
    F: FnMut(Value),
{
    let Some(node) = node else {
        return -1;
    };

    let left = emit_great_grandparents(node.left(), emit);
    let right = emit_great_grandparents(node.right(), emit);
    let height = 1 + left.max(right);

    if height >= 3 {
        emit(node.value);
    }

    height
}

impl BinaryTree {
    pub fn is_identical(&self, other: &BinaryTree) -> bool {
        identical(self.root(), other.root())
    }

    /// Edge count of the longest root-to-leaf path. `-1` for an empty tree.
    pub fn max_height(&self) -> isize {
        height(self.root())
    }

    /// Number of nodes with exactly one child
    pub fn count_single_child_nodes(&self) -> usize {
        count_single_child(self.root())
    }

    /// Sum of every odd value in the tree
    pub fn sum_of_odd_values(&self) -> Value {
        sum_odd(self.root())
    }

    /// Swap the left and right subtree of every node
    pub fn mirror(&mut self) {
        debug_span!("mirror").in_scope(|| {
            if let Some(root) = self.root_mut() {
                mirror_node(root);
                debug!("{} tree at {}", "Mirrored".bright_purple(), root.value);
            }
        })
    }

    /// Emit, in pre-order, every value strictly less than `threshold`
    pub fn values_below_threshold<F>(&self, threshold: Value, emit: F)
    where
        F: FnMut(Value),
    {
        self.iter()
            .map(|node| node.value())
            .filter(|value| *value < threshold)
            .for_each(emit);
    }

    /// Smallest value anywhere in the tree. Every node is examined, order is not assumed.
    pub fn minimum_value(&self) -> Option<Value> {
        self.iter().map(|node| node.value()).min()
    }

    /// Emit every node that has a great-grandchild, i.e. a descendant exactly
    /// three links below it. Nodes are emitted in post-order, deepest first.
    ///
    /// Returns the height of the tree, `-1` when empty.
    pub fn nodes_with_great_grandchildren<F>(&self, mut emit: F) -> isize
    where
        F: FnMut(Value),
    {
        emit_great_grandparents(self.root(), &mut emit)
    }
}
