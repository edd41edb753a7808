//! Tree traversals.
//!
//! [`PreOrderIter`] is the borrowing iterator used by display, hashing and the
//! aggregate queries. The free functions visit nodes in the four classic orders
//! using an explicit queue or stack and pass each value to a sink.

use std::{collections::VecDeque, ops::Deref};

use crate::{BinaryTree, NodeDepth, TreeNode, Value};

/// Which link of its parent a node hangs from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Root,
    Left,
    Right,
}

pub struct IterNode<'iter> {
    depth: NodeDepth,
    side: Side,
    node: &'iter TreeNode,
}

impl<'iter> IterNode<'iter> {
    pub fn depth(&self) -> NodeDepth {
        self.depth
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn node(&self) -> &'iter TreeNode {
        self.node
    }
}

impl<'iter> Deref for IterNode<'iter> {
    type Target = TreeNode;

    fn deref(&self) -> &Self::Target {
        self.node
    }
}

/// Depth-first pre-order iterator: node, left subtree, right subtree
pub struct PreOrderIter<'iter> {
    stack: VecDeque<(NodeDepth, Side, &'iter TreeNode)>,
}

impl<'iter> PreOrderIter<'iter> {
    pub fn new(root: Option<&'iter TreeNode>) -> Self {
        Self {
            stack: root.map(|node| (0, Side::Root, node)).into_iter().collect(),
        }
    }
}

impl<'iter> Iterator for PreOrderIter<'iter> {
    type Item = IterNode<'iter>;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, side, node) = self.stack.pop_front()?;

        // Right first so the left child is visited next
        if let Some(right) = node.right() {
            self.stack.push_front((depth + 1, Side::Right, right));
        }
        if let Some(left) = node.left() {
            self.stack.push_front((depth + 1, Side::Left, left));
        }

        Some(IterNode { depth, side, node })
    }
}

impl<'iter> IntoIterator for &'iter BinaryTree {
    type Item = IterNode<'iter>;
    type IntoIter = PreOrderIter<'iter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Breadth-first: every node at depth d before any node at depth d + 1, left to right
pub fn level_order<F>(root: Option<&TreeNode>, mut emit: F)
where
    F: FnMut(Value),
{
    let mut queue: VecDeque<&TreeNode> = root.into_iter().collect();

    while let Some(node) = queue.pop_front() {
        emit(node.value);
        queue.extend(node.left());
        queue.extend(node.right());
    }
}

/// Left subtree, node, right subtree
pub fn in_order_iterative<F>(root: Option<&TreeNode>, mut emit: F)
where
    F: FnMut(Value),
{
    let mut stack = Vec::new();
    let mut cur = root;

    loop {
        while let Some(node) = cur {
            stack.push(node);
            cur = node.left();
        }

        let Some(node) = stack.pop() else {
            break;
        };
        emit(node.value);
        cur = node.right();
    }
}

pub fn pre_order_iterative<F>(root: Option<&TreeNode>, mut emit: F)
where
    F: FnMut(Value),
{
    let mut stack: Vec<&TreeNode> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        emit(node.value);
        stack.extend(node.right());
        stack.extend(node.left());
    }
}

/// Post-order with a single stack. A node is emitted once its right subtree
/// is empty or was the last subtree emitted.
pub fn post_order_iterative_s1<F>(root: Option<&TreeNode>, mut emit: F)
where
    F: FnMut(Value),
{
    let mut stack: Vec<&TreeNode> = Vec::new();
    let mut last: Option<&TreeNode> = None;
    let mut cur = root;

    loop {
        while let Some(node) = cur {
            stack.push(node);
            cur = node.left();
        }

        let Some(&top) = stack.last() else {
            break;
        };

        match top.right() {
            Some(right) if !last.is_some_and(|last| std::ptr::eq(last, right)) => {
                cur = Some(right);
            }
            _ => {
                emit(top.value);
                last = Some(top);
                stack.pop();
            }
        }
    }
}

/// Post-order with two stacks. The first yields node, right, left which the
/// second reverses into left, right, node.
pub fn post_order_iterative_s2<F>(root: Option<&TreeNode>, mut emit: F)
where
    F: FnMut(Value),
{
    let mut pending: Vec<&TreeNode> = root.into_iter().collect();
    let mut output = Vec::new();

    while let Some(node) = pending.pop() {
        output.push(node);
        pending.extend(node.left());
        pending.extend(node.right());
    }

    while let Some(node) = output.pop() {
        emit(node.value);
    }
}

impl BinaryTree {
    pub fn level_order<F: FnMut(Value)>(&self, emit: F) {
        level_order(self.root(), emit)
    }

    pub fn in_order<F: FnMut(Value)>(&self, emit: F) {
        in_order_iterative(self.root(), emit)
    }

    pub fn pre_order<F: FnMut(Value)>(&self, emit: F) {
        pre_order_iterative(self.root(), emit)
    }

    pub fn post_order_s1<F: FnMut(Value)>(&self, emit: F) {
        post_order_iterative_s1(self.root(), emit)
    }

    pub fn post_order_s2<F: FnMut(Value)>(&self, emit: F) {
        post_order_iterative_s2(self.root(), emit)
    }
}
