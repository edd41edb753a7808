//! # Cambium
//!
//! Pointer drills over singly linked lists and binary trees.
//!
//! ## Overview
//!
//! Cambium pairs two owning structures, [`LinkedList`] and [`BinaryTree`], with
//! the classic node-relinking exercises built on them: sorted insertion,
//! interleaved merging, stable partitioning, splitting, in-place reversal,
//! mirroring and the iterative tree traversals. [`Stack`] and [`Queue`] are
//! thin adapters over [`LinkedList`] with their own small set of drills.
//!
//! Every structure exclusively owns its nodes. Algorithms that combine or
//! split structures move nodes between owners, they never copy values into
//! fresh nodes.
//!
//! Recursive algorithms ([`reverse_in_place`], [`BinaryTree::mirror`],
//! [`Queue::reverse_recursive`] and friends) use one stack frame per node or
//! per tree level, so very large inputs can exhaust the thread stack.

mod builder;
mod compare;
mod display;
mod error;
mod hash;
mod iterator;
mod list;
mod tree;

pub mod adapter;
pub mod node;


pub use adapter::{check_balanced, is_balanced, Queue, Stack};
pub use builder::*;
pub use display::TreeDisplay;
pub use error::{Error, Result};
pub use iterator::{
    in_order_iterative, level_order, post_order_iterative_s1, post_order_iterative_s2,
    pre_order_iterative, IterNode, PreOrderIter, Side,
};
pub use list::ops::{move_max_to_front, reverse_in_place};
pub use list::{Iter, LinkedList};
pub use tree::ops::identical;
pub use tree::BinaryTree;

pub use node::{Link, ListNode, Node, Subtree, TreeNode};

/// The value stored in every list and tree node
pub type Value = i64;

/// Depth of a node below the root of its tree
pub type NodeDepth = usize;
