use std::hash::Hasher as _;

use xxhash_rust::xxh64::Xxh64;

use crate::Value;

pub mod list;
pub mod tree;

pub use list::{Link, ListNode};
pub use tree::{Subtree, TreeNode};

/// Behaviour shared by list and tree link cells
pub trait Node: std::hash::Hash {
    fn value(&self) -> Value;

    fn value_mut(&mut self) -> &mut Value;

    /// Return the number of nodes this node links to directly
    fn num_children(&self) -> usize;

    fn is_leaf(&self) -> bool {
        self.num_children() == 0
    }

    /// xxh64 of the node's `Hash` implementation
    fn xxhash(&self) -> u64 {
        let mut hasher = Xxh64::new(0);
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Compute the node hash with additional context
    fn xxhash_with(&self, with: &[&impl std::hash::Hash]) -> u64 {
        let mut hasher = Xxh64::new(0);
        for h in with {
            h.hash(&mut hasher);
        }
        self.hash(&mut hasher);
        hasher.finish()
    }
}
