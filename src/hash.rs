//! Structural hashing.
//!
//! A [`TreeNode`] hashes its whole subtree: the pre-order value sequence along
//! with which children are present, so equal hashes imply equal shape as well
//! as equal values (up to collisions). [`ListNode`] hashes only its own value.

use std::hash::{Hash, Hasher};

use tracing::debug;
use xxhash_rust::xxh64::Xxh64;

use crate::{BinaryTree, LinkedList, ListNode, Node as _, PreOrderIter, TreeNode};

impl Hash for ListNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Hash for TreeNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for node in PreOrderIter::new(Some(self)) {
            node.value.hash(state);
            node.left.is_some().hash(state);
            node.right.is_some().hash(state);
        }
    }
}

impl Hash for LinkedList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl Hash for BinaryTree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root().hash(state);
    }
}

impl LinkedList {
    /// xxh64 of the list length and values
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh64::new(0);
        self.hash(&mut hasher);
        let hash = hasher.finish();
        debug!("List of {} nodes hash 0x{:X}", self.len(), hash);
        hash
    }
}

impl BinaryTree {
    /// xxh64 of the tree shape and values
    pub fn fingerprint(&self) -> u64 {
        match self.root() {
            Some(root) => {
                let hash = root.xxhash();
                debug!("Tree rooted at {} hash 0x{:X}", root.value, hash);
                hash
            }
            None => {
                let mut hasher = Xxh64::new(0);
                self.hash(&mut hasher);
                hasher.finish()
            }
        }
    }
}
