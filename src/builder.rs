//! Closure builders for laying out a [`BinaryTree`] by hand.
//!
//! [`TreeBuilder::root`] hands a [`NodeBuilder`] to a closure, which adds the
//! left and right children with closures of their own. Closures return
//! `Result<(), E>` for a caller chosen `E`, so errors raised while building
//! propagate out of the builder.

use std::marker::PhantomData;

use tracing::{debug, debug_span, warn};

use crate::{BinaryTree, NodeDepth, Subtree, TreeNode, Value};

/// Adds children to one node during a [`TreeBuilder`] run
pub struct NodeBuilder<'a, E> {
    node: &'a mut TreeNode,
    depth: NodeDepth,
    _phantom: PhantomData<E>,
}

impl<'a, E> NodeBuilder<'a, E> {
    fn new(node: &'a mut TreeNode, depth: NodeDepth) -> Self {
        Self {
            node,
            depth,
            _phantom: PhantomData,
        }
    }

    /// Build the child subtree with `f`, returning it once the closure succeeds
    fn build_child<F>(&self, value: Value, f: F) -> Result<TreeNode, E>
    where
        F: FnOnce(&mut NodeBuilder<'_, E>) -> Result<(), E>,
    {
        let mut child = TreeNode::new(value);
        let mut builder = NodeBuilder::new(&mut child, self.depth + 1);
        f(&mut builder)?;

        debug!("Built {} at depth {}", value, self.depth + 1);
        Ok(child)
    }

    /// Attach a left child holding `value`, with `f` building its subtrees
    pub fn left<F>(&mut self, value: Value, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut NodeBuilder<'_, E>) -> Result<(), E>,
    {
        let child = self.build_child(value, f)?;
        let replaced = self.node.set_left(Some(Box::new(child)));
        self.warn_replaced("left", replaced, value);
        Ok(())
    }

    /// Attach a right child holding `value`, with `f` building its subtrees
    pub fn right<F>(&mut self, value: Value, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut NodeBuilder<'_, E>) -> Result<(), E>,
    {
        let child = self.build_child(value, f)?;
        let replaced = self.node.set_right(Some(Box::new(child)));
        self.warn_replaced("right", replaced, value);
        Ok(())
    }

    fn warn_replaced(&self, side: &str, replaced: Subtree, value: Value) {
        if let Some(old) = replaced {
            warn!(
                "Replaced {} child {} of {} with {}",
                side, old.value, self.node.value, value
            );
        }
    }

    pub fn value(&self) -> Value {
        self.node.value
    }

    pub fn depth(&self) -> NodeDepth {
        self.depth
    }
}

/// Builds a [`BinaryTree`] from nested closures.
///
/// ```
/// use cambium::TreeBuilder;
///
/// let tree = TreeBuilder::<()>::new()
///     .root(2, |two| {
///         two.left(1, |_| Ok(()))?;
///         two.right(3, |_| Ok(()))
///     })
///     .unwrap()
///     .done()
///     .unwrap();
///
/// assert_eq!(tree.len(), 3);
/// ```
#[derive(Debug)]
pub struct TreeBuilder<E> {
    root: Subtree,
    debug_span: tracing::Span,
    _phantom: PhantomData<E>,
}

impl<E> Default for TreeBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TreeBuilder<E> {
    pub fn new() -> Self {
        let debug_span = debug_span!("TreeBuilder");
        debug_span.in_scope(|| debug!("Created new TreeBuilder"));

        Self {
            root: None,
            debug_span,
            _phantom: PhantomData,
        }
    }

    /// Set the root to `value`, with `f` building its subtrees.
    ///
    /// Calling this twice replaces the first root.
    pub fn root<F>(mut self, value: Value, f: F) -> Result<Self, E>
    where
        F: FnOnce(&mut NodeBuilder<'_, E>) -> Result<(), E>,
    {
        self.debug_span.in_scope(|| -> Result<(), E> {
            let mut root = TreeNode::new(value);
            let mut builder = NodeBuilder::new(&mut root, 0);
            f(&mut builder)?;

            if let Some(old) = self.root.replace(Box::new(root)) {
                warn!("Replaced root {} with {}", old.value, value);
            } else {
                debug!("Added root {}", value);
            }
            Ok(())
        })?;

        Ok(self)
    }

    /// Returns the constructed tree, empty if no root was added
    pub fn done(self) -> Result<BinaryTree, E> {
        self.debug_span.in_scope(|| {
            debug!("Finished building tree");
            Ok(BinaryTree::from_subtree(self.root))
        })
    }
}
