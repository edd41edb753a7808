use std::fmt::Write;

use crate::{LinkedList, Node as _, PreOrderIter, Side, TreeNode};

pub struct TreeDisplay;

impl TreeDisplay {
    /// Draw the tree below `root` one node per line, children indented under
    /// their parent and tagged with the side they hang from
    pub fn format(root: Option<&TreeNode>, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if root.is_none() {
            return f.write_str("Empty");
        }

        f.write_str("\n")?;

        let mut iter = PreOrderIter::new(root).peekable();

        let mut root_children = false;

        let column_width = 2;

        while let Some(node) = iter.next() {
            // A following node at the same depth is this node's sibling
            let has_siblings = iter
                .peek()
                .is_some_and(|next_node| node.depth() == next_node.depth());

            let has_children = !node.is_leaf();

            if node.depth() == 0 {
                root_children = has_children
            }

            // The position of the first character of the payload from the previous row
            let pos = node.depth() * column_width;

            if node.depth() == 0 {
                if has_children {
                    f.write_char('┏')?;
                } else {
                    f.write_char('━')?;
                }
            } else {
                for i in 0..pos {
                    if i % column_width == 0 {
                        f.write_char('┃')?;
                    } else {
                        f.write_char(' ')?;
                    }
                }

                if has_children || has_siblings {
                    f.write_char('┣')?;
                } else {
                    f.write_char('┗')?;
                }
            }

            match node.side() {
                Side::Root => write!(f, "{}", node.value)?,
                Side::Left => write!(f, "L:{}", node.value)?,
                Side::Right => write!(f, "R:{}", node.value)?,
            }

            f.write_char('\n')?;
        }

        if root_children {
            f.write_str("┗")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for LinkedList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('[')?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_char(']')
    }
}
