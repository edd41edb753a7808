//! LIFO and FIFO adapters over [`LinkedList`](crate::LinkedList).
//!
//! [`Stack`] pushes and pops at the head. [`Queue`] enqueues at the tail
//! (insertion at index `len`) and dequeues from the head. Neither keeps state
//! beyond the list it wraps.

mod balanced;
mod queue;
mod stack;

pub use balanced::{check_balanced, is_balanced};
pub use queue::Queue;
pub use stack::Stack;
