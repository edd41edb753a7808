use colored::Colorize;
use tracing::{debug, debug_span};

use crate::{Error, LinkedList, Node as _, Result, Value};

/// LIFO adapter. The top of the stack is the head of the wrapped list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Stack {
    list: LinkedList,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push every value of `list` in traversal order, so its last value ends on top
    pub fn from_list(list: &LinkedList) -> Self {
        let mut stack = Self::new();
        for value in list {
            stack.push(value);
        }
        stack
    }

    pub fn push(&mut self, value: Value) {
        self.list.push_front(value);
    }

    pub fn pop(&mut self) -> Result<Value> {
        self.list.pop_front().ok_or(Error::EmptyStructure)
    }

    pub fn peek(&self) -> Result<Value> {
        self.list
            .head()
            .map(|node| node.value())
            .ok_or(Error::EmptyStructure)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Values from top to bottom
    pub fn values(&self) -> Vec<Value> {
        self.list.values()
    }

    pub fn as_list(&self) -> &LinkedList {
        &self.list
    }

    /// Drop every value matching `predicate`, keeping the survivors in their
    /// top-to-bottom order. Returns the number removed.
    pub fn remove_matching<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(Value) -> bool,
    {
        debug_span!("stack_remove_matching").in_scope(|| {
            let mut kept = Stack::new();
            let mut removed = 0;

            while let Ok(value) = self.pop() {
                if predicate(value) {
                    removed += 1;
                } else {
                    kept.push(value);
                }
            }

            // `kept` holds the survivors upside down, popping restores the order
            while let Ok(value) = kept.pop() {
                self.push(value);
            }

            debug!("{} {} values", "Removed".bright_purple(), removed);
            removed
        })
    }

    pub fn remove_even_values(&mut self) -> usize {
        self.remove_matching(|value| value % 2 == 0)
    }

    /// Check that values taken two at a time from the top form descending
    /// consecutive pairs, the upper value one more than the one below it.
    ///
    /// An empty stack qualifies, a stack with an odd number of values does not.
    /// The stack is restored to its original order before returning.
    pub fn is_pairwise_consecutive(&mut self) -> bool {
        let mut popped = Stack::new();
        let mut consecutive = true;

        while let Ok(top) = self.pop() {
            popped.push(top);
            match self.pop() {
                Ok(next) => {
                    popped.push(next);
                    if next.checked_add(1) != Some(top) {
                        consecutive = false;
                    }
                }
                Err(_) => {
                    debug!("Unpaired value {} at the bottom", top);
                    consecutive = false;
                }
            }
        }

        while let Ok(value) = popped.pop() {
            self.push(value);
        }

        consecutive
    }

    /// Pop until `target` is on top. The target itself stays on the stack.
    ///
    /// Returns `false` if the target never surfaced, in which case the stack
    /// has been emptied.
    pub fn remove_until(&mut self, target: Value) -> bool {
        let mut discarded = 0;
        let found = loop {
            match self.peek() {
                Ok(top) if top == target => break true,
                Ok(_) => {
                    self.list.pop_front();
                    discarded += 1;
                }
                Err(_) => break false,
            }
        };

        debug!(
            "{} {} values, target {} found: {}",
            "Discarded".bright_purple(),
            discarded,
            target,
            found
        );
        found
    }
}
