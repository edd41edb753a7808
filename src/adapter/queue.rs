use colored::Colorize;
use tracing::{debug, debug_span};

use crate::{Error, LinkedList, Node as _, Result, Stack, Value};

/// FIFO adapter. Traversal order of the wrapped list is dequeue order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Queue {
    list: LinkedList,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue every value of `list` in traversal order
    pub fn from_list(list: &LinkedList) -> Self {
        let mut queue = Self::new();
        for value in list {
            queue.enqueue(value);
        }
        queue
    }

    /// Insert at index `len`, behind every queued value
    pub fn enqueue(&mut self, value: Value) {
        self.list.push_back(value);
    }

    pub fn dequeue(&mut self) -> Result<Value> {
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

    /// Values from front to back
    pub fn values(&self) -> Vec<Value> {
        self.list.values()
    }

    pub fn as_list(&self) -> &LinkedList {
        &self.list
    }

    /// Cycle every value through the queue once, re-enqueuing only those not
    /// matching `predicate`. Returns the number removed.
    pub fn remove_matching<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(Value) -> bool,
    {
        debug_span!("queue_remove_matching").in_scope(|| {
            let mut removed = 0;

            for _ in 0..self.len() {
                let Ok(value) = self.dequeue() else {
                    break;
                };
                if predicate(value) {
                    removed += 1;
                } else {
                    self.enqueue(value);
                }
            }

            debug!("{} {} values", "Removed".bright_purple(), removed);
            removed
        })
    }

    pub fn remove_odd_values(&mut self) -> usize {
        self.remove_matching(|value| value % 2 != 0)
    }

    /// Reverse the queue by draining it through an auxiliary [`Stack`]
    pub fn reverse_with_stack(&mut self) {
        let mut stack = Stack::new();
        while let Ok(value) = self.dequeue() {
            stack.push(value);
        }
        while let Ok(value) = stack.pop() {
            self.enqueue(value);
        }
    }

    /// Reverse the queue without an auxiliary container: take the front value,
    /// reverse the remainder, then enqueue the value behind it.
    ///
    /// Recurses once per queued value.
    pub fn reverse_recursive(&mut self) {
        if let Ok(front) = self.dequeue() {
            self.reverse_recursive();
            self.enqueue(front);
        }
    }
}
