// SPDX-License-Identifier: FSL-1.1
use crate::{error::Result, list::List};
use log::debug;
use std::fmt;

/// A first-in-first-out queue. Values are enqueued at the tail of a privately
/// owned linked list and dequeued from its head.
pub struct Queue<T> {
    list: List<T>,
}

impl<T> Queue<T> {
    /// create an empty queue
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// create an empty queue with storage reserved for `capacity` values. The
    /// queue still grows past `capacity` when needed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: List::with_capacity(capacity),
        }
    }

    /// add a value to the end of the queue
    pub fn enqueue(&mut self, value: T) {
        self.list.add_last(value);
    }

    /// remove the value from the front of the queue and return it
    pub fn dequeue(&mut self) -> Result<T> {
        self.list.remove_first("dequeue").map_err(|e| {
            debug!("dequeue: {e}");
            e
        })
    }

    /// get a reference to the value at the front of the queue, `None` if the
    /// queue is empty. Unlike [`crate::Stack::peek`] this never fails.
    pub fn peek(&self) -> Option<&T> {
        self.list.first()
    }

    /// return if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// return the number of values in the queue
    pub fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Queue {{ len: {} }}", self.len())
    }
}
