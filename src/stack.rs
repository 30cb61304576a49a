// SPDX-License-Identifier: FSL-1.1
use crate::{error::Result, list::List, Error};
use log::debug;
use std::fmt;

/// A last-in-first-out stack. Values are pushed onto and popped from the head
/// of a privately owned linked list.
pub struct Stack<T> {
    list: List<T>,
}

impl<T> Stack<T> {
    /// create an empty stack
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// create an empty stack with storage reserved for `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: List::with_capacity(capacity),
        }
    }

    /// push a value onto the top of the stack
    pub fn push(&mut self, value: T) {
        self.list.add_first(value);
    }

    /// remove the top value from the stack and return it
    pub fn pop(&mut self) -> Result<T> {
        self.list.remove_first("pop").map_err(|e| {
            debug!("pop: {e}");
            e
        })
    }

    /// get a reference to the top value on the stack. Fails on an empty stack,
    /// where [`crate::Queue::peek`] returns `None` instead.
    pub fn peek(&self) -> Result<&T> {
        self.list.first().ok_or_else(|| {
            let e = Error::EmptyCollection("peek");
            debug!("peek: {e}");
            e
        })
    }

    /// return if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// return the number of values on the stack
    pub fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Stack {{ len: {} }}", self.len())
    }
}
