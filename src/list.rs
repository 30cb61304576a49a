// SPDX-License-Identifier: FSL-1.1
use crate::{error::Result, Error};
use tracing::trace;

/// Index of a node slot in the arena
type Link = Option<usize>;

struct Node<T> {
    value: T,
    next: Link,
}

/// A singly linked list whose nodes live in an arena and link to each other by
/// slot index. Each node is owned by exactly one slot; removed slots are
/// recycled by later insertions.
pub(crate) struct List<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Link,
    tail: Link,
    size: usize,
}

impl<T> List<T> {
    /// create an empty list
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::default(),
            free: Vec::default(),
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// create an empty list with room for `capacity` nodes before reallocating
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// the number of nodes in the list
    pub(crate) fn len(&self) -> usize {
        self.size
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// add a new value to the start of the list
    pub(crate) fn add_first(&mut self, value: T) {
        let idx = self.alloc(Node {
            value,
            next: self.head,
        });
        if self.head.is_none() {
            self.tail = Some(idx);
        }
        self.head = Some(idx);
        self.size += 1;
        trace!(size = self.size, head = ?self.head, tail = ?self.tail, "add_first");
    }

    /// add a new value to the end of the list
    pub(crate) fn add_last(&mut self, value: T) {
        let idx = self.alloc(Node { value, next: None });
        match self.tail {
            Some(tail) => {
                if let Some(Some(node)) = self.nodes.get_mut(tail) {
                    node.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.size += 1;
        trace!(size = self.size, head = ?self.head, tail = ?self.tail, "add_last");
    }

    /// remove the node at the start of the list and return its value, `op`
    /// names the caller's operation in the error
    pub(crate) fn remove_first(&mut self, op: &'static str) -> Result<T> {
        let node = self
            .head
            .and_then(|idx| self.nodes.get_mut(idx))
            .and_then(Option::take)
            .ok_or(Error::EmptyCollection(op))?;

        if let Some(idx) = self.head {
            self.free.push(idx);
        }
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.size -= 1;

        // every slot is vacant again so drop the arena back to zero length
        if self.size == 0 {
            self.nodes.clear();
            self.free.clear();
        }

        trace!(size = self.size, head = ?self.head, tail = ?self.tail, "remove_first");
        Ok(node.value)
    }

    /// get a reference to the value at the start of the list
    pub(crate) fn first(&self) -> Option<&T> {
        self.head
            .and_then(|idx| self.nodes.get(idx))
            .and_then(Option::as_ref)
            .map(|node| &node.value)
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                trace!(slot = idx, "reusing vacant slot");
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}
