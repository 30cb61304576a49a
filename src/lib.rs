// SPDX-License-Identifier: FSL-1.1
#![warn(missing_docs)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

//! Chainlist: a FIFO queue and a LIFO stack, each over its own singly linked
//! list

/// Errors produced by this library
pub mod error;
pub use error::{Error, Result};

/// Arena backed singly linked list shared by the collections
pub(crate) mod list;

/// First-in-first-out queue
pub mod queue;
pub use queue::Queue;

/// Last-in-first-out stack
pub mod stack;
pub use stack::Stack;

/// ...and in the darkness bind them
pub mod prelude {
    pub use super::*;
}
