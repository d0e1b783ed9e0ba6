//! Fork-join helpers for read-only tree traversals.
//!
//! Traversals fan out onto rayon's pool (one task per child of every
//! internal node) and join before returning. Results are gathered in a
//! [`LeafSink`], whose lock is held only for the append.
//!
//! # Usage
//!
//! ```ignore
//! let sink = LeafSink::new();
//! rayon::scope(|scope| {
//!   scope.spawn(|_| sink.push(1));
//!   scope.spawn(|_| sink.push(2));
//! });
//! let mut items = sink.into_inner();
//! items.sort();
//! assert_eq!(items, vec![1, 2]);
//! ```

use std::sync::{Mutex, PoisonError};

/// How leaf enumeration walks the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraversalMode {
  /// One rayon task per child, joined at the top-level call.
  #[default]
  Parallel,
  /// Plain depth-first walk on the calling thread.
  Sequential,
}

/// Mutex-guarded accumulator shared by the tasks of one traversal.
#[derive(Debug)]
pub struct LeafSink<T> {
  items: Mutex<Vec<T>>,
}

impl<T> LeafSink<T> {
  /// Create an empty sink.
  pub fn new() -> Self {
    Self {
      items: Mutex::new(Vec::new()),
    }
  }

  /// Append one item.
  pub fn push(&self, item: T) {
    // Poisoning cannot leave the Vec half-written.
    self
      .items
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .push(item);
  }

  /// Consume the sink, returning items in append order.
  pub fn into_inner(self) -> Vec<T> {
    self.items.into_inner().unwrap_or_else(PoisonError::into_inner)
  }
}

impl<T> Default for LeafSink<T> {
  fn default() -> Self {
    Self::new()
  }
}

// =============================================================================
// Tests
// =============================================================================
