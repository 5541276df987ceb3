//! The capability set shared by every priority-queue strategy.

use std::collections::BinaryHeap;

/// A trait for abstraction over different priority queue strategies (linear scan, binary heap).
///
/// Callers written against this trait can swap one strategy for another without code changes.
pub trait AnyPriorityQueue<T> {
    #[doc(alias = "size")]
    fn len(&self) -> usize;

    #[doc(alias = "empty")]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, item: T);

    /// Removes and returns the most extreme element.
    fn pop(&mut self) -> Option<T>;

    /// Returns the most extreme element without removing it.
    #[doc(alias = "top")]
    fn peek(&self) -> Option<&T>;

    fn clear(&mut self);

    /// Restores whatever internal order the strategy relies on after stored keys were
    /// changed behind its back (e.g. through a `Cell`). Strategies that keep no order do nothing.
    fn update_priorities(&mut self) {}
}

impl<T: Ord> AnyPriorityQueue<T> for BinaryHeap<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, item: T) {
        self.push(item);
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn peek(&self) -> Option<&T> {
        self.peek()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn update_priorities(&mut self) {
        let items = std::mem::take(self).into_vec();
        tracing::trace!(len = items.len(), "rebuilding binary heap");
        *self = BinaryHeap::from(items);
    }
}

// --- Tests ---
