//! Priority queue over an unordered `Vec`, answering every query with a linear scan.

use core::fmt::{Debug, Formatter, Result};
use core::slice;

use crate::any_queue::AnyPriorityQueue;
use crate::compare::{extreme_index, Compare, Less};

/// A priority queue that stores its elements unordered and scans for the extreme one on demand.
///
/// # Behavior
/// * **Ordering:** The extreme element is the one no other element is ordered after under `C`.
///   With the default [`Less`] that is the maximum.
/// * **Ties:** Among equally extreme elements the one at the lowest storage position wins.
/// * **Complexity:** `push` is amortized O(1). `peek` and `pop` are O(n).
///
/// # Removal
/// `pop` moves the last element into the vacated slot (`Vec::swap_remove`), so storage order
/// is not preserved across pops. Nothing relies on it.
///
/// ```rust
/// use linear_scan_queue::LinearScanPriorityQueue;
///
/// let mut q: LinearScanPriorityQueue<i32> = [4, 1, 3, 2].into_iter().collect();
/// assert_eq!(q.peek(), Some(&4));
/// assert_eq!(q.pop(), Some(4));
/// assert_eq!(q.len(), 3);
/// ```
#[derive(Clone)]
pub struct LinearScanPriorityQueue<T, C = Less> {
    data: Vec<T>,
    compare: C,
}

impl<T, C: Compare<T> + Default> LinearScanPriorityQueue<T, C> {
    /// Creates an empty queue with a default comparator.
    pub fn new() -> Self {
        Self::with_compare(C::default())
    }

    /// Creates an empty queue with room for `capacity` elements before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_compare(capacity, C::default())
    }
}

impl<T, C: Compare<T>> LinearScanPriorityQueue<T, C> {
    /// Creates an empty queue ordered by `compare`.
    pub fn with_compare(compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }

    pub fn with_capacity_and_compare(capacity: usize, compare: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Builds a queue from every element of `iter`, in one pass.
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, compare: C) -> Self {
        Self {
            data: iter.into_iter().collect(),
            compare,
        }
    }

    // --- Inspection ---

    #[doc(alias = "size")]
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[doc(alias = "empty")]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The comparator this queue was built with.
    pub fn compare(&self) -> &C {
        &self.compare
    }

    /// Live elements in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates the live elements in storage order (not priority order).
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the most extreme element, or `None` if the queue is empty.
    #[doc(alias = "top")]
    pub fn peek(&self) -> Option<&T> {
        extreme_index(&self.data, &self.compare).map(|idx| &self.data[idx])
    }

    // --- Modification ---

    pub fn push(&mut self, item: T) {
        self.data.push(item);
    }

    /// Removes the most extreme element and returns it, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        let idx = extreme_index(&self.data, &self.compare)?;
        Some(self.data.swap_remove(idx))
    }

    /// Does nothing: no order is kept between operations, so there is none to restore.
    #[inline]
    pub fn update_priorities(&mut self) {}

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    pub fn append<D>(&mut self, other: &mut LinearScanPriorityQueue<T, D>) {
        self.data.append(&mut other.data);
    }

    /// Retains only the elements specified by the predicate.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.data.retain(f);
    }

    // --- Consumption ---

    /// Consumes the queue and returns its elements in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the queue and returns its elements in extraction order, most extreme first.
    /// O(n²).
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        while let Some(item) = self.pop() {
            vec.push(item);
        }
        vec
    }
}

impl<T, C: Compare<T>> AnyPriorityQueue<T> for LinearScanPriorityQueue<T, C> {
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
        self.update_priorities();
    }
}

// --- Iterators ---

/// Owning iterator yielding elements in extraction order.
pub struct IntoIter<T, C> {
    queue: LinearScanPriorityQueue<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIter<T, C> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.queue.pop()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIter<T, C> {}

impl<T, C: Compare<T>> IntoIterator for LinearScanPriorityQueue<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a LinearScanPriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Trait Implementations ---

impl<T, C: Compare<T> + Default> Default for LinearScanPriorityQueue<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug, C> Debug for LinearScanPriorityQueue<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for LinearScanPriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<'a, T: Clone + 'a, C: Compare<T>> Extend<&'a T> for LinearScanPriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.data.extend(iter.into_iter().cloned());
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for LinearScanPriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, C: Compare<T> + Default> From<Vec<T>> for LinearScanPriorityQueue<T, C> {
    fn from(data: Vec<T>) -> Self {
        Self {
            data,
            compare: C::default(),
        }
    }
}

// --- Tests ---
