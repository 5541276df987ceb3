#![cfg(feature = "small")]
//! Linear-scan priority queue that lives on the stack for `N` items, then spills to the heap.

use core::mem::{self, ManuallyDrop};
use core::ptr;
use core::slice;
use std::fmt::{Debug, Formatter, Result};

use heapless::Vec as HeaplessVec;

use crate::any_queue::AnyPriorityQueue;
use crate::compare::{extreme_index, Compare, Less};

/// A linear-scan priority queue that stores up to `N` items inline, then spills to the heap.
///
/// # Behavior
/// * **Ordering:** Same as [`LinearScanPriorityQueue`](crate::LinearScanPriorityQueue): the
///   extreme element under `C` is found by a scan, ties go to the lowest storage position.
/// * **Spill:** Occurs automatically when pushing the (N+1)th item, and is one-way.
/// * **Complexity:** Push is amortized O(1). Peek and pop are O(n). Spill is O(n).
///
/// # Safety Invariants
/// * `on_stack` tag determines which side of the `QueueData` union is active.
/// * Elements are unordered; `pop` swaps the last element into the removed slot.
pub struct SmallLinearScanPriorityQueue<T, const N: usize, C = Less> {
    on_stack: bool,
    data: QueueData<T, N>,
    compare: C,
}

/// Internal storage for `SmallLinearScanPriorityQueue`.
///
/// We use `ManuallyDrop` because the compiler cannot know which field is active
/// and therefore cannot automatically drop the correct one.
union QueueData<T, const N: usize> {
    stack: ManuallyDrop<HeaplessVec<T, N>>,
    heap: ManuallyDrop<Vec<T>>,
}

impl<T, const N: usize, C> SmallLinearScanPriorityQueue<T, N, C>
where
    C: Compare<T> + Default,
{
    /// Creates a new empty queue with a default comparator.
    pub fn new() -> Self {
        Self::with_compare(C::default())
    }

    /// Creates a new empty queue with a specific initial capacity.
    /// A capacity above `N` puts the storage on the heap immediately.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut queue = Self::new();
        queue.reserve(capacity);
        queue
    }
}

impl<T, const N: usize, C> SmallLinearScanPriorityQueue<T, N, C>
where
    C: Compare<T>,
{
    pub const MAX_STACK_SIZE: usize = 16 * 1024;

    /// Creates a new empty queue ordered by `compare`.
    pub fn with_compare(compare: C) -> Self {
        const {
            assert!(
                std::mem::size_of::<Self>() <= SmallLinearScanPriorityQueue::<T, N, C>::MAX_STACK_SIZE,
                "SmallLinearScanPriorityQueue is too large! Reduce N."
            );
        }

        Self {
            on_stack: true,
            data: QueueData {
                stack: ManuallyDrop::new(HeaplessVec::new()),
            },
            compare,
        }
    }

    /// Builds a queue from every element of `iter`, in one pass.
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, compare: C) -> Self {
        let mut queue = Self::with_compare(compare);
        queue.extend(iter);
        queue
    }

    // --- Inspection ---

    #[inline]
    pub fn is_on_stack(&self) -> bool {
        self.on_stack
    }

    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[doc(alias = "empty")]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the total capacity of the queue.
    /// If on stack, returns N. If on heap, returns the vector capacity.
    pub fn capacity(&self) -> usize {
        unsafe {
            if self.on_stack {
                N
            } else {
                self.data.heap.capacity()
            }
        }
    }

    pub fn compare(&self) -> &C {
        &self.compare
    }

    pub fn as_slice(&self) -> &[T] {
        unsafe {
            if self.on_stack {
                self.data.stack.as_slice()
            } else {
                self.data.heap.as_slice()
            }
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns the most extreme element, or `None` if the queue is empty.
    #[doc(alias = "top")]
    pub fn peek(&self) -> Option<&T> {
        let items = self.as_slice();
        extreme_index(items, &self.compare).map(|idx| &items[idx])
    }

    // --- Modification ---

    /// Reserves capacity for at least `additional` more elements to be inserted.
    /// May trigger a spill to heap if current stack capacity is insufficient.
    pub fn reserve(&mut self, additional: usize) {
        unsafe {
            if self.on_stack {
                if self.data.stack.len() + additional > N {
                    self.spill_to_heap();
                    (*self.data.heap).reserve(additional);
                }
            } else {
                (*self.data.heap).reserve(additional);
            }
        }
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        if !self.on_stack {
            unsafe { (*self.data.heap).shrink_to_fit() }
        }
    }

    pub fn push(&mut self, item: T) {
        unsafe {
            if self.on_stack {
                match (*self.data.stack).push(item) {
                    Ok(()) => return,
                    Err(item) => {
                        self.spill_to_heap();
                        (*self.data.heap).push(item);
                    }
                }
            } else {
                (*self.data.heap).push(item);
            }
        }
    }

    /// Removes the most extreme element and returns it, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        let idx = extreme_index(self.as_slice(), &self.compare)?;
        unsafe {
            if self.on_stack {
                Some((*self.data.stack).swap_remove(idx))
            } else {
                Some((*self.data.heap).swap_remove(idx))
            }
        }
    }

    /// No-op. Kept so the queue can stand in for heap-backed strategies.
    #[inline]
    pub fn update_priorities(&mut self) {}

    pub fn clear(&mut self) {
        unsafe {
            if self.on_stack {
                (*self.data.stack).clear();
            } else {
                (*self.data.heap).clear();
            }
        }
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    pub fn append<const M: usize, D>(&mut self, other: &mut SmallLinearScanPriorityQueue<T, M, D>)
    where
        D: Compare<T>,
    {
        if other.is_empty() {
            return;
        }
        self.reserve(other.len());
        self.extend(other.take_all());
    }

    /// Retains only the elements specified by the predicate.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        unsafe {
            if self.on_stack {
                (*self.data.stack).retain(|item| f(item));
            } else {
                (*self.data.heap).retain(|item| f(item));
            }
        }
    }

    // --- Consumption ---

    /// Consumes the queue and returns its elements in storage order.
    pub fn into_vec(mut self) -> Vec<T> {
        self.take_all()
    }

    /// Consumes the queue and returns its elements in extraction order, most extreme first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        while let Some(item) = self.pop() {
            vec.push(item);
        }
        vec
    }

    // --- Internals ---

    #[inline(never)]
    unsafe fn spill_to_heap(&mut self) {
        unsafe {
            let stack_vec = ptr::read(&*self.data.stack);
            let mut heap_vec = Vec::with_capacity(N.max(1) * 2);
            heap_vec.extend(stack_vec);
            ptr::write(&mut self.data.heap, ManuallyDrop::new(heap_vec));
            self.on_stack = false;
        }
        tracing::trace!(inline_capacity = N, "linear-scan queue spilled to heap");
    }

    /// Moves every element out in storage order, leaving the active storage empty.
    fn take_all(&mut self) -> Vec<T> {
        unsafe {
            if self.on_stack {
                mem::take(&mut *self.data.stack).into_iter().collect()
            } else {
                mem::take(&mut *self.data.heap)
            }
        }
    }
}

impl<T, const N: usize, C: Compare<T>> AnyPriorityQueue<T> for SmallLinearScanPriorityQueue<T, N, C> {
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
pub struct IntoIter<T, const N: usize, C: Compare<T>> {
    queue: SmallLinearScanPriorityQueue<T, N, C>,
}

impl<T, const N: usize, C: Compare<T>> Iterator for IntoIter<T, N, C> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.queue.pop()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, const N: usize, C: Compare<T>> IntoIterator for SmallLinearScanPriorityQueue<T, N, C> {
    type Item = T;
    type IntoIter = IntoIter<T, N, C>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<'a, T, const N: usize, C: Compare<T>> IntoIterator for &'a SmallLinearScanPriorityQueue<T, N, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Trait Implementations ---

impl<T, const N: usize, C> Drop for SmallLinearScanPriorityQueue<T, N, C> {
    fn drop(&mut self) {
        unsafe {
            if self.on_stack {
                ManuallyDrop::drop(&mut self.data.stack);
            } else {
                ManuallyDrop::drop(&mut self.data.heap);
            }
        }
    }
}

impl<T, const N: usize, C: Compare<T> + Default> Default for SmallLinearScanPriorityQueue<T, N, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize, C> Clone for SmallLinearScanPriorityQueue<T, N, C>
where
    T: Clone,
    C: Compare<T> + Clone,
{
    fn clone(&self) -> Self {
        unsafe {
            if self.on_stack {
                Self {
                    on_stack: true,
                    data: QueueData {
                        stack: ManuallyDrop::new((*self.data.stack).clone()),
                    },
                    compare: self.compare.clone(),
                }
            } else {
                Self {
                    on_stack: false,
                    data: QueueData {
                        heap: ManuallyDrop::new((*self.data.heap).clone()),
                    },
                    compare: self.compare.clone(),
                }
            }
        }
    }
}

impl<T, const N: usize, C> Debug for SmallLinearScanPriorityQueue<T, N, C>
where
    T: Debug,
    C: Compare<T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize, C: Compare<T>> Extend<T> for SmallLinearScanPriorityQueue<T, N, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<'a, T, const N: usize, C> Extend<&'a T> for SmallLinearScanPriorityQueue<T, N, C>
where
    T: Clone + 'a,
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, const N: usize, C: Compare<T> + Default> FromIterator<T> for SmallLinearScanPriorityQueue<T, N, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

// --- Tests ---
