//! # Linear Scan Queue
//!
//! Priority queues that keep their elements in an unordered array and find the extreme
//! element with a linear scan whenever it is asked for.
//!
//! Where a binary heap pays O(log n) on every push and pop to keep its order, these queues
//! pay nothing on push and O(n) on `peek`/`pop`. That is the better trade when pushes
//! dominate, when the queue stays small, or when element priorities change in place
//! (there is no internal order that can go stale).
//!
//! ## Key Features
//!
//! * **Pluggable ordering:** Any [`Compare`] strategy. [`Less`] (the default) makes the
//!   maximum extreme, [`Greater`] the minimum, and [`FnCompare`] adapts a closure.
//! * **Deterministic ties:** Among equally extreme elements the one at the lowest storage
//!   position is returned and removed.
//! * **Interchangeable:** Every queue implements [`AnyPriorityQueue`], as does
//!   `std::collections::BinaryHeap`, so strategies can be swapped without code changes.
//! * **Stack storage:** `SmallLinearScanPriorityQueue` (feature `small`, on by default)
//!   keeps up to `N` items inline and spills to the heap on the (N+1)th push.
//!
//! ## Examples
//!
//! ### LinearScanPriorityQueue
//!
//! ```rust
//! use linear_scan_queue::LinearScanPriorityQueue;
//!
//! let mut q: LinearScanPriorityQueue<i32> = LinearScanPriorityQueue::new();
//! q.push(4);
//! q.push(1);
//! q.push(3);
//!
//! assert_eq!(q.peek(), Some(&4));
//! assert_eq!(q.pop(), Some(4));
//! assert_eq!(q.pop(), Some(3));
//! assert_eq!(q.len(), 1);
//! ```
//!
//! ### Min-queue via Greater
//!
//! ```rust
//! use linear_scan_queue::{Greater, LinearScanPriorityQueue};
//!
//! let mut q = LinearScanPriorityQueue::from_iter_with([7, 2, 9], Greater);
//! assert_eq!(q.pop(), Some(2));
//! ```
//!
//! ### SmallLinearScanPriorityQueue
//!
//! ```rust
//! # #[cfg(feature = "small")]
//! # {
//! use linear_scan_queue::SmallLinearScanPriorityQueue;
//!
//! let mut q: SmallLinearScanPriorityQueue<i32, 2> = SmallLinearScanPriorityQueue::new();
//! q.push(1);
//! q.push(2);
//! assert!(q.is_on_stack());
//!
//! // Spills on 3rd item
//! q.push(3);
//! assert!(!q.is_on_stack());
//! assert_eq!(q.pop(), Some(3));
//! # }
//! ```

// --- Module Declarations ---

pub mod any_queue;
pub mod compare;
pub mod linear;
pub mod small_linear;

// --- Re-exports ---

pub use any_queue::AnyPriorityQueue;
pub use compare::{extreme_index, Compare, FnCompare, Greater, Less};
pub use linear::LinearScanPriorityQueue;
#[cfg(feature = "small")]
pub use small_linear::SmallLinearScanPriorityQueue;
