//! Comparator strategies for the linear-scan queues.
//!
//! A [`Compare`] value is a strict weak ordering over `T`. `compare(a, b)` answers
//! "is `a` ordered before `b`?", and the *extreme* element of a queue is one that
//! no other element is ordered after. With the default [`Less`] that is the maximum.

/// A strict weak ordering used to pick the extreme element of a queue.
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` is ordered strictly before `b`.
    fn compare(&self, a: &T, b: &T) -> bool;
}

/// Ascending order (`a < b`). The extreme element is the greatest one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Less;

/// Descending order (`a > b`). The extreme element is the least one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Greater;

impl<T: Ord + ?Sized> Compare<T> for Less {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: Ord + ?Sized> Compare<T> for Greater {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Adapts a closure `Fn(&T, &T) -> bool` into a [`Compare`].
///
/// ```rust
/// use linear_scan_queue::{FnCompare, LinearScanPriorityQueue};
///
/// // Shortest string is the extreme.
/// let by_len = FnCompare(|a: &&str, b: &&str| a.len() > b.len());
/// let mut q: LinearScanPriorityQueue<&str, _> = LinearScanPriorityQueue::with_compare(by_len);
/// q.push("three");
/// q.push("a");
/// q.push("to");
/// assert_eq!(q.peek(), Some(&"a"));
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnCompare<F>(pub F);

impl<T: ?Sized, F> Compare<T> for FnCompare<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<F> core::fmt::Debug for FnCompare<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FnCompare(..)")
    }
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        (**self).compare(a, b)
    }
}

/// Position of the extreme element of `items`, or `None` if empty.
///
/// The tracked position moves only when a later element is strictly more extreme,
/// so among tied elements the earliest position wins.
pub fn extreme_index<T, C>(items: &[T], compare: &C) -> Option<usize>
where
    C: Compare<T> + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    let mut extreme = 0;
    for index in 1..items.len() {
        if compare.compare(&items[extreme], &items[index]) {
            extreme = index;
        }
    }
    Some(extreme)
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_less_greater() {
        assert!(Less.compare(&1, &2));
        assert!(!Less.compare(&2, &2));
        assert!(Greater.compare(&3, &2));
        assert!(!Greater.compare(&2, &2));
    }

    #[test]
    fn test_compare_fn_and_ref() {
        let c = FnCompare(|a: &i32, b: &i32| a.abs() < b.abs());
        assert!(c.compare(&1, &-5));
        assert!((&c).compare(&-1, &5));
        assert_eq!(format!("{:?}", c), "FnCompare(..)");
    }

    #[test]
    fn test_compare_extreme_index_basic() {
        assert_eq!(extreme_index::<i32, _>(&[], &Less), None);
        assert_eq!(extreme_index(&[7], &Less), Some(0));
        assert_eq!(extreme_index(&[4, 1, 3, 2], &Less), Some(0));
        assert_eq!(extreme_index(&[4, 1, 3, 2], &Greater), Some(1));
    }

    #[test]
    fn test_compare_extreme_index_ties_keep_first() {
        assert_eq!(extreme_index(&[5, 3, 5, 1], &Less), Some(0));
        assert_eq!(extreme_index(&[1, 5, 5, 5], &Less), Some(1));
        assert_eq!(extreme_index(&[2, 1, 1], &Greater), Some(1));
        assert_eq!(extreme_index(&[0, 0, 0, 0], &Less), Some(0));
    }

    #[test]
    fn test_compare_extreme_index_keyed_ties() {
        // (key, tag): only the key is compared.
        let items = [(1, 'a'), (9, 'b'), (3, 'c'), (9, 'd')];
        let by_key = FnCompare(|a: &(i32, char), b: &(i32, char)| a.0 < b.0);
        let idx = extreme_index(&items, &by_key).unwrap();
        assert_eq!(items[idx], (9, 'b'));
    }
}
