//! Minimum priority queue used by path search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap slot that reverses the element order so `BinaryHeap` pops the minimum.
///
/// Values that cannot be compared (NaN costs) are treated as equal.
#[derive(Debug)]
struct MinEntry<T>(T);

impl<T: PartialOrd> PartialEq for MinEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: PartialOrd> Eq for MinEntry<T> {}

impl<T: PartialOrd> PartialOrd for MinEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PartialOrd> Ord for MinEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.partial_cmp(&self.0).unwrap_or(Ordering::Equal)
    }
}

/// A binary min-heap ordered by `T`'s `PartialOrd`.
///
/// The order among equal elements is unspecified.
#[derive(Debug)]
pub struct MinQueue<T> {
    heap: BinaryHeap<MinEntry<T>>,
}

impl<T: PartialOrd> Default for MinQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<T: PartialOrd> MinQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: T) {
        self.heap.push(MinEntry(item));
    }

    /// Remove and return the smallest item.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.0)
    }

    /// The smallest item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|entry| &entry.0)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T: PartialOrd> Extend<T> for MinQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heap.extend(iter.into_iter().map(MinEntry));
    }
}

impl<T: PartialOrd> FromIterator<T> for MinQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
