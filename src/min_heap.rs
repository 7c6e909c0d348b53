//! Array-backed binary min-heap
//!
//! The heap is a complete binary tree stored densely in a `Vec`: the node at
//! index `v` has its parent at `(v - 1) / 2` and its children at `2v + 1`
//! and `2v + 2`. Index 0 always holds the minimum.
//!
//! Every repair pass reports its steps to a [`SiftObserver`]. The default
//! observer is a per-instance [`StepCounter`], so the cost of a batch of
//! operations can be read back after the fact.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(log n)   |
//! | `pop`      | O(log n)   |
//! | `peek_min` | O(1)       |
//! | `size`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::{HeapError, MinHeap};
//!
//! let mut heap = MinHeap::new();
//! for value in [5, 3, 8, 1, 9, 3] {
//!     heap.insert(value);
//! }
//!
//! assert_eq!(heap.peek_min(), Ok(&1));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 3, 3, 5, 8, 9]);
//!
//! let mut empty: MinHeap<i32> = MinHeap::new();
//! assert_eq!(empty.pop(), Err(HeapError::EmptyContainer));
//! ```

use std::iter::FusedIterator;

use crate::observer::{SiftObserver, SiftPhase, StepCounter};
use crate::traits::{Heap, HeapError};

#[inline]
fn parent(v: usize) -> usize {
    (v - 1) / 2
}

#[inline]
fn left(v: usize) -> usize {
    2 * v + 1
}

#[inline]
fn right(v: usize) -> usize {
    2 * v + 2
}

/// A binary min-heap over naturally ordered values
///
/// `O` receives one notification per sift step; see [`crate::observer`].
#[derive(Debug, Clone)]
pub struct MinHeap<T: Ord, O: SiftObserver = StepCounter> {
    /// Heap-ordered storage, dense over `0..len`
    data: Vec<T>,
    observer: O,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap with a fresh [`StepCounter`]
    pub fn new() -> Self {
        Self::with_observer(StepCounter::new())
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            observer: StepCounter::new(),
        }
    }

    /// Total sift steps recorded since creation or the last [`reset_steps`](Self::reset_steps)
    pub fn steps(&self) -> u64 {
        self.observer.total()
    }

    /// Clears the step counter without touching the elements
    pub fn reset_steps(&mut self) {
        self.observer.reset();
    }
}

impl<T: Ord, O: SiftObserver> MinHeap<T, O> {
    /// Creates an empty heap that reports sift steps to `observer`
    pub fn with_observer(observer: O) -> Self {
        Self {
            data: Vec::new(),
            observer,
        }
    }

    /// Returns the number of elements in the heap
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Adds `value` to the heap
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::EmptyContainer)
    }

    /// Removes and returns the minimum element
    ///
    /// The last leaf takes the root's place and is sifted down. Callers that
    /// only need the removal can ignore the returned value.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty; nothing is
    /// modified and no step is recorded.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyContainer);
        }

        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down();
        }

        Ok(min)
    }

    /// Returns the observer
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably, e.g. to reset it between batches
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the heap and returns its observer
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Checks that every node is no greater than its children
    pub fn is_heap_ordered(&self) -> bool {
        (1..self.data.len()).all(|v| self.data[parent(v)] <= self.data[v])
    }

    /// Pops elements in non-decreasing order until the heap is empty
    ///
    /// Elements not consumed by the iterator stay in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, O> {
        DrainSorted { heap: self }
    }

    /// Consumes the heap and returns its elements in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_sorted().collect()
    }

    /// Moves the element at `index` towards the root while it is strictly
    /// smaller than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index != 0 {
            self.observer.on_sift_step(SiftPhase::Up);
            let p = parent(index);

            if self.data[p] > self.data[index] {
                self.data.swap(p, index);
                index = p;
            } else {
                break;
            }
        }
    }

    /// Moves the root towards the leaves while its smaller child is strictly
    /// smaller than it
    fn sift_down(&mut self) {
        let len = self.data.len();
        let mut index = 0;

        loop {
            self.observer.on_sift_step(SiftPhase::Down);
            let l = left(index);
            // Dense storage: no left child means no children at all.
            if l >= len {
                break;
            }

            let r = right(index);
            // Equal children resolve to the left one.
            let child = if r >= len || self.data[l] <= self.data[r] {
                l
            } else {
                r
            };

            if self.data[child] < self.data[index] {
                self.data.swap(child, index);
                index = child;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord, O: SiftObserver + Default> Heap<T> for MinHeap<T, O> {
    fn new() -> Self {
        Self::with_observer(O::default())
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, value: T) {
        self.insert(value);
    }

    fn peek(&self) -> Result<&T, HeapError> {
        self.peek_min()
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        MinHeap::pop(self)
    }
}

impl<T: Ord, O: SiftObserver + Default> Default for MinHeap<T, O> {
    fn default() -> Self {
        Self::with_observer(O::default())
    }
}

impl<T: Ord, O: SiftObserver> Extend<T> for MinHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, O: SiftObserver + Default> FromIterator<T> for MinHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

/// Iterator returned by [`MinHeap::drain_sorted`]
#[derive(Debug)]
pub struct DrainSorted<'a, T: Ord, O: SiftObserver> {
    heap: &'a mut MinHeap<T, O>,
}

impl<T: Ord, O: SiftObserver> Iterator for DrainSorted<'_, T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.size();
        (len, Some(len))
    }
}

impl<T: Ord, O: SiftObserver> ExactSizeIterator for DrainSorted<'_, T, O> {}

impl<T: Ord, O: SiftObserver> FusedIterator for DrainSorted<'_, T, O> {}
