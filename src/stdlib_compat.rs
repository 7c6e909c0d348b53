//! Standard library compatibility layer
//!
//! Provides a `BinaryHeap`-shaped wrapper whose `peek` and `pop` return
//! `Option`, for callers that treat an exhausted heap as the end of a loop
//! rather than as an error.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: This is a min-heap, while `BinaryHeap` is a max-heap.
//!   Use `std::cmp::Reverse<T>` to get max-heap behavior.
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::stdlib_compat::StdHeap;
//!
//! let mut heap: StdHeap<i32> = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&3)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(heap.pop(), Some(3));
//!
//! while let Some(_) = heap.pop() {}
//! assert_eq!(heap.pop(), None);
//! ```

use std::marker::PhantomData;

use crate::min_heap::MinHeap;
use crate::traits::Heap;

/// A drop-in replacement for `std::collections::BinaryHeap`
///
/// # Type Parameters
/// - `T`: The element type, must implement `Ord`
/// - `H`: The underlying heap implementation, [`MinHeap`] by default
pub struct StdHeap<T: Ord, H: Heap<T> = MinHeap<T>> {
    heap: H,
    _phantom: PhantomData<T>,
}

impl<T: Ord, H: Heap<T>> StdHeap<T, H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            heap: H::new(),
            _phantom: PhantomData,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: T) {
        self.heap.push(item)
    }

    /// Returns a reference to the smallest item without removing it
    ///
    /// This is equivalent to `BinaryHeap::peek`, but returns the minimum (not maximum).
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().ok()
    }

    /// Removes and returns the smallest item
    ///
    /// This is equivalent to `BinaryHeap::pop`, but returns the minimum (not maximum).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    /// Returns the wrapped heap
    pub fn into_inner(self) -> H {
        self.heap
    }
}

impl<T: Ord, H: Heap<T>> Default for StdHeap<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord, H: Heap<T>> From<H> for StdHeap<T, H> {
    fn from(heap: H) -> Self {
        Self {
            heap,
            _phantom: PhantomData,
        }
    }
}
