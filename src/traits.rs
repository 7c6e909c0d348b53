//! Common traits for heap data structures
//!
//! This module provides the call surface shared by the heaps in this crate:
//!
//! - [`Heap`]: insertion, minimum inspection and minimum extraction
//! - [`HeapError`]: the error returned when reading from an exhausted heap
//!
//! Unlike `std::collections::BinaryHeap`, reading from an empty heap is an
//! error rather than `None`. Callers that prefer `Option` semantics can wrap
//! any [`Heap`] in [`StdHeap`](crate::stdlib_compat::StdHeap).

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `pop` or `peek` was called on a heap with no elements
    EmptyContainer,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyContainer => {
                write!(f, "heap is empty, there is no minimum to read or remove")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-heap/priority queue data structures
///
/// Elements are ordered by their natural [`Ord`] order and the smallest
/// element is always served first:
/// - `push` inserts an element
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// # Example
///
/// ```rust
/// use rust_min_heap::{Heap, HeapError, MinHeap};
///
/// let mut heap: MinHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(Heap::pop(&mut heap), Ok(1));
/// assert_eq!(Heap::pop(&mut heap), Ok(2));
/// assert_eq!(Heap::pop(&mut heap), Ok(3));
/// assert_eq!(Heap::pop(&mut heap), Err(HeapError::EmptyContainer));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, value: T);

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&T, HeapError>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty. The heap is
    /// left untouched in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, HeapError>;
}
