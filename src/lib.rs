//! Binary Min-Heap with Sift-Step Accounting
//!
//! This crate provides an array-backed binary min-heap: a priority queue that
//! inserts and removes its minimum in O(log n) and reads it in O(1).
//!
//! # Features
//!
//! - **[`MinHeap`]**: dense `Vec`-backed heap ordered by the elements' natural order
//! - **Recoverable exhaustion**: `pop` and `peek_min` on an empty heap return
//!   [`HeapError::EmptyContainer`] instead of panicking
//! - **Per-instance cost accounting**: each sift step is reported to a
//!   [`SiftObserver`]; the default [`StepCounter`] makes the O(n log n) cost of
//!   bulk build/drain measurable (see [`cost`])
//! - **`BinaryHeap`-style adapter**: [`StdHeap`](stdlib_compat::StdHeap) returns `Option`
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.insert(5);
//! heap.insert(3);
//! heap.insert(8);
//! assert_eq!(heap.peek_min(), Ok(&3));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.size(), 2);
//! ```
//!
//! A heap is exclusively owned and is not synchronized; wrap it in a mutex to
//! share it between threads.

pub mod cost;
pub mod min_heap;
pub mod observer;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use min_heap::MinHeap;
pub use observer::{SiftObserver, SiftPhase, StepCounter};
pub use traits::{Heap, HeapError};
