//! Extreme stress tests that really push the heap to its limits
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use rust_min_heap::{Heap, HeapError, MinHeap};

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_below(&mut self, bound: u64) -> i64 {
        ((self.next() >> 33) % bound) as i64
    }
}

/// Test massive numbers of inserts and pops
fn test_massive_operations<H: Heap<i32>>() {
    let mut heap = H::new();

    for i in 0..1000 {
        heap.push(i);
    }

    assert_eq!(heap.len(), 1000);

    for i in 0..1000 {
        assert_eq!(heap.pop(), Ok(i));
    }

    assert!(heap.is_empty());
    assert_eq!(heap.pop(), Err(HeapError::EmptyContainer));
}

/// Test alternating insert and pop
fn test_alternating_ops<H: Heap<i32>>() {
    let mut heap = H::new();

    // Insert-insert-pop pattern
    for i in 0..200 {
        heap.push(i * 2);
        heap.push(i * 2 + 1);

        let popped = heap.pop();
        assert!(popped.is_ok());
    }

    assert_eq!(heap.len(), 200);

    let mut last = i32::MIN;
    while let Ok(value) = heap.pop() {
        assert!(value >= last);
        last = value;
    }
    assert!(heap.is_empty());
}

/// Test with extreme values
fn test_extreme_values<H: Heap<i64>>() {
    let mut heap = H::new();

    heap.push(1_000_000_000);
    heap.push(i64::MAX);
    heap.push(-1_000_000_000);
    heap.push(i64::MIN);
    heap.push(0);

    assert_eq!(heap.pop(), Ok(i64::MIN));
    assert_eq!(heap.pop(), Ok(-1_000_000_000));
    assert_eq!(heap.pop(), Ok(0));
    assert_eq!(heap.pop(), Ok(1_000_000_000));
    assert_eq!(heap.pop(), Ok(i64::MAX));
}

/// Test drain then refill, several rounds
fn test_refill_rounds<H: Heap<i32>>() {
    let mut heap = H::new();

    for round in 0..5 {
        for i in (0..300).rev() {
            heap.push(i + round);
        }
        for i in 0..300 {
            assert_eq!(heap.pop(), Ok(i + round));
        }
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), Err(HeapError::EmptyContainer));
    }
}

#[test]
fn test_min_heap_massive_operations() {
    test_massive_operations::<MinHeap<i32>>();
}

#[test]
fn test_min_heap_alternating_ops() {
    test_alternating_ops::<MinHeap<i32>>();
}

#[test]
fn test_min_heap_extreme_values() {
    test_extreme_values::<MinHeap<i64>>();
}

#[test]
fn test_min_heap_refill_rounds() {
    test_refill_rounds::<MinHeap<i32>>();
}

#[test]
fn test_min_heap_random_against_sorted_copy() {
    let mut rng = Lcg::new(0x5eed);
    let mut heap = MinHeap::new();
    let mut model: Vec<i64> = Vec::new();

    for _ in 0..20_000 {
        if rng.next_below(3) == 0 {
            let expected = if model.is_empty() {
                Err(HeapError::EmptyContainer)
            } else {
                Ok(model.remove(0))
            };
            assert_eq!(heap.pop(), expected);
        } else {
            let value = rng.next_below(10_000);
            let pos = model.partition_point(|&v| v <= value);
            model.insert(pos, value);
            heap.insert(value);
        }

        assert_eq!(heap.size(), model.len());
        assert_eq!(heap.peek_min().ok(), model.first());
    }

    assert!(heap.is_heap_ordered());
    assert_eq!(heap.into_sorted_vec(), model);
}
