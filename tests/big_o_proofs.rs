//! Big-O complexity proofs for heap operations
//!
//! This module empirically verifies that the heap meets its complexity bounds
//! using the `big-o-test` crate.
//!
//! ## Testing Strategy
//!
//! We use `test_algorithm` to measure batch operations. For batch operations,
//! O(log n) per-element operations appear as O(n log n) for n operations.
//!
//! Note: These are empirical tests, not formal proofs. They detect significant
//! deviations from expected behavior but may not catch subtle issues with
//! specific input patterns. The deterministic step-count bounds live in
//! `cost_bound_tests.rs`.

use big_o_test::{test_algorithm, BigOAlgorithmComplexity};
use rust_min_heap::MinHeap;

use ctor::ctor;
use parking_lot::RwLock;
use std::hint::black_box;
use std::sync::Arc;

/// Sets up the ENV, affecting the Rust's test runner
#[ctor]
fn setup_env() {
    // cause tests to run serially -- this may be replaced by using the `serial_test` crate
    std::env::set_var("RUST_TEST_THREADS", "1");
}

/// Descending input makes every insert sift all the way to the root
fn build_descending(heap: &mut MinHeap<i32>, n: i32) {
    for i in (0..n).rev() {
        heap.insert(i);
    }
}

/// Each pass owns a fresh, pre-sized heap so the measured memory is exactly
/// that pass's storage.
#[test]
fn test_min_heap_insert() {
    test_algorithm(
        "MinHeap insert batch",
        3,
        || {},
        1000,
        || {
            let mut heap = MinHeap::with_capacity(1000);
            build_descending(&mut heap, 1000);
            black_box(heap.size());
            42
        },
        2000,
        || {
            let mut heap = MinHeap::with_capacity(2000);
            build_descending(&mut heap, 2000);
            black_box(heap.size());
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

#[test]
fn test_min_heap_pop() {
    let heap = Arc::new(RwLock::new(MinHeap::new()));

    test_algorithm(
        "MinHeap pop batch",
        3,
        || {
            *heap.write() = MinHeap::new();
        },
        1000,
        || {
            let mut h = heap.write();
            build_descending(&mut h, 1000);
            for _ in 0..1000 {
                assert!(h.pop().is_ok(), "pop() must succeed after inserting elements");
            }
            42
        },
        2000,
        || {
            let mut h = heap.write();
            build_descending(&mut h, 2000);
            for _ in 0..2000 {
                assert!(h.pop().is_ok(), "pop() must succeed after inserting elements");
            }
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}
