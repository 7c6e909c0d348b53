//! Sift-step cost measurement
//!
//! Building a heap from `n` values and draining it again costs
//! O(n log n) sift steps. [`measure_build_and_drain`] runs exactly that
//! workload on a fresh [`MinHeap`] and reports the observed step count next
//! to the `1.5 * n * ln(n)` reference curve, so callers can plot or assert on
//! the logarithmic-height guarantee.
//!
//! ```rust
//! use rust_min_heap::cost::measure_build_and_drain;
//!
//! let sample = measure_build_and_drain((0..1000).rev());
//! assert_eq!(sample.n, 1000);
//! assert!(sample.within_bound(2.0));
//! ```

use crate::min_heap::MinHeap;

/// Observed cost of one build-and-drain run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostSample {
    /// Number of values inserted and then popped
    pub n: usize,
    /// Sift steps recorded over the whole run
    pub steps: u64,
    /// `1.5 * n * ln(n)`
    pub reference: f64,
}

impl CostSample {
    /// Observed steps divided by the reference curve, or 0 when the
    /// reference is 0
    pub fn ratio(&self) -> f64 {
        if self.reference == 0.0 {
            0.0
        } else {
            self.steps as f64 / self.reference
        }
    }

    /// Whether the observed steps are at most `c * n * log2(n)`
    pub fn within_bound(&self, c: f64) -> bool {
        (self.steps as f64) <= c * n_log2_n(self.n)
    }
}

/// The reference curve `1.5 * n * ln(n)`; 0 for `n == 0`
pub fn reference_cost(n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    1.5 * n * n.ln()
}

fn n_log2_n(n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    n * n.log2()
}

/// Inserts every value into a fresh heap, pops until it is empty and
/// returns the recorded step count
pub fn measure_build_and_drain<T, I>(values: I) -> CostSample
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut heap = MinHeap::new();
    let mut n = 0;
    for value in values {
        heap.insert(value);
        n += 1;
    }
    while heap.pop().is_ok() {}

    CostSample {
        n,
        steps: heap.steps(),
        reference: reference_cost(n),
    }
}

/// `1, 10, 100, ...`, `count` sizes in total, stopping early at the first
/// power of ten that does not fit in `usize`
pub fn decade_sizes(count: u32) -> impl Iterator<Item = usize> {
    (0..count).map_while(|exp| 10usize.checked_pow(exp))
}
