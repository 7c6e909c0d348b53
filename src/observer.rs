//! Sift-step observation
//!
//! Every repair pass of a [`MinHeap`](crate::MinHeap) is made of *sift steps*:
//! one loop iteration comparing a node against its parent (sift up) or
//! against its smaller child (sift down). A [`SiftObserver`] is told about
//! each step as it happens, which makes the cost of a batch of operations
//! observable without any shared state between heap instances.
//!
//! | Observer            | Behaviour                                  |
//! |---------------------|--------------------------------------------|
//! | [`StepCounter`]     | counts up and down steps (the default)     |
//! | `()`                | ignores every step                         |
//! | `FnMut(SiftPhase)`  | forwards every step to the closure         |

/// The repair pass that produced a sift step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiftPhase {
    /// Moving a freshly appended element towards the root
    Up,
    /// Moving the new root towards the leaves after a pop
    Down,
}

/// Receives one notification per sift step
pub trait SiftObserver {
    /// Called once for every sift step, including the final step of a pass
    /// that ends without a swap.
    fn on_sift_step(&mut self, phase: SiftPhase);
}

impl SiftObserver for () {
    #[inline]
    fn on_sift_step(&mut self, _phase: SiftPhase) {}
}

impl<F: FnMut(SiftPhase)> SiftObserver for F {
    #[inline]
    fn on_sift_step(&mut self, phase: SiftPhase) {
        self(phase)
    }
}

/// Per-instance sift-step counter
///
/// # Example
///
/// ```rust
/// use rust_min_heap::MinHeap;
///
/// let mut heap = MinHeap::new();
/// for value in [3, 2, 1] {
///     heap.insert(value);
/// }
/// assert_eq!(heap.observer().up(), 2);
/// assert_eq!(heap.observer().down(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCounter {
    up: u64,
    down: u64,
}

impl StepCounter {
    /// Creates a counter with both tallies at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps recorded while sifting up
    pub fn up(&self) -> u64 {
        self.up
    }

    /// Steps recorded while sifting down
    pub fn down(&self) -> u64 {
        self.down
    }

    /// All recorded steps
    pub fn total(&self) -> u64 {
        self.up + self.down
    }

    /// Sets both tallies back to zero
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl SiftObserver for StepCounter {
    #[inline]
    fn on_sift_step(&mut self, phase: SiftPhase) {
        match phase {
            SiftPhase::Up => self.up += 1,
            SiftPhase::Down => self.down += 1,
        }
    }
}
