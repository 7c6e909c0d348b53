//! Sift-step cost curve
//!
//! Builds a heap from `n` pseudo-random values for `n = 1, 10, 100, ...`,
//! drains it, and prints the recorded sift steps next to the
//! `1.5 * n * ln(n)` reference curve.
//!
//! ## Running
//!
//! ```bash
//! # Five decades (n up to 10^4), default seed
//! cargo run --release --example cost_curve
//!
//! # Seven decades with a different seed
//! HEAP_DEMO_SEED=7 cargo run --release --example cost_curve -- 7
//! ```

use rust_min_heap::cost::{decade_sizes, measure_build_and_drain};
use std::error::Error;

const DEFAULT_DECADES: u32 = 5;
const DEFAULT_SEED: u64 = 42;
/// Values are drawn from `0..VALUE_BOUND`
const VALUE_BOUND: u64 = 10_000;

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
}

fn main() -> Result<(), Box<dyn Error>> {
    let decades = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .map_err(|e| format!("invalid decade count {:?}: {}", arg, e))?,
        None => DEFAULT_DECADES,
    };
    let seed = match std::env::var("HEAP_DEMO_SEED") {
        Ok(value) => value
            .parse::<u64>()
            .map_err(|e| format!("invalid HEAP_DEMO_SEED {:?}: {}", value, e))?,
        Err(_) => DEFAULT_SEED,
    };

    if decades > 8 {
        eprintln!(
            "Warning: {} decades means up to 10^{} values, this may take a while",
            decades,
            decades - 1
        );
    }

    let mut rng = Lcg::new(seed);

    println!(
        "{:>10} {:>12} {:>14} {:>8}",
        "n", "steps", "1.5 n ln n", "ratio"
    );
    for n in decade_sizes(decades) {
        let values: Vec<u64> = (0..n).map(|_| (rng.next() >> 33) % VALUE_BOUND).collect();
        let sample = measure_build_and_drain(values);
        println!(
            "{:>10} {:>12} {:>14.1} {:>8.3}",
            sample.n,
            sample.steps,
            sample.reference,
            sample.ratio()
        );
    }

    Ok(())
}
