//! Empirical comparison harness for the sorting routines.
//!
//! Generates deterministic inputs per seed, times each algorithm over a
//! number of trials, and reports the median wall-clock duration per
//! (algorithm, size) cell.

use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sorting::{heapsort, mergesort, quicksort};

/// Input shape for generated benchmark data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Distribution {
    /// Uniform random values in a wide range.
    Random,
    /// Already sorted ascending.
    Sorted,
    /// Sorted descending.
    Reverse,
    /// Random values drawn from a tiny range.
    Duplicates,
}

impl Distribution {
    /// Name used in reports and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reverse => "reverse",
            Self::Duplicates => "duplicates",
        }
    }
}

impl FromStr for Distribution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "sorted" => Ok(Self::Sorted),
            "reverse" => Ok(Self::Reverse),
            "duplicates" => Ok(Self::Duplicates),
            other => Err(format!(
                "unknown distribution {:?} (expected random, sorted, reverse, or duplicates)",
                other
            )),
        }
    }
}

/// Sorting algorithm under measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Heapsort,
    Mergesort,
    Quicksort,
}

impl Algorithm {
    /// All algorithms, in report order.
    pub const ALL: [Algorithm; 3] = [Self::Heapsort, Self::Mergesort, Self::Quicksort];

    /// Name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Heapsort => "heapsort",
            Self::Mergesort => "mergesort",
            Self::Quicksort => "quicksort",
        }
    }

    fn run(self, data: &mut Vec<i64>) {
        match self {
            Self::Heapsort => heapsort(data),
            Self::Mergesort => *data = mergesort(data),
            Self::Quicksort => quicksort(data),
        }
    }
}

/// Median run time for one (algorithm, size) cell.
#[derive(Clone, Debug)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    pub size: usize,
    pub distribution: Distribution,
    pub median: Duration,
}

/// Generate `n` values with the given shape, deterministic per seed.
pub fn generate_data(n: usize, dist: Distribution, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    match dist {
        Distribution::Random => (0..n).map(|_| rng.gen_range(0..10_000_000)).collect(),
        Distribution::Sorted => (0..n as i64).collect(),
        Distribution::Reverse => (0..n as i64).rev().collect(),
        Distribution::Duplicates => (0..n).map(|_| rng.gen_range(0..10)).collect(),
    }
}

/// Time every algorithm over every size, `trials` runs each.
///
/// Each run sorts a fresh copy of the same generated input so the
/// comparisons are fair; each result is sanity-checked against a
/// known-sorted copy before its timing counts.
pub fn run_benchmarks(
    sizes: &[usize],
    trials: usize,
    dist: Distribution,
    seed: u64,
) -> Vec<BenchmarkResult> {
    let trials = trials.max(1);
    let mut results = Vec::with_capacity(sizes.len() * Algorithm::ALL.len());

    for &size in sizes {
        let data = generate_data(size, dist, seed);
        let mut expected = data.clone();
        expected.sort_unstable();

        for algorithm in Algorithm::ALL {
            let mut timings = Vec::with_capacity(trials);
            for _ in 0..trials {
                let mut work = data.clone();
                let start = Instant::now();
                algorithm.run(&mut work);
                let elapsed = start.elapsed();
                if work != expected {
                    panic!(
                        "{} produced an unsorted result for size {}",
                        algorithm.name(),
                        size
                    );
                }
                timings.push(elapsed);
            }
            results.push(BenchmarkResult {
                algorithm,
                size,
                distribution: dist,
                median: median(&mut timings),
            });
        }
    }

    results
}

/// Median of a non-empty set of durations; mean of the middle pair when even.
fn median(timings: &mut [Duration]) -> Duration {
    timings.sort_unstable();
    let mid = timings.len() / 2;
    if timings.len() % 2 == 1 {
        timings[mid]
    } else {
        (timings[mid - 1] + timings[mid]) / 2
    }
}
