//! Comparative evaluation of the three solvers on generated instances.
//!
//! For each requested size `n` the harness draws one random instance with
//! capacity `L = n * capacity_factor`, weights uniform in
//! `[1, max(2, L / 4))` and utilities uniform in `[1, utility_bound)`,
//! times each solver with a wall clock, cross-checks the two exact optimal
//! values, and records the greedy quality ratio. The resulting [`Report`]
//! exposes plain `(n, value)` series for external charting.
//!
//! Solver calls run strictly sequentially; nothing is shared or cached
//! between them.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Error;
use crate::instance::Instance;
use crate::solvers::{greedy, linear, tabular};

/// Default multiplier for generated capacities: L = n * 50.
pub const DEFAULT_CAPACITY_FACTOR: u64 = 50;
/// Default exclusive upper bound for generated utilities.
pub const DEFAULT_UTILITY_BOUND: u64 = 100;
/// Default RNG seed; runs with equal settings reproduce exactly.
pub const DEFAULT_SEED: u64 = 42;

/// Sequential runner for the three solvers over a list of instance sizes.
pub struct Harness {
    sizes: Vec<usize>,
    seed: u64,
    capacity_factor: u64,
    utility_bound: u64,
}

/// Measurements for one generated instance size.
#[derive(Clone, Debug)]
pub struct SizeReport {
    pub n: usize,
    pub capacity: u64,
    pub optimal: u64,
    pub greedy_value: u64,
    pub linear_time: Duration,
    pub tabular_time: Duration,
    pub greedy_time: Duration,
    /// greedy_value / optimal, defined as 1.0 when the optimum is 0.
    pub quality: f64,
}

/// Per-size measurements, in the order the sizes were requested.
#[derive(Clone, Debug, Default)]
pub struct Report {
    pub entries: Vec<SizeReport>,
}

impl Report {
    pub fn linear_series(&self) -> Vec<(usize, Duration)> {
        self.entries.iter().map(|e| (e.n, e.linear_time)).collect()
    }

    pub fn tabular_series(&self) -> Vec<(usize, Duration)> {
        self.entries.iter().map(|e| (e.n, e.tabular_time)).collect()
    }

    pub fn greedy_series(&self) -> Vec<(usize, Duration)> {
        self.entries.iter().map(|e| (e.n, e.greedy_time)).collect()
    }

    pub fn quality_series(&self) -> Vec<(usize, f64)> {
        self.entries.iter().map(|e| (e.n, e.quality)).collect()
    }
}

impl Harness {
    /// Harness with default generation settings.
    pub fn new(sizes: Vec<usize>) -> Self {
        Self::with_settings(
            sizes,
            DEFAULT_SEED,
            DEFAULT_CAPACITY_FACTOR,
            DEFAULT_UTILITY_BOUND,
        )
    }

    /// Harness with explicit generation settings; see
    /// [`HarnessBuilder`](crate::builder::HarnessBuilder) for the chaining
    /// form.
    pub fn with_settings(
        sizes: Vec<usize>,
        seed: u64,
        capacity_factor: u64,
        utility_bound: u64,
    ) -> Self {
        Self {
            sizes,
            seed,
            capacity_factor,
            utility_bound,
        }
    }

    fn generate(&self, rng: &mut StdRng, n: usize) -> Result<Instance, Error> {
        let capacity = n as u64 * self.capacity_factor;
        let weight_bound = (capacity / 4).max(2);
        let utility_bound = self.utility_bound.max(2);
        let weights = (0..n).map(|_| rng.gen_range(1..weight_bound)).collect();
        let utilities = (0..n).map(|_| rng.gen_range(1..utility_bound)).collect();
        Instance::new(weights, utilities, capacity)
    }

    /// Run all three solvers over every configured size.
    ///
    /// # Errors
    /// [`Error::ExactMismatch`] the moment the two exact solvers disagree
    /// (the run aborts rather than continue past a correctness defect), plus
    /// any resource error bubbling up from the solvers.
    pub fn run(&self) -> Result<Report, Error> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut entries = Vec::with_capacity(self.sizes.len());

        for &n in &self.sizes {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("harness_size", n);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            let instance = self.generate(&mut rng, n)?;
            let capacity = instance.capacity();

            let start = Instant::now();
            let linear_value = linear::solve(&instance)?;
            let linear_time = start.elapsed();

            let start = Instant::now();
            let tabular_solution = tabular::solve(&instance)?;
            let tabular_time = start.elapsed();

            if linear_value != tabular_solution.value {
                return Err(Error::ExactMismatch {
                    n,
                    capacity,
                    linear: linear_value,
                    tabular: tabular_solution.value,
                });
            }

            let start = Instant::now();
            let greedy_solution = greedy::solve(&instance);
            let greedy_time = start.elapsed();

            let quality = if linear_value == 0 {
                1.0
            } else {
                greedy_solution.value as f64 / linear_value as f64
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(
                n,
                capacity,
                linear_s = linear_time.as_secs_f64(),
                tabular_s = tabular_time.as_secs_f64(),
                greedy_s = greedy_time.as_secs_f64(),
                quality,
                "size complete"
            );

            entries.push(SizeReport {
                n,
                capacity,
                optimal: linear_value,
                greedy_value: greedy_solution.value,
                linear_time,
                tabular_time,
                greedy_time,
                quality,
            });
        }

        Ok(Report { entries })
    }
}
