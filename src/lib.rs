//! Exact and approximate solvers for the 0/1 knapsack problem.
//!
//! Three interchangeable solvers consume the same [`Instance`]:
//! - [`solvers::linear`]: exact DP over a single capacity-indexed vector,
//!   O(n·L) time in O(L) space, value only.
//! - [`solvers::tabular`]: exact DP over the full (L+1) x (n+1) grid,
//!   O(n·L) time and space, with recovery of one optimal item set and the
//!   grid itself for inspection.
//! - [`solvers::greedy`]: utility-density ranking in O(n log n), feasible
//!   but not necessarily optimal.
//!
//! The [`harness`] runs all three on generated instances of increasing
//! size, cross-checks the exact optimal values against each other, and
//! reports per-solver wall times together with the greedy quality ratio.
//!
//! ## Quick start
//! ```
//! use knapsack_lab::{solvers::tabular, Instance};
//!
//! let instance = Instance::new(vec![1, 2, 4, 5], vec![2, 3, 3, 4], 6).unwrap();
//! let solution = tabular::solve(&instance).unwrap();
//! assert_eq!(solution.value, 6);
//! ```
//!
//! Everything is single-threaded and stateless between calls: each solve
//! allocates its own storage and returns it (or drops it) before the next
//! call begins.

pub mod builder;
pub mod error;
pub mod harness;
pub mod instance;
pub mod solvers;
pub mod table;
pub mod utils;

pub use crate::builder::HarnessBuilder;
pub use crate::error::Error;
pub use crate::harness::{Harness, Report, SizeReport};
pub use crate::instance::{Instance, Item};
pub use crate::table::DpTable;
