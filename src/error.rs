//! Error taxonomy: invalid instances, exhausted resources, and exact-solver
//! disagreement.
//!
//! Every solve is a deterministic pure computation, so none of these
//! conditions is retryable. Invalid instances must be fixed by the caller;
//! resource exhaustion means the instance is too large for this process and
//! the caller should stop scaling up; a consistency violation is a defect,
//! full stop.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors raised by instance construction, the table-based solvers, and the
/// comparative harness.
#[derive(Debug, Error)]
pub enum Error {
    /// Weight and utility sequences must describe the same items.
    #[error("weights ({weights}) and utilities ({utilities}) differ in length")]
    LengthMismatch { weights: usize, utilities: usize },

    /// Capacity semantics assume every item consumes at least one unit.
    #[error("item {id} has zero weight")]
    ZeroWeight { id: usize },

    /// The requested DP table has more cells than `usize` can address.
    #[error("dp table of {rows} rows x {cols} columns exceeds the addressable size")]
    TableTooLarge { rows: u64, cols: u64 },

    /// The allocator refused the DP storage. Carries the cell count so a
    /// stress-testing caller can report the size that failed and stop
    /// growing instead of crashing.
    #[error("failed to allocate dp storage for {cells} cells")]
    AllocationFailed {
        cells: usize,
        #[source]
        source: TryReserveError,
    },

    /// The two exact solvers returned different optimal values for the same
    /// instance. Always a defect in one of the solvers or a violated
    /// precondition; the harness aborts the whole run on this.
    #[error(
        "exact solvers disagree for n={n}, capacity={capacity}: linear={linear}, tabular={tabular}"
    )]
    ExactMismatch {
        n: usize,
        capacity: u64,
        linear: u64,
        tabular: u64,
    },
}
