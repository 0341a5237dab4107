//! Exact 0/1 knapsack DP in O(capacity) space.
//!
//! A single vector `dp[w]` holds the best utility achievable within
//! capacity `w` using the items processed so far. Each item updates the
//! vector from high capacities down to its own weight. The descending scan
//! is what keeps the semantics 0/1: scanned upward, `dp[w - weight]` could
//! already include the current item, and the recurrence would solve the
//! unbounded-repetition knapsack instead.
//!
//! Only the optimal value survives; the collapsed vector retains no
//! selection trace. Use [`tabular`](super::tabular) when the chosen items
//! are needed.

use crate::error::Error;
use crate::instance::Instance;
use crate::utils::{table_dims, try_zeroed};

/// Maximum achievable utility within the instance capacity.
///
/// O(n·capacity) time, O(capacity) space.
///
/// # Errors
/// [`Error::TableTooLarge`] / [`Error::AllocationFailed`] when the
/// capacity-indexed vector cannot be allocated.
pub fn solve(instance: &Instance) -> Result<u64, Error> {
    let capacity = instance.capacity();
    let (rows, _) = table_dims(0, capacity)?;
    let mut dp = try_zeroed(rows)?;

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("linear_solve", n = instance.len(), capacity);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    for item in instance.items() {
        if item.weight > capacity {
            continue;
        }
        let weight = item.weight as usize;
        for w in (weight..rows).rev() {
            let candidate = dp[w - weight] + item.utility;
            if candidate > dp[w] {
                dp[w] = candidate;
            }
        }
    }

    Ok(dp[rows - 1])
}
