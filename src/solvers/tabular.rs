//! Exact 0/1 knapsack DP over the full `(capacity + 1) x (n + 1)` grid,
//! with recovery of one optimal item set.
//!
//! Cell `(M, j)` reads only column `j - 1`, so the grid is filled item by
//! item (columns) and capacity by capacity (rows) within each column. The
//! recurrence at each cell decides whether item `j` participates:
//! `UT[M][j] = max(UT[M][j-1], utility[j] + UT[M - weight[j]][j-1])`
//! whenever the item fits, else the value carries over unchanged.
//!
//! Recovery walks `j = n..1` from `(capacity, n)`: a value that differs
//! from the previous column means item `j` is in the solution and the
//! remaining capacity shrinks by its weight. When equal-value ties leave
//! `UT[M][j] == UT[M][j-1]` even though item `j` could appear in an equally
//! optimal solution, the walk reports item `j` as unselected. The reported
//! set is still feasible and still sums to the optimal value; only its
//! identity is affected. Known limitation of the comparison-based walk,
//! kept as-is.

use crate::error::Error;
use crate::instance::Instance;
use crate::table::DpTable;

/// Optimal value, one optimal item set (ascending 1-based ids), and the
/// full grid for inspection or rendering.
#[derive(Clone, Debug)]
pub struct TabularSolution {
    pub value: u64,
    pub chosen: Vec<usize>,
    pub table: DpTable,
}

/// Exact solve with solution recovery. O(n·capacity) time and space.
///
/// # Errors
/// [`Error::TableTooLarge`] / [`Error::AllocationFailed`] when the grid
/// cannot be allocated.
pub fn solve(instance: &Instance) -> Result<TabularSolution, Error> {
    let n = instance.len();
    let capacity = instance.capacity();
    let mut table = DpTable::zeroed(n, capacity)?;
    let rows = table.rows();

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("tabular_solve", n, capacity);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    for item in instance.items() {
        let j = item.id;
        for m in 1..rows {
            let skip = table.get(m, j - 1);
            let value = if item.weight <= m as u64 {
                let remaining = table.get(m - item.weight as usize, j - 1);
                skip.max(item.utility + remaining)
            } else {
                skip
            };
            table.set(m, j, value);
        }
    }

    let value = table.get(rows - 1, n);

    let mut chosen = Vec::new();
    let mut m = rows - 1;
    for j in (1..=n).rev() {
        if table.get(m, j) != table.get(m, j - 1) {
            chosen.push(j);
            m -= instance.weights()[j - 1] as usize;
        }
    }
    chosen.reverse();

    Ok(TabularSolution {
        value,
        chosen,
        table,
    })
}
