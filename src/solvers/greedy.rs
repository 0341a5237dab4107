//! Density-ranked greedy approximation.
//!
//! Ranks items by utility per unit of weight and admits them in that order
//! whenever they still fit; an item that does not fit is skipped for good,
//! with no backtracking and no partial admission. No "best single item"
//! fallback is applied either, so the result carries no worst-case
//! approximation bound; the harness measures the achieved quality
//! empirically instead.
//!
//! O(n log n) time, dominated by the sort.

use crate::instance::Instance;

/// Achieved value and admitted item ids, ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GreedySolution {
    pub value: u64,
    pub chosen: Vec<usize>,
}

struct Ranked {
    id: usize,
    weight: u64,
    utility: u64,
    density: f64,
}

/// Approximate solve. The returned value never exceeds the optimum.
pub fn solve(instance: &Instance) -> GreedySolution {
    let mut ranked: Vec<Ranked> = instance
        .items()
        .map(|item| {
            // Validated instances carry no zero weights; the 0.0 default
            // keeps the ranking total for raw inputs anyway.
            let density = if item.weight == 0 {
                0.0
            } else {
                item.utility as f64 / item.weight as f64
            };
            Ranked {
                id: item.id,
                weight: item.weight,
                utility: item.utility,
                density,
            }
        })
        .collect();

    // Highest density first; ties resolve to the earlier original id.
    ranked.sort_by(|a, b| b.density.total_cmp(&a.density).then(a.id.cmp(&b.id)));

    let capacity = instance.capacity();
    let mut used = 0u64;
    let mut value = 0u64;
    let mut chosen = Vec::new();
    for item in &ranked {
        match used.checked_add(item.weight) {
            Some(total) if total <= capacity => {
                used = total;
                value += item.utility;
                chosen.push(item.id);
            }
            _ => {}
        }
    }
    chosen.sort_unstable();

    GreedySolution { value, chosen }
}
