//! The full DP grid built by the tabular solver.
//!
//! Entry `UT[M][j]` is the best utility achievable with capacity `M` using
//! only items `1..=j`. Row 0 and column 0 stay zero, and values are
//! monotonically non-decreasing along both axes. The grid is one flat
//! row-major buffer, not a vector of rows.

use crate::error::Error;
use crate::utils::{table_dims, try_zeroed};

/// Flat `(capacity + 1) x (n + 1)` grid of utility values.
#[derive(Clone, Debug)]
pub struct DpTable {
    cells: Vec<u64>,
    rows: usize,
    cols: usize,
}

impl DpTable {
    pub(crate) fn zeroed(n: usize, capacity: u64) -> Result<Self, Error> {
        let (rows, cols) = table_dims(n, capacity)?;
        let cells = try_zeroed(rows * cols)?;
        Ok(Self { cells, rows, cols })
    }

    /// Number of capacity rows (capacity + 1).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of item columns (n + 1).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at capacity row `m`, item column `j`.
    #[inline]
    pub fn get(&self, m: usize, j: usize) -> u64 {
        self.cells[m * self.cols + j]
    }

    #[inline]
    pub(crate) fn set(&mut self, m: usize, j: usize, value: u64) {
        self.cells[m * self.cols + j] = value;
    }

    /// Render the grid as a fixed-width text block with `M \ j` headers.
    ///
    /// Debugging aid only; the layout is not a stable machine-readable
    /// format.
    pub fn render(&self) -> String {
        let cell_w = self
            .cells
            .iter()
            .map(|&v| digits(v))
            .max()
            .unwrap_or(1)
            .max(digits(self.cols as u64 - 1));
        let label_w = digits(self.rows as u64 - 1);

        let mut header = format!("{:>label_w$} \\ j |", "M");
        for j in 0..self.cols {
            header.push_str(&format!(" {j:>cell_w$}"));
        }

        let mut out = String::with_capacity((self.rows + 2) * (header.len() + 1));
        out.push_str(&header);
        out.push('\n');
        out.push_str(&"-".repeat(header.len()));
        out.push('\n');
        for m in 0..self.rows {
            out.push_str(&format!("{m:>width$} |", width = label_w + 4));
            for j in 0..self.cols {
                let v = self.get(m, j);
                out.push_str(&format!(" {v:>cell_w$}"));
            }
            out.push('\n');
        }
        out
    }
}

fn digits(v: u64) -> usize {
    if v == 0 {
        1
    } else {
        v.ilog10() as usize + 1
    }
}
