//! Bottom-up tabulated 0/1 knapsack.

use tracing::{debug, trace};

use crate::error::DpError;
use crate::items::ItemSet;

/// Fully built knapsack DP table.
///
/// Entry `(i, j)` is the best profit using the first `i` items with capacity
/// `j`. Row 0 and column 0 are zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    rows: usize,
    cols: usize,
    cells: Vec<u64>,
    weights: Vec<usize>,
}

impl DpTable {
    /// Fills the `(count + 1) x (capacity + 1)` table row by row.
    ///
    /// Fails with [`DpError::ItemCountOutOfRange`] or [`DpError::ProfitOverflow`]
    /// before allocating anything.
    pub fn build(items: &ItemSet, capacity: usize, count: usize) -> Result<Self, DpError> {
        items.check_prefix(count)?;

        let rows = count + 1;
        let cols = capacity + 1;
        let mut cells = vec![0u64; rows * cols];

        for i in 1..rows {
            let weight = items.weight(i - 1);
            let profit = items.profit(i - 1);
            let (done, rest) = cells.split_at_mut(i * cols);
            let prev = &done[(i - 1) * cols..];
            let row = &mut rest[..cols];

            for j in 1..cols {
                row[j] = if weight <= j {
                    prev[j].max(profit + prev[j - weight])
                } else {
                    prev[j]
                };
            }
            trace!(item = i - 1, best = row[capacity], "table row filled");
        }

        let weights = items.weights()[..count].to_vec();
        Ok(Self {
            rows,
            cols,
            cells,
            weights,
        })
    }

    /// Number of item rows, including the empty row 0.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of capacity columns, including column 0.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Best profit using the first `items` items within `capacity`.
    ///
    /// Returns `None` outside the table.
    pub fn get(&self, items: usize, capacity: usize) -> Option<u64> {
        (items < self.rows && capacity < self.cols)
            .then(|| self.cells[items * self.cols + capacity])
    }

    /// The answer: the bottom-right cell.
    pub fn max_profit(&self) -> u64 {
        self.cells[self.rows * self.cols - 1]
    }

    /// Ascending indices of one optimal selection of items.
    ///
    /// Walks back from the answer cell: whenever a row improves on the row
    /// above it, that row's item was taken.
    pub fn selected_items(&self) -> Vec<usize> {
        let mut selected = Vec::new();
        let mut capacity = self.cols - 1;

        for i in (1..self.rows).rev() {
            let here = self.cells[i * self.cols + capacity];
            let above = self.cells[(i - 1) * self.cols + capacity];
            if here != above {
                selected.push(i - 1);
                capacity -= self.weights[i - 1];
            }
        }

        selected.reverse();
        selected
    }
}

/// Maximum profit from the first `count` items within `capacity`, tabulated bottom-up.
///
/// Builds the whole [`DpTable`] iteratively and reads the bottom-right cell.
/// O(count · capacity) time and space, no recursion.
///
/// # Example
///
/// ```
/// use dp_solver::{ItemSet, knapsack_tabulated};
///
/// let items = ItemSet::new(&[2, 4, 6, 7], &[12, 55, 8, 9]).unwrap();
/// assert_eq!(knapsack_tabulated(&items, 7, 4).unwrap(), 67);
/// ```
pub fn knapsack_tabulated(items: &ItemSet, capacity: usize, count: usize) -> Result<u64, DpError> {
    let best = DpTable::build(items, capacity, count)?.max_profit();
    debug!(capacity, count, best, "tabulated knapsack solved");
    Ok(best)
}
