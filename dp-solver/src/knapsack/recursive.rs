//! Naive recursive 0/1 knapsack.

use tracing::debug;

use crate::error::DpError;
use crate::items::ItemSet;

/// Maximum profit from the first `count` items within `capacity`, by plain recursion.
///
/// Each call either skips the last item under consideration or, when it fits,
/// takes the better of skipping it and including it. Nothing is cached, so
/// overlapping subproblems are solved again and again: exponential time in the
/// worst case.
///
/// # Returns
/// * `Ok(u64)` - The maximum achievable profit
/// * `Err(DpError::ItemCountOutOfRange)` - `count` exceeds the number of items
/// * `Err(DpError::ProfitOverflow)` - the considered profits do not sum within `u64`
///
/// # Example
///
/// ```
/// use dp_solver::{ItemSet, knapsack_recursive};
///
/// let items = ItemSet::new(&[2, 4, 6, 7], &[12, 55, 8, 9]).unwrap();
/// assert_eq!(knapsack_recursive(&items, 7, 4).unwrap(), 67);
/// ```
pub fn knapsack_recursive(items: &ItemSet, capacity: usize, count: usize) -> Result<u64, DpError> {
    items.check_prefix(count)?;
    let best = solve(items, capacity, count);
    debug!(capacity, count, best, "recursive knapsack solved");
    Ok(best)
}

fn solve(items: &ItemSet, capacity: usize, n: usize) -> u64 {
    if capacity == 0 || n == 0 {
        return 0;
    }

    let weight = items.weight(n - 1);
    if weight > capacity {
        return solve(items, capacity, n - 1);
    }

    let included = items.profit(n - 1) + solve(items, capacity - weight, n - 1);
    let excluded = solve(items, capacity, n - 1);
    included.max(excluded)
}
