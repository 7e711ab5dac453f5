//! Subset-sum existence by naive recursion.

use tracing::debug;

use crate::error::DpError;
use crate::items::check_count;

/// Whether some subset of the first `count` values sums exactly to `target`.
///
/// Each value is used at most once. The empty subset makes a zero target
/// always reachable. The search excludes the last value first and only tries
/// including it when that fails. No memoization: exponential in the worst case.
///
/// # Returns
/// * `Ok(bool)` - Whether a matching subset exists
/// * `Err(DpError::ItemCountOutOfRange)` - `count` exceeds `values.len()`
///
/// # Example
///
/// ```
/// use dp_solver::subset_sum_exists;
///
/// assert!(subset_sum_exists(&[3, 4, 5, 6], 4, 15).unwrap());
/// assert!(!subset_sum_exists(&[3, 4, 5, 6], 4, 1).unwrap());
/// ```
pub fn subset_sum_exists(values: &[u64], count: usize, target: u64) -> Result<bool, DpError> {
    check_count(count, values.len())?;
    let found = search(values, count, target);
    debug!(count, target, found, "subset sum searched");
    Ok(found)
}

fn search(values: &[u64], n: usize, target: u64) -> bool {
    if target == 0 {
        return true;
    }
    if n == 0 {
        return false;
    }

    let last = values[n - 1];
    if last > target {
        return search(values, n - 1, target);
    }
    search(values, n - 1, target) || search(values, n - 1, target - last)
}
