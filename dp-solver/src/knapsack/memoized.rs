//! Top-down memoized 0/1 knapsack.

use tracing::debug;

use crate::cache::{DpCache, DpProblem, Vec2DBackend};
use crate::error::DpError;
use crate::items::ItemSet;

/// Memo table for [`knapsack_memoized`].
///
/// Cell `(n, c)` holds the best profit from the first `n` items with capacity
/// `c`, or `None` while that state is unsolved.
pub type MemoTable = Vec2DBackend<u64>;

impl MemoTable {
    /// An empty table large enough for `count` items and `capacity`.
    pub fn for_problem(count: usize, capacity: usize) -> Self {
        Self::new(count + 1, capacity + 1)
    }
}

/// The knapsack recurrence over `(items remaining, remaining capacity)` states.
pub struct KnapsackRecurrence<'a> {
    items: &'a ItemSet,
}

impl<'a> KnapsackRecurrence<'a> {
    pub fn new(items: &'a ItemSet) -> Self {
        Self { items }
    }
}

impl DpProblem<(usize, usize), u64> for KnapsackRecurrence<'_> {
    fn deps(&self, &(n, capacity): &(usize, usize)) -> Vec<(usize, usize)> {
        if n == 0 || capacity == 0 {
            return vec![];
        }
        let weight = self.items.weight(n - 1);
        if weight > capacity {
            vec![(n - 1, capacity)]
        } else {
            vec![(n - 1, capacity - weight), (n - 1, capacity)]
        }
    }

    fn compute(&self, &(n, capacity): &(usize, usize), deps: Vec<u64>) -> u64 {
        if n == 0 || capacity == 0 {
            return 0;
        }
        if self.items.weight(n - 1) > capacity {
            deps[0]
        } else {
            (self.items.profit(n - 1) + deps[0]).max(deps[1])
        }
    }
}

/// Maximum profit from the first `count` items within `capacity`, memoized top-down.
///
/// Same recurrence as [`knapsack_recursive`](crate::knapsack_recursive), but
/// every solved `(n, c)` state is written to `memo` and reused, so each state
/// is computed at most once: O(count · capacity).
///
/// `memo` belongs to the caller and should start empty for a new instance;
/// after the call it holds every state the recursion visited.
///
/// # Returns
/// * `Ok(u64)` - The maximum achievable profit
/// * `Err(DpError::ItemCountOutOfRange)` - `count` exceeds the number of items
/// * `Err(DpError::ProfitOverflow)` - the considered profits do not sum within `u64`
/// * `Err(DpError::MemoTooSmall)` - `memo` is smaller than `(count + 1) x (capacity + 1)`
///
/// # Example
///
/// ```
/// use dp_solver::{ItemSet, MemoTable, knapsack_memoized};
///
/// let items = ItemSet::new(&[2, 4, 6, 7], &[12, 55, 8, 9]).unwrap();
/// let mut memo = MemoTable::for_problem(4, 7);
/// assert_eq!(knapsack_memoized(&items, 7, 4, &mut memo).unwrap(), 67);
/// assert_eq!(memo.cell(4, 7), Some(&67));
/// ```
pub fn knapsack_memoized(
    items: &ItemSet,
    capacity: usize,
    count: usize,
    memo: &mut MemoTable,
) -> Result<u64, DpError> {
    items.check_prefix(count)?;
    if memo.rows() <= count || memo.cols() <= capacity {
        return Err(DpError::MemoTooSmall {
            rows: memo.rows(),
            cols: memo.cols(),
            needed_rows: count + 1,
            needed_cols: capacity + 1,
        });
    }

    let cache = DpCache::with_problem(&mut *memo, KnapsackRecurrence::new(items));
    let best = cache.get(&(count, capacity))?;
    drop(cache);

    debug!(
        capacity,
        count,
        best,
        states = memo.populated_count(),
        "memoized knapsack solved"
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::knapsack_recursive;

    fn sample() -> ItemSet {
        ItemSet::new(&[2, 4, 6, 7], &[12, 55, 8, 9]).unwrap()
    }

    #[test]
    fn test_sample_instance() {
        let mut memo = MemoTable::for_problem(4, 7);
        assert_eq!(knapsack_memoized(&sample(), 7, 4, &mut memo).unwrap(), 67);
        assert_eq!(memo.cell(4, 7), Some(&67));
    }

    #[test]
    fn test_base_cases() {
        let mut memo = MemoTable::for_problem(4, 0);
        assert_eq!(knapsack_memoized(&sample(), 0, 4, &mut memo).unwrap(), 0);

        let mut memo = MemoTable::for_problem(0, 9);
        assert_eq!(knapsack_memoized(&sample(), 9, 0, &mut memo).unwrap(), 0);
    }

    #[test]
    fn test_oversized_memo_is_fine() {
        let mut memo = MemoTable::new(10, 20);
        assert_eq!(knapsack_memoized(&sample(), 7, 4, &mut memo).unwrap(), 67);
    }

    #[test]
    fn test_memo_too_small() {
        let mut memo = MemoTable::new(5, 7);
        assert_eq!(
            knapsack_memoized(&sample(), 7, 4, &mut memo),
            Err(DpError::MemoTooSmall {
                rows: 5,
                cols: 7,
                needed_rows: 5,
                needed_cols: 8
            })
        );
        assert_eq!(memo.populated_count(), 0);
    }

    #[test]
    fn test_zero_weight_item_not_taken_at_zero_capacity() {
        let items = ItemSet::new(&[0, 2, 4], &[1, 1, 1]).unwrap();
        let mut memo = MemoTable::for_problem(3, 6);
        assert_eq!(knapsack_memoized(&items, 6, 3, &mut memo).unwrap(), 2);
    }

    #[test]
    fn test_profit_overflow_rejected() {
        let items = ItemSet::from_pairs([(1, u64::MAX), (1, 1)]);
        let mut memo = MemoTable::for_problem(2, 2);
        assert_eq!(
            knapsack_memoized(&items, 2, 2, &mut memo),
            Err(DpError::ProfitOverflow { count: 2 })
        );
        assert_eq!(memo.populated_count(), 0);
    }

    #[test]
    fn test_count_past_end() {
        let mut memo = MemoTable::for_problem(5, 7);
        assert_eq!(
            knapsack_memoized(&sample(), 7, 5, &mut memo),
            Err(DpError::ItemCountOutOfRange { count: 5, len: 4 })
        );
    }

    #[test]
    fn test_reused_memo_answers_sub_instances() {
        let items = sample();
        let mut memo = MemoTable::for_problem(4, 7);
        knapsack_memoized(&items, 7, 4, &mut memo).unwrap();

        // (3, 7) was visited on the way and stays valid for the same items
        let cached = memo.cell(3, 7).copied();
        assert_eq!(cached, Some(knapsack_recursive(&items, 7, 3).unwrap()));
        assert_eq!(knapsack_memoized(&items, 7, 3, &mut memo).unwrap(), 12 + 55);
    }

    #[test]
    fn test_only_reachable_states_are_filled() {
        let mut memo = MemoTable::for_problem(4, 7);
        knapsack_memoized(&sample(), 7, 4, &mut memo).unwrap();

        // Item 3 (weight 7) fits: states (3, 0) and (3, 7) are reachable, (3, 3) is not
        assert_eq!(memo.cell(3, 0), Some(&0));
        assert!(memo.cell(3, 7).is_some());
        assert_eq!(memo.cell(3, 3), None);
    }
}
