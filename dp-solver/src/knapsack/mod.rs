//! 0/1 knapsack, three ways
//!
//! All three functions implement the same recurrence over the first `n` items
//! and a remaining capacity `c`:
//!
//! ```text
//! best(0, c) = best(n, 0) = 0
//! best(n, c) = best(n-1, c)                                        if w[n-1] > c
//! best(n, c) = max(p[n-1] + best(n-1, c - w[n-1]), best(n-1, c))   otherwise
//! ```
//!
//! The `c == 0` base case wins over the item rule, so a zero-weight item is
//! only collected while some capacity is left: weights `[0, 2, 4]`, profits
//! `[1, 1, 1]` and capacity 6 give 2, not 3. All three functions agree on this.
//!
//! - [`knapsack_recursive`]: direct recursion, exponential
//! - [`knapsack_memoized`]: recursion through a [`DpCache`](crate::cache::DpCache)
//!   backed by a caller-owned [`MemoTable`]
//! - [`knapsack_tabulated`]: iterative fill of a [`DpTable`]

mod memoized;
mod recursive;
mod tabulated;

pub use memoized::{KnapsackRecurrence, MemoTable, knapsack_memoized};
pub use recursive::knapsack_recursive;
pub use tabulated::{DpTable, knapsack_tabulated};
