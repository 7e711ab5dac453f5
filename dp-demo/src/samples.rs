//! Hardcoded example inputs

/// Item weights for the knapsack example
pub const WEIGHTS: [usize; 4] = [2, 4, 6, 7];
/// Item profits, parallel to [`WEIGHTS`]
pub const PROFITS: [u64; 4] = [12, 55, 8, 9];
/// Knapsack capacity
pub const CAPACITY: usize = 7;

/// Values for the subset-sum example
pub const SUBSET_VALUES: [u64; 4] = [3, 4, 5, 6];
/// Target sum for the subset-sum example
pub const SUBSET_TARGET: u64 = 15;
