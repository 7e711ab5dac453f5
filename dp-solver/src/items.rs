//! Validated problem inputs

use crate::error::DpError;

/// An ordered set of knapsack items.
///
/// Each item has an integer weight and an integer profit. Items are indexed
/// `0..len()` in the order they were supplied and never change afterwards.
///
/// # Example
///
/// ```
/// use dp_solver::ItemSet;
///
/// let items = ItemSet::new(&[2, 4], &[12, 55]).unwrap();
/// assert_eq!(items.len(), 2);
/// assert_eq!(items.weight(1), 4);
/// assert_eq!(items.profit(0), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemSet {
    weights: Vec<usize>,
    profits: Vec<u64>,
}

impl ItemSet {
    /// Builds an item set from parallel weight and profit slices.
    ///
    /// # Returns
    /// * `Ok(ItemSet)` - Both slices had the same length
    /// * `Err(DpError::LengthMismatch)` - The slices differ in length
    pub fn new(weights: &[usize], profits: &[u64]) -> Result<Self, DpError> {
        if weights.len() != profits.len() {
            return Err(DpError::LengthMismatch {
                weights: weights.len(),
                profits: profits.len(),
            });
        }
        Ok(Self {
            weights: weights.to_vec(),
            profits: profits.to_vec(),
        })
    }

    /// Builds an item set from `(weight, profit)` pairs.
    pub fn from_pairs<T>(pairs: T) -> Self
    where
        T: IntoIterator<Item = (usize, u64)>,
    {
        let (weights, profits) = pairs.into_iter().unzip();
        Self { weights, profits }
    }

    /// Number of items in the set.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the set holds no items.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weight of item `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn weight(&self, index: usize) -> usize {
        self.weights[index]
    }

    /// Profit of item `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn profit(&self, index: usize) -> u64 {
        self.profits[index]
    }

    /// All weights, in item order.
    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    /// All profits, in item order.
    pub fn profits(&self) -> &[u64] {
        &self.profits
    }

    /// Checks that the first `count` items exist.
    pub fn check_count(&self, count: usize) -> Result<(), DpError> {
        check_count(count, self.len())
    }

    /// Checks that the first `count` items exist and that their profits sum
    /// without overflow.
    ///
    /// Any packing's profit is bounded by that sum, so solvers that pass this
    /// check can add profits freely.
    pub fn check_prefix(&self, count: usize) -> Result<(), DpError> {
        self.check_count(count)?;
        self.profits[..count]
            .iter()
            .try_fold(0u64, |total, &profit| total.checked_add(profit))
            .map(|_| ())
            .ok_or(DpError::ProfitOverflow { count })
    }
}

pub(crate) fn check_count(count: usize, len: usize) -> Result<(), DpError> {
    if count > len {
        Err(DpError::ItemCountOutOfRange { count, len })
    } else {
        Ok(())
    }
}

/// A complete knapsack instance: items, capacity and how many items to consider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackProblem {
    items: ItemSet,
    capacity: usize,
    count: usize,
}

impl KnapsackProblem {
    /// Creates a problem over the first `count` items of `items`.
    ///
    /// Fails with [`DpError::ItemCountOutOfRange`] when `count > items.len()`.
    pub fn new(items: ItemSet, capacity: usize, count: usize) -> Result<Self, DpError> {
        items.check_count(count)?;
        Ok(Self {
            items,
            capacity,
            count,
        })
    }

    /// Creates a problem over every item of `items`.
    pub fn with_all_items(items: ItemSet, capacity: usize) -> Self {
        let count = items.len();
        Self {
            items,
            capacity,
            count,
        }
    }

    pub fn items(&self) -> &ItemSet {
        &self.items
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many leading items the problem considers.
    pub fn count(&self) -> usize {
        self.count
    }
}
