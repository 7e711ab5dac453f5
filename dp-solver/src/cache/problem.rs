//! Trait-based DP problem definition.

/// A dynamic programming recurrence.
///
/// Implementors describe, for every state, which other states it depends on
/// and how to combine their resolved values. [`DpCache`](super::DpCache)
/// drives the recursion and guarantees each state is computed at most once.
///
/// # Type Parameters
///
/// - `I`: State (index) type
/// - `K`: Value type stored in the cache
///
/// # Example
///
/// ```rust
/// use dp_solver::cache::{DpCache, DpProblem, Vec2DBackend};
///
/// /// Number of monotone lattice paths from (0, 0) to a cell.
/// struct GridPaths;
///
/// impl DpProblem<(usize, usize), u64> for GridPaths {
///     fn deps(&self, &(r, c): &(usize, usize)) -> Vec<(usize, usize)> {
///         match (r, c) {
///             (0, _) | (_, 0) => vec![],
///             _ => vec![(r - 1, c), (r, c - 1)],
///         }
///     }
///
///     fn compute(&self, _cell: &(usize, usize), deps: Vec<u64>) -> u64 {
///         if deps.is_empty() { 1 } else { deps.iter().sum() }
///     }
/// }
///
/// let cache = DpCache::with_problem(Vec2DBackend::new(5, 5), GridPaths);
/// assert_eq!(cache.get(&(4, 4)).unwrap(), 70);
/// ```
pub trait DpProblem<I, K> {
    /// Returns the states this state depends on.
    ///
    /// For base cases, return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Computes the value for `index` from its resolved dependencies.
    ///
    /// `deps` holds one value per state returned by [`deps`](Self::deps), in
    /// the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}
