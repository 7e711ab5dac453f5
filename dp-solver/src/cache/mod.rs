//! Memoization cache for dynamic programming recurrences
//!
//! A recurrence is described by a [`DpProblem`]: the states each state depends
//! on, and how their values combine. [`DpCache`] resolves the dependency graph
//! lazily and stores each result in a [`Backend`] so that it is computed once.
//!
//! # Backend Types
//!
//! - [`Vec2DBackend`]: runtime-sized 2D grid for `(row, col)` states, empty
//!   cells are `None`
//! - [`HashMapBackend`]: grows on demand, any `Hash + Eq` state type
//! - `&mut B` for any backend `B`: lets the caller own the storage
//!
//! # Warning: Cycle Behavior
//!
//! **The cache does NOT detect cycles.** Dependencies must form a DAG.
//!
//! # Example
//!
//! ```rust
//! use dp_solver::cache::{DpCache, DpProblem, Vec2DBackend};
//!
//! /// Binomial coefficients via Pascal's rule.
//! struct Binomial;
//!
//! impl DpProblem<(usize, usize), u64> for Binomial {
//!     fn deps(&self, &(n, k): &(usize, usize)) -> Vec<(usize, usize)> {
//!         if k == 0 || k == n { vec![] } else { vec![(n - 1, k - 1), (n - 1, k)] }
//!     }
//!     fn compute(&self, _state: &(usize, usize), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let mut table = Vec2DBackend::new(11, 11);
//! let cache = DpCache::with_problem(&mut table, Binomial);
//! assert_eq!(cache.get(&(10, 5)).unwrap(), 252);
//! drop(cache);
//! assert_eq!(table.cell(9, 4), Some(&126));
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, Vec2DBackend};
pub use cache::DpCache;
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
