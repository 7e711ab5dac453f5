//! Knapsack and Subset-Sum Solver Library
//!
//! Textbook dynamic programming over small integer inputs: the 0/1 knapsack
//! problem solved three ways and a subset-sum existence check.
//!
//! # Overview
//!
//! This library provides:
//! - [`knapsack_recursive`]: plain recursion over the last item
//! - [`knapsack_memoized`]: the same recurrence memoized in a caller-owned [`MemoTable`]
//! - [`knapsack_tabulated`]: bottom-up fill of a [`DpTable`], which can also
//!   report which items an optimal packing uses
//! - [`subset_sum_exists`]: recursive subset-sum search
//! - A strategy trait and an ordered registry to run every knapsack strategy
//!   on one [`KnapsackProblem`] and check that they agree
//!
//! Contract violations (mismatched inputs, an item count past the end, a memo
//! table that is too small) are reported as [`DpError`] before any work starts.
//!
//! # Quick Example
//!
//! ```
//! use dp_solver::{ItemSet, MemoTable, knapsack_memoized, knapsack_recursive, knapsack_tabulated};
//!
//! let items = ItemSet::new(&[2, 4, 6, 7], &[12, 55, 8, 9]).unwrap();
//! let (capacity, count) = (7, items.len());
//!
//! let mut memo = MemoTable::for_problem(count, capacity);
//! assert_eq!(knapsack_recursive(&items, capacity, count).unwrap(), 67);
//! assert_eq!(knapsack_memoized(&items, capacity, count, &mut memo).unwrap(), 67);
//! assert_eq!(knapsack_tabulated(&items, capacity, count).unwrap(), 67);
//! ```
//!
//! # Running every strategy
//!
//! ```
//! use dp_solver::{ItemSet, KnapsackProblem, SolverRegistry};
//!
//! let items = ItemSet::new(&[2, 4, 6, 7], &[12, 55, 8, 9]).unwrap();
//! let problem = KnapsackProblem::with_all_items(items, 7);
//!
//! let registry = SolverRegistry::with_default_strategies();
//! let outcomes = registry.solve_all(&problem);
//! assert_eq!(SolverRegistry::agreed_answer(&outcomes).unwrap(), 67);
//! ```

pub mod cache;
mod error;
mod items;
mod knapsack;
mod registry;
mod solver;
mod subset_sum;

// Re-export public API
pub use error::{DpError, RegistrationError};
pub use items::{ItemSet, KnapsackProblem};
pub use knapsack::{
    DpTable, KnapsackRecurrence, MemoTable, knapsack_memoized, knapsack_recursive,
    knapsack_tabulated,
};
pub use registry::{RegistryBuilder, SolveFn, SolverRegistry, StrategyOutcome};
pub use solver::{KnapsackSolver, KnapsackSolverExt, Memoized, Recursive, SolveResult, Tabulated};
pub use subset_sum::subset_sum_exists;
