//! Knapsack strategies behind a common trait

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::error::DpError;
use crate::items::KnapsackProblem;
use crate::knapsack::{MemoTable, knapsack_memoized, knapsack_recursive, knapsack_tabulated};

/// A way of solving a [`KnapsackProblem`].
///
/// # Example
///
/// ```
/// use dp_solver::{ItemSet, KnapsackProblem, KnapsackSolver, Tabulated};
///
/// let items = ItemSet::new(&[2, 4, 6, 7], &[12, 55, 8, 9]).unwrap();
/// let problem = KnapsackProblem::with_all_items(items, 7);
/// assert_eq!(Tabulated::solve(&problem).unwrap(), 67);
/// assert_eq!(Tabulated::LABEL, "Tabulation Method");
/// ```
pub trait KnapsackSolver {
    /// Label printed in front of this strategy's answer
    const LABEL: &'static str;

    /// Solve the problem, returning the maximum profit
    fn solve(problem: &KnapsackProblem) -> Result<u64, DpError>;
}

/// Result from running a strategy, including timing information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    /// The maximum profit found
    pub answer: u64,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

pub trait KnapsackSolverExt: KnapsackSolver {
    /// Solve with wall-clock timing
    fn solve_timed(problem: &KnapsackProblem) -> Result<SolveResult, DpError> {
        let solve_start = Utc::now();
        let answer = Self::solve(problem)?;
        let solve_end = Utc::now();

        let result = SolveResult {
            answer,
            solve_start,
            solve_end,
        };
        debug!(
            strategy = Self::LABEL,
            answer,
            micros = result.duration().num_microseconds(),
            "strategy finished"
        );
        Ok(result)
    }
}

impl<T: KnapsackSolver + ?Sized> KnapsackSolverExt for T {}

/// Naive recursion
pub struct Recursive;

impl KnapsackSolver for Recursive {
    const LABEL: &'static str = "Recursive solution";

    fn solve(problem: &KnapsackProblem) -> Result<u64, DpError> {
        knapsack_recursive(problem.items(), problem.capacity(), problem.count())
    }
}

/// Top-down memoization with a fresh memo table per call
pub struct Memoized;

impl KnapsackSolver for Memoized {
    const LABEL: &'static str = "Memoized solution";

    fn solve(problem: &KnapsackProblem) -> Result<u64, DpError> {
        let mut memo = MemoTable::for_problem(problem.count(), problem.capacity());
        knapsack_memoized(
            problem.items(),
            problem.capacity(),
            problem.count(),
            &mut memo,
        )
    }
}

/// Bottom-up tabulation
pub struct Tabulated;

impl KnapsackSolver for Tabulated {
    const LABEL: &'static str = "Tabulation Method";

    fn solve(problem: &KnapsackProblem) -> Result<u64, DpError> {
        knapsack_tabulated(problem.items(), problem.capacity(), problem.count())
    }
}
