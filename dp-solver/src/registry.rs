//! Ordered registry of knapsack strategies

use crate::error::{DpError, RegistrationError};
use crate::items::KnapsackProblem;
use crate::solver::{KnapsackSolver, KnapsackSolverExt, Memoized, Recursive, SolveResult, Tabulated};

/// Type-erased entry point of a registered strategy
pub type SolveFn = fn(&KnapsackProblem) -> Result<SolveResult, DpError>;

#[derive(Clone, Copy)]
struct StrategyEntry {
    label: &'static str,
    solve: SolveFn,
}

impl StrategyEntry {
    fn of<S: KnapsackSolver>() -> Self {
        Self {
            label: S::LABEL,
            solve: S::solve_timed,
        }
    }
}

/// Outcome of one strategy inside [`SolverRegistry::solve_all`]
#[derive(Debug, Clone)]
pub struct StrategyOutcome {
    pub label: &'static str,
    pub result: Result<SolveResult, DpError>,
}

/// Builder for constructing a SolverRegistry with fluent API
///
/// Strategies keep the order they were registered in. Registering two
/// strategies with the same label is rejected.
///
/// # Example
///
/// ```
/// use dp_solver::{Memoized, Recursive, RegistryBuilder};
///
/// let registry = RegistryBuilder::new()
///     .register::<Recursive>()
///     .unwrap()
///     .register::<Memoized>()
///     .unwrap()
///     .build();
/// assert_eq!(registry.labels(), vec!["Recursive solution", "Memoized solution"]);
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<StrategyEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register strategy `S` after the ones already registered
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the strategy registered, ready for chaining
    /// * `Err(RegistrationError)` - A strategy with the same label already exists
    pub fn register<S: KnapsackSolver>(mut self) -> Result<Self, RegistrationError> {
        if self.entries.iter().any(|entry| entry.label == S::LABEL) {
            return Err(RegistrationError::Duplicate(S::LABEL));
        }
        self.entries.push(StrategyEntry::of::<S>());
        Ok(self)
    }

    /// Build the immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

/// Immutable, ordered set of knapsack strategies
pub struct SolverRegistry {
    entries: Vec<StrategyEntry>,
}

impl SolverRegistry {
    /// Recursive, memoized and tabulated strategies, in that order
    pub fn with_default_strategies() -> Self {
        Self {
            entries: vec![
                StrategyEntry::of::<Recursive>(),
                StrategyEntry::of::<Memoized>(),
                StrategyEntry::of::<Tabulated>(),
            ],
        }
    }

    /// Labels of the registered strategies, in registration order
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.label).collect()
    }

    /// Number of registered strategies
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no strategy is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every strategy once on `problem`, in registration order
    pub fn solve_all(&self, problem: &KnapsackProblem) -> Vec<StrategyOutcome> {
        self.entries
            .iter()
            .map(|entry| StrategyOutcome {
                label: entry.label,
                result: (entry.solve)(problem),
            })
            .collect()
    }

    /// The answer every strategy agreed on
    ///
    /// # Returns
    /// * `Ok(u64)` - All outcomes succeeded with the same answer
    /// * `Err(DpError)` - The first failure, or [`DpError::Disagreement`] when
    ///   answers differ or there were no outcomes
    pub fn agreed_answer(outcomes: &[StrategyOutcome]) -> Result<u64, DpError> {
        let answers = outcomes
            .iter()
            .map(|outcome| outcome.result.as_ref().map(|r| (outcome.label, r.answer)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(Clone::clone)?;

        let Some(&(_, first)) = answers.first() else {
            return Err(DpError::Disagreement("no strategies ran".to_string()));
        };
        if answers.iter().all(|&(_, answer)| answer == first) {
            return Ok(first);
        }

        let summary = answers
            .iter()
            .map(|(label, answer)| format!("{label}={answer}"))
            .collect::<Vec<_>>()
            .join(", ");
        Err(DpError::Disagreement(summary))
    }
}
