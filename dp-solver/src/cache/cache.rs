//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;
use crate::error::DpError;

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// `DpCache` memoizes a recursive computation described by a [`DpProblem`].
/// Dependencies are resolved depth-first and each state is computed exactly
/// once; later requests for the same state are answered from the backend.
///
/// # Type Parameters
///
/// - `I`: State type (must implement `Clone`)
/// - `K`: Value type (must implement `Clone`)
/// - `B`: Backend storage type (must implement `Backend<I, K>`)
/// - `P`: Problem type (must implement `DpProblem<I, K>`)
///
/// # Warning: No Cycle Detection
///
/// Dependencies must form a DAG. A cycle recurses until the stack overflows.
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a new DpCache with the given backend and problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for `index`, computing it if necessary.
    ///
    /// # Returns
    /// * `Ok(K)` - The cached or freshly computed value
    /// * `Err(DpError)` - The backend could not store this state or one of its dependencies
    pub fn get(&self, index: &I) -> Result<K, DpError> {
        // Fast path: already computed
        if let Some(value) = self.backend.borrow().get(index) {
            return Ok(value.clone());
        }

        // Resolve dependencies with no borrow held
        let dep_values = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect::<Result<Vec<K>, DpError>>()?;

        let mut backend = self.backend.borrow_mut();
        let value = backend
            .get_or_insert(index.clone(), || self.problem.compute(index, dep_values))?
            .clone();
        Ok(value)
    }

    /// Consumes the cache and hands back its storage.
    pub fn into_backend(self) -> B {
        self.backend.into_inner()
    }
}
