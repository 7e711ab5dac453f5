//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::error::DpError;

/// Lattice paths problem: every cell on the top row or left column has one path
struct GridPaths;

impl DpProblem<(usize, usize), u64> for GridPaths {
    fn deps(&self, &(r, c): &(usize, usize)) -> Vec<(usize, usize)> {
        match (r, c) {
            (0, _) | (_, 0) => vec![],
            _ => vec![(r - 1, c), (r, c - 1)],
        }
    }

    fn compute(&self, _cell: &(usize, usize), deps: Vec<u64>) -> u64 {
        if deps.is_empty() { 1 } else { deps.iter().sum() }
    }
}

#[test]
fn test_grid_paths_known_values() {
    let cache = DpCache::with_problem(Vec2DBackend::new(6, 6), GridPaths);

    assert_eq!(cache.get(&(0, 0)).unwrap(), 1);
    assert_eq!(cache.get(&(1, 1)).unwrap(), 2);
    assert_eq!(cache.get(&(2, 2)).unwrap(), 6);
    assert_eq!(cache.get(&(4, 4)).unwrap(), 70); // C(8,4)
    assert_eq!(cache.get(&(5, 5)).unwrap(), 252); // C(10,5)
}

#[test]
fn test_diamond_dependency_memoization() {
    // (1,1) depends on (0,1) and (1,0), both depend on (0,0)
    // Verify (0,0) is computed only once
    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<(usize, usize), i32> for Diamond {
        fn deps(&self, cell: &(usize, usize)) -> Vec<(usize, usize)> {
            match *cell {
                (1, 1) => vec![(0, 1), (1, 0)],
                (0, 1) | (1, 0) => vec![(0, 0)],
                _ => vec![],
            }
        }

        fn compute(&self, cell: &(usize, usize), deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *cell {
                (1, 1) => deps[0] + deps[1],
                (0, 1) => deps[0] * 2,
                (1, 0) => deps[0] * 3,
                _ => 10,
            }
        }
    }

    let compute_count = Rc::new(Cell::new(0));
    let cache = DpCache::with_problem(
        Vec2DBackend::new(2, 2),
        Diamond {
            count: compute_count.clone(),
        },
    );

    // D=10, B=20, C=30, A=50
    assert_eq!(cache.get(&(1, 1)).unwrap(), 50);
    assert_eq!(compute_count.get(), 4);

    // Asking again must not recompute
    assert_eq!(cache.get(&(1, 1)).unwrap(), 50);
    assert_eq!(compute_count.get(), 4);
}

#[test]
fn test_vec2d_backend_get_or_insert() {
    let mut backend: Vec2DBackend<i32> = Vec2DBackend::new(3, 4);

    let value = backend.get_or_insert((1, 2), || 42).unwrap();
    assert_eq!(*value, 42);

    // Same cell again - should keep the first value, not recompute
    let value = backend.get_or_insert((1, 2), || 999).unwrap();
    assert_eq!(*value, 42);

    assert_eq!(backend.get(&(1, 2)), Some(&42));
    assert_eq!(backend.get(&(2, 3)), None);

    // Another cell - should not affect the first
    let value = backend.get_or_insert((2, 3), || 100).unwrap();
    assert_eq!(*value, 100);
    assert_eq!(backend.cell(1, 2), Some(&42));
    assert_eq!(backend.populated_count(), 2);
}

#[test]
fn test_vec2d_backend_out_of_bounds() {
    let mut backend: Vec2DBackend<i32> = Vec2DBackend::new(2, 3);

    assert_eq!(backend.get(&(2, 0)), None);
    assert_eq!(backend.get(&(0, 3)), None);

    let err = backend.get_or_insert((2, 0), || 1).unwrap_err();
    assert_eq!(
        err,
        DpError::IndexOutOfBounds {
            row: 2,
            col: 0,
            rows: 2,
            cols: 3
        }
    );
    assert_eq!(backend.populated_count(), 0);
}

#[test]
fn test_cache_propagates_out_of_bounds_dependency() {
    // (3, 3) reaches (0, 3) before anything else, which is outside a 3x3 grid
    let cache = DpCache::with_problem(Vec2DBackend::new(3, 3), GridPaths);
    assert!(matches!(
        cache.get(&(3, 3)),
        Err(DpError::IndexOutOfBounds { row: 0, col: 3, .. })
    ));
    assert_eq!(cache.get(&(2, 2)).unwrap(), 6);
}

#[test]
fn test_populated_iterates_row_major() {
    let mut backend: Vec2DBackend<u8> = Vec2DBackend::new(2, 2);
    backend.get_or_insert((1, 0), || 3).unwrap();
    backend.get_or_insert((0, 1), || 7).unwrap();

    let cells: Vec<_> = backend.populated().map(|(pos, v)| (pos, *v)).collect();
    assert_eq!(cells, vec![((0, 1), 7), ((1, 0), 3)]);

    backend.clear();
    assert_eq!(backend.populated_count(), 0);
    assert_eq!(backend.rows(), 2);
    assert_eq!(backend.cols(), 2);
}

#[test]
fn test_borrowed_backend_keeps_results() {
    let mut table = Vec2DBackend::new(4, 4);
    {
        let cache = DpCache::with_problem(&mut table, GridPaths);
        assert_eq!(cache.get(&(3, 3)).unwrap(), 20);
    }

    // Every state on the way to (3, 3) stays behind in the caller's table
    assert_eq!(table.cell(3, 3), Some(&20));
    assert_eq!(table.cell(2, 2), Some(&6));
    assert_eq!(table.cell(0, 3), Some(&1));
}

#[test]
fn test_into_backend_returns_storage() {
    let cache = DpCache::with_problem(Vec2DBackend::new(3, 3), GridPaths);
    cache.get(&(1, 2)).unwrap();

    let backend = cache.into_backend();
    assert_eq!(backend.cell(1, 2), Some(&3));
    assert_eq!(backend.cell(2, 2), None);
}

#[test]
fn test_hashmap_backend_get_or_insert() {
    let mut backend: HashMapBackend<String, i32> = HashMapBackend::new();

    let value = backend.get_or_insert("key1".to_string(), || 42).unwrap();
    assert_eq!(*value, 42);

    // Same key again - should return cached value, not recompute
    let value = backend.get_or_insert("key1".to_string(), || 999).unwrap();
    assert_eq!(*value, 42);

    assert_eq!(backend.get(&"key1".to_string()), Some(&42));
    assert_eq!(backend.get(&"key2".to_string()), None);
    assert_eq!(backend.len(), 1);
}

#[test]
fn test_hashmap_backend_with_cache() {
    /// Collatz chain length: sparse, unbounded states
    struct Collatz;

    impl DpProblem<u64, u64> for Collatz {
        fn deps(&self, n: &u64) -> Vec<u64> {
            if *n <= 1 {
                vec![]
            } else if n % 2 == 0 {
                vec![n / 2]
            } else {
                vec![3 * n + 1]
            }
        }

        fn compute(&self, _n: &u64, deps: Vec<u64>) -> u64 {
            if deps.is_empty() { 0 } else { 1 + deps[0] }
        }
    }

    let cache = DpCache::with_problem(HashMapBackend::new(), Collatz);
    assert_eq!(cache.get(&1).unwrap(), 0);
    assert_eq!(cache.get(&6).unwrap(), 8);
    assert_eq!(cache.get(&27).unwrap(), 111);

    // 6 -> 3 -> 10 -> 5 -> 16 -> 8 -> 4 -> 2 -> 1 were all stored on the way
    let backend = cache.into_backend();
    assert_eq!(backend.get(&16), Some(&4));
    assert!(!backend.is_empty());
}

#[test]
fn test_hashmap_backend_matches_grid_backend() {
    let grid = DpCache::with_problem(Vec2DBackend::new(6, 6), GridPaths);
    let sparse = DpCache::with_problem(HashMapBackend::new(), GridPaths);

    for r in 0..6 {
        for c in 0..6 {
            assert_eq!(grid.get(&(r, c)).unwrap(), sparse.get(&(r, c)).unwrap());
        }
    }
}
