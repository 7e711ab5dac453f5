//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::DpError;

/// A storage backend for the DP cache.
///
/// # Contract
///
/// - `get` returns `None` for a state that was never stored
/// - `get_or_insert` runs `compute` only when the state is empty; an existing
///   value is never overwritten
pub trait Backend<I, K> {
    /// Returns the stored value for `index`, if any.
    fn get(&self, index: &I) -> Option<&K>;

    /// Returns the value for `index`, storing `compute()` first if it is empty.
    ///
    /// Fixed-size backends fail with [`DpError::IndexOutOfBounds`] when
    /// `index` lies outside their storage.
    fn get_or_insert<F>(&mut self, index: I, compute: F) -> Result<&K, DpError>
    where
        F: FnOnce() -> K;
}

/// A borrowed backend is a backend, so callers can keep ownership of the
/// storage and inspect it after solving.
impl<I, K, B> Backend<I, K> for &mut B
where
    B: Backend<I, K>,
{
    fn get(&self, index: &I) -> Option<&K> {
        (**self).get(index)
    }

    fn get_or_insert<F>(&mut self, index: I, compute: F) -> Result<&K, DpError>
    where
        F: FnOnce() -> K,
    {
        (**self).get_or_insert(index, compute)
    }
}

/// A runtime-sized 2D grid backend for `(row, col)` states.
///
/// Every cell starts empty. The grid never grows: storing outside
/// `rows x cols` is an error, reading outside it yields `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vec2DBackend<K> {
    rows: usize,
    cols: usize,
    data: Vec<Option<K>>,
}

impl<K> Vec2DBackend<K> {
    /// Creates a `rows x cols` grid with every cell empty.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        data.resize_with(rows * cols, || None);
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the value at `(row, col)`, or `None` if empty or out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&K> {
        self.offset(row, col)
            .and_then(|offset| self.data[offset].as_ref())
    }

    /// Iterates over every filled cell in row-major order.
    pub fn populated(&self) -> impl Iterator<Item = ((usize, usize), &K)> + '_ {
        self.data.iter().enumerate().filter_map(|(offset, slot)| {
            slot.as_ref()
                .map(|value| ((offset / self.cols, offset % self.cols), value))
        })
    }

    /// Number of filled cells.
    pub fn populated_count(&self) -> usize {
        self.data.iter().filter(|slot| slot.is_some()).count()
    }

    /// Empties every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|slot| *slot = None);
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

impl<K> Backend<(usize, usize), K> for Vec2DBackend<K> {
    fn get(&self, &(row, col): &(usize, usize)) -> Option<&K> {
        self.cell(row, col)
    }

    fn get_or_insert<F>(&mut self, (row, col): (usize, usize), compute: F) -> Result<&K, DpError>
    where
        F: FnOnce() -> K,
    {
        let offset = self.offset(row, col).ok_or(DpError::IndexOutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })?;
        Ok(&*self.data[offset].get_or_insert_with(compute))
    }
}


/// A HashMap-based backend for arbitrary hashable states.
///
/// Suitable for sparse state spaces or non-integer state types. It grows on
/// demand, so storing never fails.
#[derive(Debug, Clone)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    /// Creates a new empty HashMapBackend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Number of stored states.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn get_or_insert<F>(&mut self, index: I, compute: F) -> Result<&K, DpError>
    where
        F: FnOnce() -> K,
    {
        Ok(&*self.data.entry(index).or_insert_with(compute))
    }
}
