//! Cost matrix construction and validation
//!
//! The cost matrix is the single input of the whole pipeline: `cost(i, j)` is
//! the price of sending agent `i` to slot `j`. Invariants enforced at
//! construction and re-checked by [`CostMatrix::validate`]:
//! - square, N >= 1
//! - every entry finite and non-negative (the penalty bound in `qubo`
//!   assumes non-negative costs)

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolveError};
use crate::geometry::{DistanceMetric, Point};

/// Square matrix of assignment costs, row-major storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostMatrix {
    n: usize,
    values: Vec<f64>,
}

impl CostMatrix {
    /// Build from explicit rows. Fails on empty, ragged/non-square rows or
    /// non-finite/negative entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(SolveError::EmptyInput);
        }
        let mut values = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(SolveError::InvalidMatrix(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            values.extend_from_slice(row);
        }
        let matrix = Self { n, values };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Build an N×N matrix from a cost closure over (row, col).
    pub fn from_fn<F>(n: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        if n == 0 {
            return Err(SolveError::EmptyInput);
        }
        let mut values = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                values.push(f(i, j));
            }
        }
        let matrix = Self { n, values };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Build from two equally sized position sets using the given metric.
    ///
    /// `cost(i, j)` = metric distance from `current[i]` to `targets[j]`.
    pub fn from_positions(
        current: &[Point],
        targets: &[Point],
        metric: DistanceMetric,
    ) -> Result<Self> {
        if current.len() != targets.len() {
            return Err(SolveError::DimensionMismatch {
                current: current.len(),
                targets: targets.len(),
            });
        }
        Self::from_fn(current.len(), |i, j| metric.apply(current[i], targets[j]))
    }

    /// Re-check the construction invariants.
    ///
    /// Needed because deserialized matrices bypass the constructors.
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(SolveError::EmptyInput);
        }
        if self.values.len() != self.n * self.n {
            return Err(SolveError::InvalidMatrix(format!(
                "storage has {} entries, expected {}",
                self.values.len(),
                self.n * self.n
            )));
        }
        for (idx, v) in self.values.iter().enumerate() {
            if !v.is_finite() {
                return Err(SolveError::InvalidMatrix(format!(
                    "non-finite cost at ({}, {})",
                    idx / self.n,
                    idx % self.n
                )));
            }
            if *v < 0.0 {
                return Err(SolveError::InvalidMatrix(format!(
                    "negative cost {} at ({}, {})",
                    v,
                    idx / self.n,
                    idx % self.n
                )));
            }
        }
        Ok(())
    }

    /// Matrix dimension N.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Cost of assigning row `i` to column `j`.
    #[inline]
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Largest entry in the matrix. Zero only for the all-zero matrix.
    pub fn max_cost(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Total cost of a pair list (sum of `cost(row, col)` over the pairs).
    pub fn assignment_cost(&self, pairs: &[(usize, usize)]) -> f64 {
        pairs.iter().map(|&(i, j)| self.cost(i, j)).sum()
    }
}
