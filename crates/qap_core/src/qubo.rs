//! QUBO encoding of the assignment problem
//!
//! Binary variable `x[i,j]` (flattened to `i*N + j`) means "agent i goes to
//! slot j". The N×N cost matrix expands into a dense symmetric (N²)×(N²)
//! matrix carrying:
//! - the objective on the diagonal (`+cost(i, j)`)
//! - one-hot row constraints (`Σ_j x[i,j] = 1`): `-penalty` on the diagonal,
//!   `+2*penalty` on every same-row off-diagonal pair, both directions
//! - one-hot column constraints, mirrored over columns
//!
//! ## Energy convention
//!
//! Coefficients are stored symmetrically; [`QuboMatrix::energy`] counts the
//! diagonal once and each unordered variable pair once (upper triangle), so a
//! stored pair coefficient of `2*penalty` contributes exactly `2*penalty`
//! when both variables are set. This matches the expansion of
//! `penalty * (Σx - 1)²` with the constant term dropped.
//!
//! ## Penalty precondition
//!
//! Correctness of "minimizing the QUBO over-approximates the constrained
//! problem" requires `penalty >= 2 * N * max_cost`. [`default_penalty_weight`]
//! meets the bound (with a floor for all-zero matrices); callers overriding
//! the weight own it themselves.

use serde::{Deserialize, Serialize};

use crate::cost::CostMatrix;

/// Floor for the penalty scale so degenerate all-zero cost matrices still
/// get real constraint pressure instead of a zero penalty.
const MIN_PENALTY_SCALE: f64 = 1.0;

/// Flatten an (agent, slot) index pair into a QUBO variable index.
#[inline]
pub fn flat_index(i: usize, j: usize, n: usize) -> usize {
    i * n + j
}

/// Dense symmetric QUBO matrix of dimension N² over binary variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuboMatrix {
    n: usize,
    dim: usize,
    values: Vec<f64>,
}

impl QuboMatrix {
    fn zeros(n: usize) -> Self {
        let dim = n * n;
        Self { n, dim, values: vec![0.0; dim * dim] }
    }

    /// Problem size N (number of agents = number of slots).
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Matrix dimension N².
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Coefficient at (a, b) in variable-index space.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> f64 {
        self.values[a * self.dim + b]
    }

    #[inline]
    fn add(&mut self, a: usize, b: usize, v: f64) {
        self.values[a * self.dim + b] += v;
    }

    /// True iff the stored matrix equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        for a in 0..self.dim {
            for b in (a + 1)..self.dim {
                if (self.get(a, b) - self.get(b, a)).abs() > 1e-9 {
                    return false;
                }
            }
        }
        true
    }

    /// QUBO energy of a bit vector (length must be `dim()`).
    ///
    /// Diagonal counted once per set bit, each unordered pair counted once
    /// via the upper triangle (see module docs for the convention).
    pub fn energy(&self, bits: &[u8]) -> f64 {
        debug_assert_eq!(bits.len(), self.dim);
        let mut e = 0.0;
        for a in 0..self.dim {
            if bits[a] == 0 {
                continue;
            }
            e += self.get(a, a);
            for b in (a + 1)..self.dim {
                if bits[b] != 0 {
                    e += self.get(a, b);
                }
            }
        }
        e
    }

    /// Non-zero entries as (row, col, value) triples, row-major order.
    ///
    /// Export helper for samplers that want a sparse problem description; the
    /// solver itself always works on the dense form.
    pub fn to_sparse_entries(&self) -> Vec<(usize, usize, f64)> {
        let mut entries = Vec::new();
        for a in 0..self.dim {
            for b in 0..self.dim {
                let v = self.get(a, b);
                if v != 0.0 {
                    entries.push((a, b, v));
                }
            }
        }
        entries
    }
}

/// Default penalty weight: `2 * N * max_cost`, floored so that all-zero cost
/// matrices still produce a positive penalty.
///
/// This is the smallest weight for which any one-hot violation costs strictly
/// more than the worst feasible assignment (non-dominance bound).
pub fn default_penalty_weight(costs: &CostMatrix) -> f64 {
    2.0 * costs.n() as f64 * costs.max_cost().max(MIN_PENALTY_SCALE)
}

/// Expand a cost matrix into the penalty-augmented QUBO matrix.
///
/// Precondition: `penalty >= 2 * N * max_cost` (see module docs); the
/// encoding itself works for any weight, but smaller weights lose the
/// feasible-beats-infeasible guarantee.
pub fn build_qubo(costs: &CostMatrix, penalty: f64) -> QuboMatrix {
    let n = costs.n();
    let mut q = QuboMatrix::zeros(n);

    // Objective: linear terms on the diagonal.
    for i in 0..n {
        for j in 0..n {
            let idx = flat_index(i, j, n);
            q.add(idx, idx, costs.cost(i, j));
        }
    }

    // Row one-hot: exactly one slot per agent.
    for i in 0..n {
        for j in 0..n {
            let idx = flat_index(i, j, n);
            q.add(idx, idx, -penalty);
        }
        for j1 in 0..n {
            for j2 in (j1 + 1)..n {
                let a = flat_index(i, j1, n);
                let b = flat_index(i, j2, n);
                q.add(a, b, 2.0 * penalty);
                q.add(b, a, 2.0 * penalty);
            }
        }
    }

    // Column one-hot: exactly one agent per slot.
    for j in 0..n {
        for i in 0..n {
            let idx = flat_index(i, j, n);
            q.add(idx, idx, -penalty);
        }
        for i1 in 0..n {
            for i2 in (i1 + 1)..n {
                let a = flat_index(i1, j, n);
                let b = flat_index(i2, j, n);
                q.add(a, b, 2.0 * penalty);
                q.add(b, a, 2.0 * penalty);
            }
        }
    }

    q
}
