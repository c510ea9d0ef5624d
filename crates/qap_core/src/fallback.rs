//! Classical fallback solver
//!
//! Greedy nearest-unused-slot assignment. Not optimal, but O(N²), fully
//! deterministic, and it cannot fail: at each of the N steps at least one
//! unused slot remains, so a minimum always exists. This is the correctness
//! backstop when the sampler produces nothing usable.

use crate::cost::CostMatrix;

/// Greedy assignment: agents in index order each take the cheapest slot
/// still free. Cost ties break toward the lowest slot index.
///
/// Always returns a full bijection for any valid [`CostMatrix`].
pub fn greedy_assignment(costs: &CostMatrix) -> Vec<(usize, usize)> {
    let n = costs.n();
    let mut used = vec![false; n];
    let mut pairs = Vec::with_capacity(n);

    for i in 0..n {
        let mut best_j = usize::MAX;
        let mut best_cost = f64::INFINITY;
        for j in 0..n {
            if used[j] {
                continue;
            }
            // Strict < keeps the lowest slot index on ties.
            let c = costs.cost(i, j);
            if c < best_cost {
                best_cost = c;
                best_j = j;
            }
        }
        used[best_j] = true;
        pairs.push((i, best_j));
    }

    pairs
}
