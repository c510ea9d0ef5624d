//! Solve orchestration
//!
//! The full pipeline: validate input → compute penalty weight → build the
//! QUBO → sample → select the best valid candidate → greedy fallback when
//! the batch is empty of valid candidates.
//!
//! Under the default configuration the only way `solve()` fails is malformed
//! input; sampler trouble and all-invalid batches degrade to the classical
//! fallback instead of failing the caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{SamplerFailurePolicy, SolverConfig};
use crate::cost::CostMatrix;
use crate::error::{Result, SolveError};
use crate::fallback::greedy_assignment;
use crate::geometry::{DistanceMetric, Point};
use crate::qubo::build_qubo;
use crate::sampler::Sampler;
use crate::select::select_best;

/// How a solution was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolutionSource {
    /// Cheapest valid candidate out of the sampled batch.
    SampledValid,
    /// Greedy classical fallback (no valid sample, or sampler failed under
    /// the FallBack policy).
    ClassicalFallback,
}

/// A complete, validated assignment with its total cost and provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// (agent, slot) pairs; rows and columns each form a permutation of 0..N.
    pub assignment: Vec<(usize, usize)>,
    /// Sum of `cost(agent, slot)` over the assignment.
    pub total_cost: f64,
    /// Which branch produced this solution.
    pub source: SolutionSource,
}

impl Solution {
    /// Assignment pairs sorted by agent index.
    pub fn pairs_sorted(&self) -> Vec<(usize, usize)> {
        let mut pairs = self.assignment.clone();
        pairs.sort_unstable();
        pairs
    }

    /// Slot assigned to the given agent, if present.
    pub fn slot_for(&self, agent: usize) -> Option<usize> {
        self.assignment.iter().find(|(i, _)| *i == agent).map(|(_, j)| *j)
    }
}

/// Solve one assignment problem against an external sampler.
///
/// See the module docs for the pipeline. `config.shots` must be at least 1.
pub fn solve(
    costs: &CostMatrix,
    sampler: &dyn Sampler,
    config: &SolverConfig,
) -> Result<Solution> {
    costs.validate()?;
    if config.shots == 0 {
        return Err(SolveError::InvalidShots(0));
    }

    let n = costs.n();
    let penalty = config.penalty_weight(costs);
    debug!(n, penalty, shots = config.shots, "encoding assignment problem as QUBO");
    let qubo = build_qubo(costs, penalty);

    let samples = match sampler.sample(&qubo, config.shots) {
        Ok(batch) => batch,
        Err(err) => match config.sampler_failure_policy {
            SamplerFailurePolicy::FailFast => return Err(err.into()),
            SamplerFailurePolicy::FallBack => {
                warn!(%err, "sampler failed, continuing with empty batch");
                Vec::new()
            }
        },
    };
    debug!(returned = samples.len(), "sampler batch received");

    if let Some(candidate) = select_best(&samples, costs) {
        info!(
            total_cost = candidate.total_cost,
            shot = candidate.shot,
            "valid sampled solution selected"
        );
        return Ok(Solution {
            assignment: candidate.pairs,
            total_cost: candidate.total_cost,
            source: SolutionSource::SampledValid,
        });
    }

    if !config.allow_fallback {
        return Err(SolveError::NoValidSample);
    }

    let assignment = greedy_assignment(costs);
    let total_cost = costs.assignment_cost(&assignment);
    info!(total_cost, "no valid sample, using classical fallback");
    Ok(Solution { assignment, total_cost, source: SolutionSource::ClassicalFallback })
}

/// Convenience wrapper: build the cost matrix from two position sets and
/// solve. `current[i]` is agent i, `targets[j]` is slot j.
pub fn solve_positions(
    current: &[Point],
    targets: &[Point],
    metric: DistanceMetric,
    sampler: &dyn Sampler,
    config: &SolverConfig,
) -> Result<Solution> {
    let costs = CostMatrix::from_positions(current, targets, metric)?;
    solve(&costs, sampler, config)
}
