//! Solver configuration

use serde::{Deserialize, Serialize};

use crate::cost::CostMatrix;
use crate::qubo::default_penalty_weight;

/// What `solve()` does when the sampler itself returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SamplerFailurePolicy {
    /// Propagate the sampler error to the caller.
    FailFast,
    /// Treat the failure as "zero valid samples" and use the fallback path.
    FallBack,
}

/// Tunable knobs for one `solve()` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    // === Sampling ===
    /// Samples requested per submission (default: 64)
    pub shots: usize,

    // === Penalty weight ===
    /// Multiplier m in `penalty = m * N * max_cost` (default: 2.0).
    /// 2.0 is the non-dominance bound; raising it is safe but can flatten
    /// the sampler's energy landscape.
    pub penalty_multiplier: f64,
    /// Explicit penalty weight; wins over the multiplier when set
    /// (default: None). Caller owns the `>= 2 * N * max_cost` bound.
    pub penalty_override: Option<f64>,

    // === Degradation policy ===
    /// Behavior on sampler error (default: FallBack)
    pub sampler_failure_policy: SamplerFailurePolicy,
    /// Allow the greedy classical fallback when no valid sample exists
    /// (default: true). With `false`, zero valid samples becomes an error.
    pub allow_fallback: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            shots: 64,
            penalty_multiplier: 2.0,
            penalty_override: None,
            sampler_failure_policy: SamplerFailurePolicy::FallBack,
            allow_fallback: true,
        }
    }
}

impl SolverConfig {
    /// Effective penalty weight for a given cost matrix.
    pub fn penalty_weight(&self, costs: &CostMatrix) -> f64 {
        match self.penalty_override {
            Some(p) => p,
            None => {
                // Scale the default bound by multiplier/2 so that the
                // documented default multiplier of 2.0 reproduces it exactly.
                default_penalty_weight(costs) * (self.penalty_multiplier / 2.0)
            }
        }
    }
}
