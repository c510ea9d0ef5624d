//! Candidate filtering and ranking
//!
//! One sampler invocation yields a batch of noisy bit vectors. This module
//! keeps the valid ones, prices them, and picks the cheapest. Ties break by
//! first-seen order (stable sort), so output is reproducible for a fixed
//! sample order.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::cost::CostMatrix;
use crate::decode::{decode_sample, validate_assignment};
use crate::sampler::BitVector;

/// A validated, priced candidate from a sample batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// (agent, slot) pairs, in agent order.
    pub pairs: Vec<(usize, usize)>,
    /// Sum of `cost(agent, slot)` over the pairs.
    pub total_cost: f64,
    /// Index of the originating sample within the batch.
    pub shot: usize,
}

/// Decode, validate and rank a batch; return the cheapest valid candidate.
///
/// Wrong-length samples are skipped with a warning; constraint violations are
/// expected noise and only logged at debug level. Returns `None` when the
/// batch holds no valid candidate at all.
pub fn select_best(samples: &[BitVector], costs: &CostMatrix) -> Option<Candidate> {
    let n = costs.n();
    let dim = n * n;

    let mut valid: Vec<Candidate> = Vec::new();
    for (shot, bits) in samples.iter().enumerate() {
        if bits.len() != dim {
            warn!(shot, got = bits.len(), expected = dim, "skipping malformed sample");
            continue;
        }
        let pairs = decode_sample(bits, n);
        match validate_assignment(&pairs, n) {
            Ok(()) => {
                let total_cost = costs.assignment_cost(&pairs);
                valid.push(Candidate { pairs, total_cost, shot });
            }
            Err(violation) => {
                debug!(shot, %violation, "sample rejected");
            }
        }
    }

    // Stable sort keeps first-seen order on cost ties.
    valid.sort_by(|a, b| a.total_cost.partial_cmp(&b.total_cost).unwrap_or(Ordering::Equal));
    valid.into_iter().next()
}
