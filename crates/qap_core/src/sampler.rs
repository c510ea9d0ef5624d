//! Sampler boundary
//!
//! The probabilistic backend is an external collaborator. The solver depends
//! on exactly one operation: submit a QUBO matrix, get back a batch of bit
//! vectors. Anything behind that call (hardware, simulator, annealer, plain
//! RNG) is none of this crate's business.
//!
//! [`SeededSampler`] is the bundled reference implementation: a seeded
//! biased-coin generator. It is deliberately dumb — it exists so tests and
//! benches can exercise the full pipeline deterministically, not to stand in
//! for a real optimizer.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::qubo::QuboMatrix;

/// One candidate solution from the backend: length-N² sequence of {0,1}.
pub type BitVector = Vec<u8>;

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("sampler backend failure: {0}")]
    Backend(String),

    #[error("sampler rejected problem of dimension {dim}: {reason}")]
    Rejected { dim: usize, reason: String },
}

/// Narrow capability the solver requires from a probabilistic backend.
pub trait Sampler {
    /// Draw `shots` candidate bit vectors for the given QUBO problem.
    ///
    /// Each returned vector should have length `qubo.dim()`; the solver
    /// treats malformed vectors as invalid candidates rather than errors.
    fn sample(&self, qubo: &QuboMatrix, shots: usize) -> Result<Vec<BitVector>, SamplerError>;
}

/// Deterministic random sampler (same seed = same batch).
///
/// Each bit is an independent Bernoulli draw with probability `1/N`, which
/// sets roughly one bit per row — close enough to the one-hot structure that
/// small problems regularly produce valid assignments.
#[derive(Debug, Clone)]
pub struct SeededSampler {
    seed: u64,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Sampler for SeededSampler {
    fn sample(&self, qubo: &QuboMatrix, shots: usize) -> Result<Vec<BitVector>, SamplerError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let dim = qubo.dim();
        let p = 1.0 / qubo.n() as f64;
        let mut batch = Vec::with_capacity(shots);
        for _ in 0..shots {
            let bits: BitVector =
                (0..dim).map(|_| if rng.gen_bool(p) { 1 } else { 0 }).collect();
            batch.push(bits);
        }
        Ok(batch)
    }
}
