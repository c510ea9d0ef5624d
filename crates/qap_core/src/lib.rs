//! # qap_core - QUBO Formation Assignment Solver
//!
//! Turns "move N agents onto N target slots at minimum total cost" into a
//! Quadratic Unconstrained Binary Optimization problem, submits it to an
//! external probabilistic sampler, and decodes/validates the noisy results
//! against the hard one-to-one constraints. A deterministic greedy fallback
//! guarantees a feasible answer even when the sampler produces nothing
//! usable.
//!
//! ## Pipeline
//! positions → cost matrix → QUBO matrix → (external sampler) → bit vectors
//! → decode → validate → select best → solution (or classical fallback)
//!
//! ## Guarantees
//! - Under the default configuration, `solve()` only fails on malformed input
//! - Returned assignments are always valid bijections
//! - Deterministic: fixed sample order means reproducible selection
//!
//! ## What this crate is not
//! No quantum simulator ships here. The sampler is a one-method trait
//! ([`Sampler`]); plug in whatever backend you have. The bundled
//! [`SeededSampler`] is a deterministic RNG for tests and benches.

pub mod config;
pub mod cost;
pub mod decode;
pub mod error;
pub mod fallback;
pub mod geometry;
pub mod qubo;
pub mod sampler;
pub mod select;
pub mod solver;

pub use config::{SamplerFailurePolicy, SolverConfig};
pub use cost::CostMatrix;
pub use decode::{decode_sample, validate_assignment, ConstraintViolation};
pub use error::{Result, SolveError};
pub use fallback::greedy_assignment;
pub use geometry::{distance, DistanceMetric, Point};
pub use qubo::{build_qubo, default_penalty_weight, flat_index, QuboMatrix};
pub use sampler::{BitVector, Sampler, SamplerError, SeededSampler};
pub use select::{select_best, Candidate};
pub use solver::{solve, solve_positions, Solution, SolutionSource};
