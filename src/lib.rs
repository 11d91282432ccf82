//! N-Queens search engines.
//!
//! Places `n` queens on an `n x n` board so that no two attack each other,
//! using three independent strategies over a shared board model:
//!
//! - **Exhaustive search**: depth-first backtracking that enumerates every
//!   solution in lexicographic order of column sequences.
//! - **Hill climbing**: steepest descent over single-queen moves, with
//!   probabilistic sideways moves and random restarts.
//! - **Simulated Annealing (SA)**: one random move per step, accepted by the
//!   Metropolis criterion under a cooling temperature.
//!
//! The stochastic engines are best-effort: running out of budget is an
//! ordinary result, not an error. Each accepts a seed or an injected
//! generator, so runs are reproducible.
//!
//! # Architecture
//!
//! [`board`] holds the board model and the conflict checks. The engines
//! depend only on [`board`] and never on each other. Rendering, timing and
//! input selection belong to callers such as the `nqueens` binary.

pub mod board;
pub mod error;
pub mod exhaustive;
pub mod hill;
pub mod random;
pub mod sa;

pub use board::Board;
pub use error::QueensError;
