//! Exhaustive backtracking search.
//!
//! Depth-first search over rows. Each row tries columns in ascending order,
//! keeps only placements that are safe against the rows above, and undoes
//! the placement once its subtree is exhausted. Every solution is recorded,
//! so the result is complete and ordered lexicographically by column
//! sequence.
//!
//! # References
//!
//! - Wirth, N. (1976), "Algorithms + Data Structures = Programs", §3.5

mod config;
mod runner;

pub use config::ExhaustiveConfig;
pub use runner::{ExhaustiveResult, ExhaustiveRunner};
