//! Hill climbing with random restarts and sideways moves.
//!
//! Each attempt starts from a random complete board and repeatedly commits
//! the best single-queen move over the whole neighborhood (every row, every
//! other column). Moves that tie the best count are taken with a fixed
//! probability so the search can cross plateaus. An attempt that finds no
//! acceptable move is abandoned and the next restart begins.
//!
//! # References
//!
//! - Russell & Norvig, "Artificial Intelligence: A Modern Approach", §4.1.1

mod config;
mod runner;

pub use config::HillClimbConfig;
pub use runner::{HillClimbResult, HillClimbRunner};
