//! Simulated Annealing (SA).
//!
//! Starts from a random complete board and proposes one random single-queen
//! move per step. Improvements are always taken; worsening moves are taken
//! with the Metropolis probability `exp(-delta / T)`, and the temperature
//! `T` cools after every step.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
