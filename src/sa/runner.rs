//! SA execution loop.

use log::{debug, trace};
use rand::Rng;

use super::config::{CoolingSchedule, SaConfig};
use crate::board::{column_conflicts, queen_conflicts, random_columns, Board};
use crate::error::{check_size, QueensError};
use crate::random::rng_from;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The solution, or `None` if the step budget ran out.
    pub board: Option<Board>,

    /// Steps consumed (at most `max_steps`).
    pub steps: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Lowest conflict count reached.
    pub best_conflicts: usize,
}

impl SaResult {
    /// Whether a solution was found.
    pub fn is_solved(&self) -> bool {
        self.board.is_some()
    }
}

/// Executes Simulated Annealing.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA, seeding the generator from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n == 0` or the configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_queens::sa::{SaConfig, SaRunner};
    ///
    /// let config = SaConfig::default().with_max_steps(200_000).with_seed(42);
    /// let result = SaRunner::run(8, &config).unwrap();
    /// assert!(result.steps <= 200_000);
    /// ```
    pub fn run(n: usize, config: &SaConfig) -> Result<SaResult, QueensError> {
        let mut rng = rng_from(config.seed);
        Self::run_with_rng(n, config, &mut rng)
    }

    /// Runs SA with a caller-supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        n: usize,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult, QueensError> {
        check_size(n)?;
        config.validate().map_err(QueensError::InvalidConfig)?;

        // Complete board: every row always holds a queen.
        let mut columns = random_columns(n, rng);
        let mut current = column_conflicts(&columns);
        let mut best_conflicts = current;
        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        for step in 0..config.max_steps {
            if current == 0 {
                debug!("annealing n={n}: solved at step {step}, T={temperature:.6}");
                return Ok(SaResult {
                    board: Some(Board::from_columns(columns)?),
                    steps: step,
                    final_temperature: temperature,
                    accepted_moves,
                    improving_moves,
                    best_conflicts: 0,
                });
            }

            // n >= 2 here: a single queen never conflicts.
            let row = rng.random_range(0..n);
            let old = columns[row];
            let mut col = rng.random_range(0..n);
            while col == old {
                col = rng.random_range(0..n);
            }

            let candidate = current - queen_conflicts(&columns, row, old)
                + queen_conflicts(&columns, row, col);
            let delta = candidate as f64 - current as f64;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random::<f64>() < (-delta / temperature).exp()
            };

            if accept {
                trace!("step {step}: row {row} -> column {col}, {current} -> {candidate}");
                columns[row] = col;
                current = candidate;
                accepted_moves += 1;
                best_conflicts = best_conflicts.min(current);
            }

            temperature = cool(temperature, config);
        }

        debug!(
            "annealing n={n}: budget of {} steps exhausted, {current} conflicts left",
            config.max_steps
        );

        Ok(SaResult {
            board: None,
            steps: config.max_steps,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            best_conflicts,
        })
    }
}

/// Apply the cooling schedule, clamped to the temperature floor.
fn cool(temperature: f64, config: &SaConfig) -> f64 {
    let next = match config.cooling {
        CoolingSchedule::Geometric { alpha } => temperature * alpha,
        CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
    };
    next.max(config.min_temperature)
}
