//! Hill climbing execution loop.
//!
//! # Algorithm
//!
//! For each restart:
//! 1. Fill a board with one random column per row
//! 2. Stop with success when the board has no conflicts
//! 3. Probe every (row, column) move; a strictly better count always
//!    becomes the candidate, a tie with the best count becomes the
//!    candidate with probability `sideways_probability`
//! 4. Abandon the restart if no candidate was selected, otherwise commit it
//!    and go back to 2

use log::{debug, trace};
use rand::Rng;

use super::config::HillClimbConfig;
use crate::board::{column_conflicts, queen_conflicts, random_columns, Board};
use crate::error::{check_size, QueensError};
use crate::random::rng_from;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbResult {
    /// The solution, or `None` if every restart failed.
    pub board: Option<Board>,

    /// Number of attempts started (at most `max_restarts`).
    pub restarts: usize,

    /// Moves committed during the last attempt.
    pub steps: usize,

    /// Conflicts of the last board examined (0 on success).
    pub final_conflicts: usize,
}

impl HillClimbResult {
    /// Whether a solution was found.
    pub fn is_solved(&self) -> bool {
        self.board.is_some()
    }
}

/// How one attempt ended.
enum Attempt {
    Solved(Vec<usize>),
    Stuck { conflicts: usize },
}

/// Executes hill climbing.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Runs hill climbing, seeding the generator from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n == 0` or the configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_queens::hill::{HillClimbConfig, HillClimbRunner};
    ///
    /// let config = HillClimbConfig::default().with_max_restarts(50).with_seed(42);
    /// let result = HillClimbRunner::run(8, &config).unwrap();
    /// if let Some(board) = &result.board {
    ///     assert!(board.is_solution());
    /// }
    /// ```
    pub fn run(n: usize, config: &HillClimbConfig) -> Result<HillClimbResult, QueensError> {
        let mut rng = rng_from(config.seed);
        Self::run_with_rng(n, config, &mut rng)
    }

    /// Runs hill climbing with a caller-supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        n: usize,
        config: &HillClimbConfig,
        rng: &mut R,
    ) -> Result<HillClimbResult, QueensError> {
        check_size(n)?;
        config.validate().map_err(QueensError::InvalidConfig)?;

        let mut steps = 0;
        let mut final_conflicts = 0;

        for restart in 0..config.max_restarts {
            let (attempt, taken) = climb(n, config, rng);
            steps = taken;
            match attempt {
                Attempt::Solved(columns) => {
                    debug!(
                        "hill climbing n={n}: solved in {taken} steps after {} restarts",
                        restart + 1
                    );
                    return Ok(HillClimbResult {
                        board: Some(Board::from_columns(columns)?),
                        restarts: restart + 1,
                        steps,
                        final_conflicts: 0,
                    });
                }
                Attempt::Stuck { conflicts } => {
                    debug!(
                        "hill climbing n={n}: restart {} stuck at {conflicts} conflicts after {taken} steps",
                        restart + 1
                    );
                    final_conflicts = conflicts;
                }
            }
        }

        Ok(HillClimbResult {
            board: None,
            restarts: config.max_restarts,
            steps,
            final_conflicts,
        })
    }
}

/// Runs one attempt from a fresh random board. Returns the outcome and the
/// number of committed moves.
fn climb<R: Rng>(n: usize, config: &HillClimbConfig, rng: &mut R) -> (Attempt, usize) {
    // Complete board: every row always holds a queen.
    let mut columns = random_columns(n, rng);
    let mut conflicts = column_conflicts(&columns);
    let mut steps = 0;

    loop {
        if conflicts == 0 {
            return (Attempt::Solved(columns), steps);
        }
        if config.max_steps > 0 && steps >= config.max_steps {
            return (Attempt::Stuck { conflicts }, steps);
        }

        let mut best_move = None;
        let mut best_conflicts = conflicts;

        for row in 0..n {
            let original = columns[row];
            let base = conflicts - queen_conflicts(&columns, row, original);
            for col in (0..n).filter(|&c| c != original) {
                let probe = base + queen_conflicts(&columns, row, col);
                // The draw happens only on ties, so the stream consumed
                // depends on the enumeration order.
                if probe < best_conflicts
                    || (probe == best_conflicts
                        && rng.random::<f64>() < config.sideways_probability)
                {
                    best_conflicts = probe;
                    best_move = Some((row, col));
                }
            }
        }

        let Some((row, col)) = best_move else {
            return (Attempt::Stuck { conflicts }, steps);
        };
        trace!("move row {row} to column {col}: {conflicts} -> {best_conflicts}");
        columns[row] = col;
        conflicts = best_conflicts;
        steps += 1;
    }
}
