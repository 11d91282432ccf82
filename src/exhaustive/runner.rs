//! Backtracking execution.

use log::debug;

use super::config::ExhaustiveConfig;
use crate::board::{prefix_safe, Board};
use crate::error::{check_size, QueensError};

/// Result of an exhaustive search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustiveResult {
    /// Solutions in lexicographic order of their column sequences.
    pub solutions: Vec<Board>,

    /// Number of safe placements made during the search.
    pub nodes: usize,
}

impl ExhaustiveResult {
    /// Number of solutions found.
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// The lexicographically smallest solution, if any.
    pub fn first(&self) -> Option<&Board> {
        self.solutions.first()
    }
}

/// Executes the backtracking search.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Enumerates the solutions for an `n x n` board.
    ///
    /// # Errors
    ///
    /// Returns [`QueensError::InvalidSize`] if `n == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_queens::exhaustive::{ExhaustiveConfig, ExhaustiveRunner};
    ///
    /// let result = ExhaustiveRunner::run(6, &ExhaustiveConfig::default()).unwrap();
    /// assert_eq!(result.solution_count(), 4);
    /// ```
    pub fn run(n: usize, config: &ExhaustiveConfig) -> Result<ExhaustiveResult, QueensError> {
        check_size(n)?;

        let mut search = Search {
            n,
            limit: config.max_solutions,
            board: Board::empty(n),
            solutions: Vec::new(),
            nodes: 0,
        };
        search.descend(0);

        debug!(
            "exhaustive search n={n}: {} solutions, {} nodes",
            search.solutions.len(),
            search.nodes
        );

        Ok(ExhaustiveResult {
            solutions: search.solutions,
            nodes: search.nodes,
        })
    }
}

/// Working state of one search. The board is the only scratch structure and
/// is owned here for the whole recursion.
struct Search {
    n: usize,
    limit: usize,
    board: Board,
    solutions: Vec<Board>,
    nodes: usize,
}

impl Search {
    /// Explores every completion of rows `0..row`. Returns `true` once the
    /// solution limit is reached.
    fn descend(&mut self, row: usize) -> bool {
        if row == self.n {
            self.solutions.push(self.board.clone());
            return self.limit > 0 && self.solutions.len() >= self.limit;
        }

        for col in 0..self.n {
            if !prefix_safe(&self.board, row, col) {
                continue;
            }
            self.nodes += 1;
            self.board.place(row, col);
            let done = self.descend(row + 1);
            self.board.clear(row);
            if done {
                return true;
            }
        }
        false
    }
}
