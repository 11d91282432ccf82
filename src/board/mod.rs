//! Board model shared by every engine.
//!
//! A board holds one entry per row: the column of the queen in that row, or
//! `None` while backtracking has not decided the row yet. The stochastic
//! engines always work on complete boards, so row conflicts cannot occur and
//! only column and diagonal attacks are counted.
//!
//! # Key Components
//!
//! - [`Board`] — a partial or complete placement
//! - [`conflict`] — prefix safety check and full-board conflict count

pub mod conflict;

use std::fmt;

use rand::Rng;

use crate::error::QueensError;

pub use conflict::{
    attacks, column_conflicts, prefix_safe, queen_conflicts, row_conflicts, total_conflicts,
};

/// A placement of at most one queen per row on an `n x n` board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Option<usize>>", into = "Vec<Option<usize>>")
)]
pub struct Board {
    rows: Vec<Option<usize>>,
}

impl Board {
    /// Creates a board with every row unassigned.
    pub fn empty(n: usize) -> Self {
        Self {
            rows: vec![None; n],
        }
    }

    /// Creates a complete board with one uniformly random column per row.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self {
            rows: random_columns(n, rng).into_iter().map(Some).collect(),
        }
    }

    /// Creates a complete board from a column sequence.
    ///
    /// # Errors
    ///
    /// Returns [`QueensError::ColumnOutOfRange`] if any column is `>= columns.len()`.
    pub fn from_columns(columns: Vec<usize>) -> Result<Self, QueensError> {
        let n = columns.len();
        if let Some((row, &column)) = columns.iter().enumerate().find(|&(_, &c)| c >= n) {
            return Err(QueensError::ColumnOutOfRange { row, column, n });
        }
        Ok(Self {
            rows: columns.into_iter().map(Some).collect(),
        })
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Column of the queen in `row`, or `None` if unassigned.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.size()`.
    pub fn get(&self, row: usize) -> Option<usize> {
        self.rows[row]
    }

    /// Puts the queen of `row` in `column`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is not below `self.size()`.
    pub fn place(&mut self, row: usize, column: usize) {
        let n = self.size();
        assert!(column < n, "column {column} out of range for a {n}x{n} board");
        self.rows[row] = Some(column);
    }

    /// Marks `row` as unassigned.
    pub fn clear(&mut self, row: usize) {
        self.rows[row] = None;
    }

    /// Per-row entries, `None` for unassigned rows.
    pub fn rows(&self) -> &[Option<usize>] {
        &self.rows
    }

    /// Whether every row holds a queen.
    pub fn is_complete(&self) -> bool {
        self.rows.iter().all(Option::is_some)
    }

    /// The plain column sequence, available only for complete boards.
    pub fn columns(&self) -> Option<Vec<usize>> {
        self.rows.iter().copied().collect()
    }

    /// Whether the board is complete and no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.is_complete() && total_conflicts(self) == 0
    }
}

/// One uniformly random column per row.
pub(crate) fn random_columns<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    (0..n).map(|_| rng.random_range(0..n)).collect()
}

impl TryFrom<Vec<Option<usize>>> for Board {
    type Error = QueensError;

    /// Accepts partial boards; every assigned column must be below the row count.
    fn try_from(rows: Vec<Option<usize>>) -> Result<Self, Self::Error> {
        let n = rows.len();
        let out_of_range = rows
            .iter()
            .enumerate()
            .find_map(|(row, &c)| c.filter(|&c| c >= n).map(|column| (row, column)));
        if let Some((row, column)) = out_of_range {
            return Err(QueensError::ColumnOutOfRange { row, column, n });
        }
        Ok(Self { rows })
    }
}

impl From<Board> for Vec<Option<usize>> {
    fn from(board: Board) -> Self {
        board.rows
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for (row, entry) in self.rows.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..n {
                if col > 0 {
                    write!(f, " ")?;
                }
                let cell = if *entry == Some(col) { 'Q' } else { '.' };
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_empty_board() {
        let board = Board::empty(5);
        assert_eq!(board.size(), 5);
        assert!(board.rows().iter().all(Option::is_none));
        assert!(!board.is_complete());
        assert_eq!(board.columns(), None);
    }

    #[test]
    fn test_random_board_in_range() {
        let mut rng = create_rng(42);
        let board = Board::random(12, &mut rng);
        assert!(board.is_complete());
        assert!(board.rows().iter().all(|c| c.is_some_and(|c| c < 12)));
    }

    #[test]
    fn test_from_columns() {
        let board = Board::from_columns(vec![1, 3, 0, 2]).unwrap();
        assert_eq!(board.columns(), Some(vec![1, 3, 0, 2]));
        assert!(board.is_solution());
    }

    #[test]
    fn test_from_columns_out_of_range() {
        let err = Board::from_columns(vec![0, 4, 1, 2]).unwrap_err();
        assert_eq!(
            err,
            QueensError::ColumnOutOfRange {
                row: 1,
                column: 4,
                n: 4
            }
        );
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::empty(3);
        board.place(1, 2);
        assert_eq!(board.get(1), Some(2));
        board.clear(1);
        assert_eq!(board.get(1), None);
    }

    #[test]
    fn test_partial_board_is_not_solution() {
        let mut board = Board::empty(4);
        board.place(0, 1);
        assert!(!board.is_solution());
    }

    #[test]
    fn test_display() {
        let board = Board::from_columns(vec![1, 3, 0, 2]).unwrap();
        assert_eq!(
            board.to_string(),
            ". Q . .\n. . . Q\nQ . . .\n. . Q ."
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_place_rejects_column_out_of_range() {
        let mut board = Board::empty(4);
        board.place(0, 4);
    }

    #[test]
    fn test_try_from_rows() {
        let board = Board::try_from(vec![Some(1), None, Some(0)]).unwrap();
        assert_eq!(board.get(0), Some(1));
        assert_eq!(board.get(1), None);
        assert_eq!(Vec::from(board), vec![Some(1), None, Some(0)]);

        let err = Board::try_from(vec![None, Some(3), Some(0)]).unwrap_err();
        assert_eq!(
            err,
            QueensError::ColumnOutOfRange {
                row: 1,
                column: 3,
                n: 3
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates_columns() {
        let board = Board::from_columns(vec![1, 3, 0, 2]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[1,3,0,2]");
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
        assert!(serde_json::from_str::<Board>("[1,7,0,2]").is_err());
    }
}
