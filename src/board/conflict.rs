//! Attack detection.
//!
//! Two queens attack each other when they share a column or when their row
//! and column distances are equal (same diagonal).

use super::Board;

/// Whether queens at `(r1, c1)` and `(r2, c2)` attack each other.
///
/// Only column and diagonal attacks are considered; callers never place
/// two queens in one row.
#[inline]
pub fn attacks(r1: usize, c1: usize, r2: usize, c2: usize) -> bool {
    c1 == c2 || c1.abs_diff(c2) == r1.abs_diff(r2)
}

/// Whether a queen at `(row, col)` is safe from every queen in rows `0..row`.
///
/// Rows at or below `row` are not inspected. Unassigned rows above `row`
/// are skipped.
///
/// # Panics
///
/// Panics if `row > board.size()`.
pub fn prefix_safe(board: &Board, row: usize, col: usize) -> bool {
    board.rows()[..row]
        .iter()
        .enumerate()
        .all(|(i, placed)| placed.is_none_or(|c| !attacks(i, c, row, col)))
}

/// Number of unordered row pairs `(i, j)`, `i < j`, whose queens attack each other.
///
/// Zero means the (complete) board is a solution. Unassigned rows contribute
/// nothing.
pub fn total_conflicts(board: &Board) -> usize {
    let rows = board.rows();
    let mut conflicts = 0;
    for (i, a) in rows.iter().enumerate() {
        let Some(ci) = *a else { continue };
        for (j, b) in rows.iter().enumerate().skip(i + 1) {
            if let Some(cj) = *b {
                if attacks(i, ci, j, cj) {
                    conflicts += 1;
                }
            }
        }
    }
    conflicts
}

/// Number of assigned rows other than `row` attacked by a queen at `(row, col)`.
///
/// Moving the queen of `row` from `a` to `b` changes [`total_conflicts`] by
/// exactly `row_conflicts(board, row, b) - row_conflicts(board, row, a)`,
/// which lets the stochastic engines score a move in O(n).
pub fn row_conflicts(board: &Board, row: usize, col: usize) -> usize {
    board
        .rows()
        .iter()
        .enumerate()
        .filter(|&(i, placed)| i != row && placed.is_some_and(|c| attacks(i, c, row, col)))
        .count()
}

/// Number of attacking pairs on a complete board given as its column sequence.
///
/// Agrees with [`total_conflicts`] on the equivalent [`Board`].
pub fn column_conflicts(columns: &[usize]) -> usize {
    columns
        .iter()
        .enumerate()
        .map(|(i, &ci)| {
            columns[i + 1..]
                .iter()
                .enumerate()
                .filter(|&(k, &cj)| attacks(i, ci, i + 1 + k, cj))
                .count()
        })
        .sum()
}

/// Number of queens in `columns`, other than the one in `row`, attacked by a
/// queen at `(row, col)`. Column-sequence form of [`row_conflicts`].
pub fn queen_conflicts(columns: &[usize], row: usize, col: usize) -> usize {
    columns
        .iter()
        .enumerate()
        .filter(|&(i, &c)| i != row && attacks(i, c, row, col))
        .count()
}
