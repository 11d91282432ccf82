//! Property tests across the board model and the three engines.

use proptest::prelude::*;
use u_queens::board::{column_conflicts, prefix_safe, row_conflicts, total_conflicts};
use u_queens::exhaustive::{ExhaustiveConfig, ExhaustiveRunner};
use u_queens::hill::{HillClimbConfig, HillClimbRunner};
use u_queens::sa::{SaConfig, SaRunner};
use u_queens::Board;

fn complete_board() -> impl Strategy<Value = Vec<usize>> {
    (1usize..12).prop_flat_map(|n| prop::collection::vec(0..n, n))
}

/// Naive pair count written independently of the library.
fn naive_conflicts(cols: &[usize]) -> usize {
    let mut count = 0;
    for i in 0..cols.len() {
        for j in i + 1..cols.len() {
            let dc = (cols[i] as i64 - cols[j] as i64).abs();
            if dc == 0 || dc == (j - i) as i64 {
                count += 1;
            }
        }
    }
    count
}

proptest! {
    #[test]
    fn total_conflicts_matches_naive_count(cols in complete_board()) {
        let board = Board::from_columns(cols.clone()).unwrap();
        prop_assert_eq!(total_conflicts(&board), naive_conflicts(&cols));
        prop_assert_eq!(column_conflicts(&cols), naive_conflicts(&cols));
        prop_assert_eq!(board.is_solution(), naive_conflicts(&cols) == 0);
    }

    #[test]
    fn row_conflicts_sum_is_twice_total(cols in complete_board()) {
        let board = Board::from_columns(cols.clone()).unwrap();
        let sum: usize = cols
            .iter()
            .enumerate()
            .map(|(row, &col)| row_conflicts(&board, row, col))
            .sum();
        prop_assert_eq!(sum, 2 * total_conflicts(&board));
    }

    #[test]
    fn prefix_safe_builds_conflict_free_boards(
        n in 1usize..12,
        picks in prop::collection::vec(any::<prop::sample::Index>(), 12),
    ) {
        // Greedily extend a board row by row, only through prefix-safe columns.
        let mut board = Board::empty(n);
        for row in 0..n {
            let safe: Vec<usize> = (0..n).filter(|&c| prefix_safe(&board, row, c)).collect();
            if safe.is_empty() {
                break;
            }
            board.place(row, safe[picks[row].index(safe.len())]);
        }
        prop_assert_eq!(total_conflicts(&board), 0);
    }

    #[test]
    fn hill_climbing_respects_budget(n in 1usize..10, seed in any::<u64>()) {
        let config = HillClimbConfig::default()
            .with_max_restarts(3)
            .with_max_steps(100)
            .with_seed(seed);
        let result = HillClimbRunner::run(n, &config).unwrap();
        prop_assert!(result.restarts <= 3);
        if let Some(board) = &result.board {
            prop_assert!(board.is_solution());
            prop_assert_eq!(board.size(), n);
        }
    }

    #[test]
    fn annealing_respects_budget(n in 1usize..12, seed in any::<u64>(), max_steps in 0usize..3_000) {
        let config = SaConfig::default().with_max_steps(max_steps).with_seed(seed);
        let result = SaRunner::run(n, &config).unwrap();
        prop_assert!(result.steps <= max_steps);
        if let Some(board) = &result.board {
            prop_assert!(board.is_solution());
        }
    }

    #[test]
    fn seeded_annealing_is_reproducible(seed in any::<u64>()) {
        let config = SaConfig::default().with_max_steps(5_000).with_seed(seed);
        let a = SaRunner::run(8, &config).unwrap();
        let b = SaRunner::run(8, &config).unwrap();
        prop_assert_eq!(a.board, b.board);
        prop_assert_eq!(a.steps, b.steps);
        prop_assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[test]
    fn seeded_hill_climbing_is_reproducible(seed in any::<u64>()) {
        let config = HillClimbConfig::default()
            .with_max_restarts(2)
            .with_max_steps(200)
            .with_seed(seed);
        let a = HillClimbRunner::run(7, &config).unwrap();
        let b = HillClimbRunner::run(7, &config).unwrap();
        prop_assert_eq!(a.board, b.board);
        prop_assert_eq!(a.restarts, b.restarts);
        prop_assert_eq!(a.steps, b.steps);
    }
}

#[test]
fn exhaustive_solutions_match_brute_force() {
    // All 6^6 column sequences in ascending order, filtered by the naive count.
    let n: usize = 6;
    let mut expected = Vec::new();
    let total = n.pow(n as u32);
    for code in 0..total {
        let mut cols = vec![0; n];
        let mut rest = code;
        for slot in cols.iter_mut().rev() {
            *slot = rest % n;
            rest /= n;
        }
        if naive_conflicts(&cols) == 0 {
            expected.push(cols);
        }
    }

    let result = ExhaustiveRunner::run(n, &ExhaustiveConfig::default()).unwrap();
    let found: Vec<Vec<usize>> = result
        .solutions
        .iter()
        .map(|b| b.columns().expect("solutions are complete"))
        .collect();
    assert_eq!(found, expected);
}

#[test]
fn exhaustive_solutions_strictly_ascending() {
    for n in 1..=8 {
        let result = ExhaustiveRunner::run(n, &ExhaustiveConfig::default()).unwrap();
        for pair in result.solutions.windows(2) {
            assert!(pair[0] < pair[1], "n = {n}: {:?} !< {:?}", pair[0], pair[1]);
        }
        assert!(result.solutions.iter().all(Board::is_complete));
    }
}
