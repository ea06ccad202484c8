//! Positional-weight evaluation for Reversi board positions
//!
//! Two regimes, picked by the caller:
//! - a finished game is scored purely by disc count: win `INF`, loss
//!   `-INF`, draw 0 — the heuristic plays no part at a true game end;
//! - an unfinished game (the search hit its depth limit) is scored by
//!   the static weight table: the sum of weights under the maximizer's
//!   discs minus the sum under the opponent's.

use crate::board::{Board, Piece, BOARD_SIZE};

/// Win/loss sentinel. Any weight-table score is far inside (-INF, INF),
/// so a decided game always dominates the heuristic.
pub const INF: i32 = 1_000_000;

/// Positional weights, row-major.
///
/// Corners are the most valuable cells on the board (a corner disc can
/// never be flipped), the cells next to a corner are actively dangerous
/// because they hand the corner to the opponent, and edges are
/// moderately good. Fixed for the life of the program.
pub const WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];

/// Evaluate the board from the perspective of `piece` (the maximizer).
///
/// `game_over` must be true exactly when neither side has a legal move;
/// the search establishes that before calling.
#[must_use]
pub fn evaluate(board: &Board, piece: Piece, game_over: bool) -> i32 {
    let opponent = piece.opponent();

    if game_over {
        let mine = board.count(piece);
        let theirs = board.count(opponent);
        return if mine > theirs {
            INF
        } else if theirs > mine {
            -INF
        } else {
            0
        };
    }

    weight_sum(board, piece) - weight_sum(board, opponent)
}

/// Sum of weight-table entries under one color's discs
fn weight_sum(board: &Board, piece: Piece) -> i32 {
    let Some(discs) = board.discs(piece) else {
        return 0;
    };

    discs
        .iter_ones()
        .map(|pos| WEIGHTS[pos.row as usize][pos.col as usize])
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    /// Fabricate a board with the given numbers of black and white
    /// discs, filled row-major from opposite corners.
    fn board_with_counts(black: usize, white: usize) -> Board {
        assert!(black + white <= 64);
        let mut board = Board::empty();
        for idx in 0..black {
            board.place(Pos::from_index(idx), Piece::Black);
        }
        for idx in 0..white {
            board.place(Pos::from_index(63 - idx), Piece::White);
        }
        board
    }

    #[test]
    fn terminal_majority_wins() {
        let board = board_with_counts(40, 24);
        assert_eq!(evaluate(&board, Piece::Black, true), INF);
        assert_eq!(evaluate(&board, Piece::White, true), -INF);
    }

    #[test]
    fn terminal_minority_loses() {
        let board = board_with_counts(24, 40);
        assert_eq!(evaluate(&board, Piece::Black, true), -INF);
        assert_eq!(evaluate(&board, Piece::White, true), INF);
    }

    #[test]
    fn terminal_equal_counts_draw() {
        let board = board_with_counts(32, 32);
        assert_eq!(evaluate(&board, Piece::Black, true), 0);
        assert_eq!(evaluate(&board, Piece::White, true), 0);
    }

    #[test]
    fn terminal_score_ignores_position_weights() {
        // A lone corner (weight 120) loses to two discs anywhere.
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Piece::Black);
        board.place(Pos::new(3, 3), Piece::White);
        board.place(Pos::new(3, 4), Piece::White);
        assert_eq!(evaluate(&board, Piece::Black, true), -INF);
    }

    #[test]
    fn opening_position_is_balanced() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Piece::Black, false), 0);
        assert_eq!(evaluate(&board, Piece::White, false), 0);
    }

    #[test]
    fn heuristic_is_the_weight_difference() {
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Piece::Black); // 120
        board.place(Pos::new(1, 1), Piece::White); // -40

        assert_eq!(evaluate(&board, Piece::Black, false), 160);
        assert_eq!(evaluate(&board, Piece::White, false), -160);
    }

    #[test]
    fn heuristic_is_antisymmetric() {
        let mut board = Board::new();
        crate::rules::apply_move(&mut board, Pos::new(2, 3), Piece::Black);

        let black_view = evaluate(&board, Piece::Black, false);
        let white_view = evaluate(&board, Piece::White, false);
        assert_eq!(black_view, -white_view);
    }
}
