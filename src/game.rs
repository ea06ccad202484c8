//! Authoritative game state: the board plus the player to move
//!
//! `Game` is the unit the search clones: every hypothetical move in the
//! minimax tree gets its own independently owned copy, so exploring
//! futures can never corrupt the real game. The clone is cheap (two
//! bitboards and a color tag).

use crate::board::{Board, Piece, Pos};
use crate::rules;

/// One Reversi game in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Piece,
}

impl Game {
    /// Fresh game: standard starting position, Black to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Piece::Black,
        }
    }

    /// Build a game from an arbitrary position. Used to set up test
    /// positions and by the search; `to_move` must be Black or White.
    #[must_use]
    pub fn from_parts(board: Board, to_move: Piece) -> Self {
        debug_assert!(to_move != Piece::Empty);
        Self { board, to_move }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is
    #[inline]
    pub fn to_move(&self) -> Piece {
        self.to_move
    }

    /// Legal moves for the player to move, in row-major order
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Pos> {
        rules::legal_moves(&self.board, self.to_move)
    }

    /// Check a (possibly out-of-range) coordinate for the player to move
    #[must_use]
    pub fn is_legal(&self, row: i32, col: i32) -> bool {
        rules::is_legal_move(&self.board, row, col, self.to_move)
    }

    /// Apply a validated move for the player to move, then hand the turn
    /// to the opponent. Forced passes are the caller's concern: if the
    /// new player has no legal move, call [`Game::switch_turn`] to skip
    /// them.
    pub fn make_move(&mut self, pos: Pos) {
        rules::apply_move(&mut self.board, pos, self.to_move);
        self.switch_turn();
    }

    /// Toggle the player marker. The board is untouched.
    pub fn switch_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// Full-board tally as (black, white)
    #[must_use]
    pub fn count_pieces(&self) -> (u32, u32) {
        self.board.count_pieces()
    }

    /// The game is over when neither side has a legal move.
    #[must_use]
    pub fn is_over(&self) -> bool {
        rules::legal_moves(&self.board, Piece::Black).is_empty()
            && rules::legal_moves(&self.board, Piece::White).is_empty()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_opens() {
        let game = Game::new();
        assert_eq!(game.to_move(), Piece::Black);
        assert_eq!(game.count_pieces(), (2, 2));
    }

    #[test]
    fn make_move_hands_over_the_turn() {
        let mut game = Game::new();
        game.make_move(Pos::new(2, 3));
        assert_eq!(game.to_move(), Piece::White);
        assert_eq!(game.count_pieces(), (4, 1));
    }

    #[test]
    fn switch_turn_leaves_the_board_alone() {
        let mut game = Game::new();
        let before = game.board().clone();
        game.switch_turn();
        assert_eq!(game.to_move(), Piece::White);
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn fresh_game_is_not_over() {
        assert!(!Game::new().is_over());
    }

    #[test]
    fn game_with_one_color_wiped_out_is_over() {
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Piece::White);
        board.place(Pos::new(0, 1), Piece::White);
        let game = Game::from_parts(board, Piece::Black);
        assert!(game.is_over());
    }

    #[test]
    fn clone_is_independent() {
        let mut game = Game::new();
        let snapshot = game.clone();
        game.make_move(Pos::new(2, 3));

        assert_ne!(game, snapshot);
        assert_eq!(snapshot.count_pieces(), (2, 2));
        assert_eq!(snapshot.to_move(), Piece::Black);
    }
}
