//! Computer player facade
//!
//! Wraps the alpha-beta searcher behind the one knob the rest of the
//! program cares about: the search depth. Depth counts plies; larger is
//! stronger and slower. The turn loop calls [`Engine::get_move`] when
//! it is the computer's turn and applies the returned move itself.
//!
//! # Example
//!
//! ```
//! use reversi::{Engine, Game, Pos};
//!
//! let mut game = Game::new();
//! game.make_move(Pos::new(2, 3)); // human opens
//!
//! let engine = Engine::with_depth(2);
//! let result = engine.get_move_with_stats(&game);
//! println!("AI move: {:?} (score {})", result.best_move, result.score);
//! ```

use std::time::Instant;

use crate::board::Pos;
use crate::game::Game;
use crate::search::Searcher;

/// Default search depth in plies
pub const DEFAULT_DEPTH: u8 = 4;

/// Result of a move search with timing statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found; `None` when the side to move must pass
    pub best_move: Option<Pos>,
    /// Minimax score of the chosen move
    pub score: i32,
    /// Nodes visited by the search
    pub nodes: u64,
    /// Wall-clock time taken in milliseconds
    pub time_ms: u64,
}

/// Minimax-driven computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    depth: u8,
}

impl Engine {
    /// Engine at the default depth
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Engine with a custom depth. Depth 0 degenerates to picking the
    /// first move by raw heuristic; 4-5 is a reasonable opponent.
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self { depth }
    }

    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    /// Best move for the player to move, or `None` if that player has
    /// no legal move (the caller decides whether that is a pass or the
    /// end of the game).
    #[must_use]
    pub fn get_move(&self, game: &Game) -> Option<Pos> {
        self.get_move_with_stats(game).best_move
    }

    /// Like [`Engine::get_move`], with score, node and timing stats.
    #[must_use]
    pub fn get_move_with_stats(&self, game: &Game) -> MoveResult {
        let start = Instant::now();

        let mut searcher = Searcher::new(game.to_move());
        let result = searcher.search(game, self.depth);
        let time_ms = start.elapsed().as_millis() as u64;

        match result.best_move {
            Some(mv) => log::info!(
                "engine chose ({}, {}) score {} ({} nodes, {}ms)",
                mv.row,
                mv.col,
                result.score,
                result.nodes,
                time_ms
            ),
            None => log::info!("engine has no legal move"),
        }

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            nodes: result.nodes,
            time_ms,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Piece};

    #[test]
    fn default_depth_is_four() {
        assert_eq!(Engine::new().depth(), DEFAULT_DEPTH);
        assert_eq!(DEFAULT_DEPTH, 4);
    }

    #[test]
    fn set_depth_round_trips() {
        let mut engine = Engine::with_depth(2);
        assert_eq!(engine.depth(), 2);
        engine.set_depth(5);
        assert_eq!(engine.depth(), 5);
    }

    #[test]
    fn engine_opens_with_a_legal_move() {
        let game = Game::new();
        let engine = Engine::with_depth(2);

        let result = engine.get_move_with_stats(&game);
        let mv = result.best_move.expect("black can open");
        assert!(game.legal_moves().contains(&mv));
        assert!(result.nodes > 0);
    }

    #[test]
    fn engine_reports_no_move_when_the_mover_must_pass() {
        // Black has no legal move here; White does.
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Piece::White);
        board.place(Pos::new(0, 1), Piece::Black);
        let game = Game::from_parts(board, Piece::Black);

        assert_eq!(Engine::with_depth(3).get_move(&game), None);
    }

    #[test]
    fn repeated_calls_agree() {
        let mut game = Game::new();
        game.make_move(Pos::new(2, 3));

        let engine = Engine::with_depth(3);
        assert_eq!(engine.get_move(&game), engine.get_move(&game));
    }
}
