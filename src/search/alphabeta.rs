//! Minimax search with alpha-beta pruning
//!
//! The search explores hypothetical futures on deep copies of the game
//! state: every candidate move is applied to its own clone, so sibling
//! branches never alias and the authoritative game is never touched.
//! Depth counts plies. Pruning only skips siblings that provably cannot
//! change the result, so the chosen move and score are identical to an
//! exhaustive minimax at the same depth.
//!
//! Forced passes get special treatment: a side with no legal move is
//! skipped at the SAME depth (a pass is not a ply of lookahead), and
//! only when both sides are moveless is the position scored as a true
//! game end.
//!
//! # Example
//!
//! ```
//! use reversi::game::Game;
//! use reversi::board::Piece;
//! use reversi::search::Searcher;
//!
//! let game = Game::new();
//! let mut searcher = Searcher::new(Piece::Black);
//!
//! let result = searcher.search(&game, 2);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use crate::board::{Piece, Pos};
use crate::eval::{evaluate, INF};
use crate::game::Game;

/// Search result: the chosen move and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` when the side to move has no legal move
    pub best_move: Option<Pos>,
    /// Minimax score of the best move from the maximizer's perspective
    pub score: i32,
    /// Total nodes visited, for diagnostics
    pub nodes: u64,
}

/// One search run for a fixed maximizing player.
///
/// Deterministic by construction: moves are enumerated in row-major
/// order and a candidate replaces the incumbent only on strict
/// improvement, so the first of several equally good moves wins.
pub struct Searcher {
    max_player: Piece,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher that maximizes for `max_player`.
    #[must_use]
    pub fn new(max_player: Piece) -> Self {
        debug_assert!(max_player != Piece::Empty);
        Self {
            max_player,
            nodes: 0,
        }
    }

    /// Pick the best move for the maximizer in `game`, looking `depth`
    /// plies ahead.
    ///
    /// The maximizer must be the player to move. If it has no legal
    /// move the result carries no move; deciding whether that means a
    /// pass or the end of the game is the caller's job.
    pub fn search(&mut self, game: &Game, depth: u8) -> SearchResult {
        debug_assert!(game.to_move() == self.max_player);

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for mv in game.legal_moves() {
            let mut child = game.clone();
            child.make_move(mv);

            let score = self.alpha_beta(&child, depth.saturating_sub(1), alpha, beta, false);

            // Strict improvement only: ties keep the earliest move.
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
            // The root never takes a cutoff itself; beta stays at +INF
            // here, so alpha can only prune inside the child subtrees.
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            nodes: self.nodes,
        }
    }

    /// Recursive minimax over `game`, whose `to_move` player is the
    /// maximizer iff `maximizing`.
    fn alpha_beta(
        &mut self,
        game: &Game,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        let moves = game.legal_moves();

        if moves.is_empty() {
            // The side to move must pass. Only if the opponent is also
            // moveless has the game truly ended.
            let mut passed = game.clone();
            passed.switch_turn();
            if passed.legal_moves().is_empty() {
                return evaluate(game.board(), self.max_player, true);
            }
            // Forced pass: the other side keeps playing at the same
            // depth — a skipped turn consumes no lookahead budget.
            return self.alpha_beta(&passed, depth, alpha, beta, !maximizing);
        }

        if depth == 0 {
            return evaluate(game.board(), self.max_player, false);
        }

        if maximizing {
            let mut best = -INF;
            for mv in moves {
                let mut child = game.clone();
                child.make_move(mv);
                let value = self.alpha_beta(&child, depth - 1, alpha, beta, false);
                best = best.max(value);
                alpha = alpha.max(best);
                if alpha >= beta {
                    break; // beta cutoff
                }
            }
            best
        } else {
            let mut best = INF;
            for mv in moves {
                let mut child = game.clone();
                child.make_move(mv);
                let value = self.alpha_beta(&child, depth - 1, alpha, beta, true);
                best = best.min(value);
                beta = beta.min(best);
                if alpha >= beta {
                    break; // alpha cutoff
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    /// The four legal opening replies for Black from the standard start
    const CANONICAL_OPENINGS: [Pos; 4] = [
        Pos { row: 2, col: 3 },
        Pos { row: 3, col: 2 },
        Pos { row: 4, col: 5 },
        Pos { row: 5, col: 4 },
    ];

    /// Exhaustive minimax without pruning, used as a reference to show
    /// that alpha-beta only saves work, never changes the answer.
    fn minimax(game: &Game, depth: u8, maximizing: bool, max_player: Piece) -> i32 {
        let moves = game.legal_moves();

        if moves.is_empty() {
            let mut passed = game.clone();
            passed.switch_turn();
            if passed.legal_moves().is_empty() {
                return evaluate(game.board(), max_player, true);
            }
            return minimax(&passed, depth, !maximizing, max_player);
        }

        if depth == 0 {
            return evaluate(game.board(), max_player, false);
        }

        let mut best = if maximizing { -INF } else { INF };
        for mv in moves {
            let mut child = game.clone();
            child.make_move(mv);
            let value = minimax(&child, depth - 1, !maximizing, max_player);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }

    fn minimax_best(game: &Game, depth: u8) -> (Option<Pos>, i32) {
        let max_player = game.to_move();
        let mut best_move = None;
        let mut best_score = -INF;
        for mv in game.legal_moves() {
            let mut child = game.clone();
            child.make_move(mv);
            let score = minimax(&child, depth.saturating_sub(1), false, max_player);
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }
        (best_move, best_score)
    }

    /// Black has no disc reachable by any ray, White can play (0,2):
    /// the side to move must pass while the game is not over.
    fn black_must_pass_position() -> Game {
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Piece::White);
        board.place(Pos::new(0, 1), Piece::Black);
        Game::from_parts(board, Piece::Black)
    }

    #[test]
    fn opening_search_picks_a_canonical_move() {
        let game = Game::new();
        let result = Searcher::new(Piece::Black).search(&game, 2);

        let mv = result.best_move.expect("opening position has moves");
        assert!(CANONICAL_OPENINGS.contains(&mv));
    }

    #[test]
    fn search_is_deterministic() {
        let game = Game::new();
        let first = Searcher::new(Piece::Black).search(&game, 3);
        let second = Searcher::new(Piece::Black).search(&game, 3);

        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
    }

    #[test]
    fn symmetric_openings_tie_break_to_first_row_major() {
        // All four openings are equivalent under board symmetry, so the
        // strict-improvement rule must keep the first one enumerated.
        let game = Game::new();
        let result = Searcher::new(Piece::Black).search(&game, 2);
        assert_eq!(result.best_move, Some(Pos::new(2, 3)));
    }

    #[test]
    fn moveless_root_returns_no_move() {
        let game = black_must_pass_position();
        let result = Searcher::new(Piece::Black).search(&game, 4);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn forced_pass_searches_on_at_the_same_depth() {
        // Black to move with no legal move; White can play (0,2) and
        // wipe out Black, which both players then cannot answer. A
        // depth-1 probe must follow the pass into White's reply (score
        // INF via the double-pass terminal) instead of scoring the
        // unmoved board with the heuristic (which would be 140 for
        // White) or calling the pass itself game over (which would be a
        // 1-1 draw, score 0).
        let game = black_must_pass_position();
        let mut searcher = Searcher::new(Piece::White);
        let score = searcher.alpha_beta(&game, 1, -INF, INF, false);

        assert_eq!(score, INF);
        assert_ne!(score, evaluate(game.board(), Piece::White, false));
    }

    #[test]
    fn double_pass_is_scored_as_game_end() {
        // Two white discs, no black ones: neither side can ever move.
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Piece::White);
        board.place(Pos::new(0, 1), Piece::White);
        let game = Game::from_parts(board, Piece::Black);

        let mut searcher = Searcher::new(Piece::White);
        assert_eq!(searcher.alpha_beta(&game, 3, -INF, INF, false), INF);

        let mut searcher = Searcher::new(Piece::Black);
        assert_eq!(searcher.alpha_beta(&game, 3, -INF, INF, true), -INF);
    }

    #[test]
    fn pruning_matches_exhaustive_minimax() {
        let game = Game::new();

        for depth in 1..=3 {
            let pruned = Searcher::new(Piece::Black).search(&game, depth);
            let (plain_move, plain_score) = minimax_best(&game, depth);

            assert_eq!(pruned.best_move, plain_move, "depth {}", depth);
            assert_eq!(pruned.score, plain_score, "depth {}", depth);
        }
    }

    #[test]
    fn pruning_matches_minimax_in_the_midgame() {
        // Play a couple of plies to break the opening symmetry.
        let mut game = Game::new();
        game.make_move(Pos::new(2, 3)); // Black
        game.make_move(Pos::new(2, 2)); // White takes the diagonal

        let pruned = Searcher::new(Piece::Black).search(&game, 3);
        let (plain_move, plain_score) = minimax_best(&game, 3);

        assert_eq!(pruned.best_move, plain_move);
        assert_eq!(pruned.score, plain_score);
    }

    #[test]
    fn deeper_search_still_picks_a_legal_move() {
        let mut game = Game::new();
        game.make_move(Pos::new(2, 3));

        let result = Searcher::new(Piece::White).search(&game, 4);
        let mv = result.best_move.expect("white has replies");
        assert!(game.legal_moves().contains(&mv));
        assert!(result.nodes > 0);
    }
}
