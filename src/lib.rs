//! Reversi (Othello) engine with a minimax AI opponent
//!
//! A complete Reversi game: the rules engine, a depth-bounded minimax
//! search with alpha-beta pruning, and a desktop GUI. The human plays
//! Black and always opens; the computer plays White.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: 8x8 board representation with bitboards
//! - [`rules`]: legal-move enumeration and move application (flipping)
//! - [`game`]: authoritative game state (board + player to move)
//! - [`eval`]: positional-weight evaluation and terminal scoring
//! - [`search`]: minimax with alpha-beta pruning
//! - [`engine`]: computer-player facade integrating the search
//! - [`ui`]: egui/eframe front end
//!
//! # Quick Start
//!
//! ```
//! use reversi::{Engine, Game, Pos};
//!
//! let mut game = Game::new();
//!
//! // Human (Black) opens with one of the four canonical moves
//! game.make_move(Pos::new(2, 3));
//!
//! // Computer (White) responds
//! let engine = Engine::new();
//! if let Some(pos) = engine.get_move(&game) {
//!     game.make_move(pos);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search design
//!
//! The search reproduces the classic textbook design on purpose: full
//! row-major move enumeration, a static positional weight table, a deep
//! copy of the game state per hypothetical move, and alpha-beta pruning.
//! There is no transposition table, no iterative deepening and no move
//! ordering beyond the board-scan order; ties between equally scored
//! moves go to the first move found, which makes the chosen move fully
//! deterministic for a given position and depth.

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Piece, Pos, BOARD_SIZE};
pub use engine::{Engine, MoveResult, DEFAULT_DEPTH};
pub use game::Game;
