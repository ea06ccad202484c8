//! Game session state for the GUI
//!
//! Owns the authoritative [`Game`], knows which screen is showing and
//! whose turn it is, and runs the computer player on a background
//! thread so the UI never blocks while the search thinks.

use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Instant;

use crate::board::{Piece, Pos};
use crate::engine::{Engine, MoveResult, DEFAULT_DEPTH};
use crate::game::Game;

/// Who controls a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer { depth: u8 },
}

/// Which screen the app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Playing,
    GameOver,
}

/// AI turn state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Complete state of one game session.
pub struct GameState {
    pub game: Game,
    pub black: PlayerKind,
    pub white: PlayerKind,
    pub screen: Screen,
    pub ai_state: AiState,
    /// Most recently placed disc, for the board marker
    pub last_move: Option<Pos>,
    /// Stats of the last finished search, for the debug card
    pub last_ai_result: Option<MoveResult>,
    /// Transient status line, e.g. a pass announcement
    pub message: Option<String>,
    pub show_hints: bool,
    /// Depth chosen on the intro screen for new games
    pub ai_depth: u8,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            black: PlayerKind::Human,
            white: PlayerKind::Computer {
                depth: DEFAULT_DEPTH,
            },
            screen: Screen::Intro,
            ai_state: AiState::Idle,
            last_move: None,
            last_ai_result: None,
            message: None,
            show_hints: true,
            ai_depth: DEFAULT_DEPTH,
        }
    }

    /// Leave the intro screen and start a game at the selected depth.
    /// The human plays Black and moves first.
    pub fn start_game(&mut self) {
        self.white = PlayerKind::Computer {
            depth: self.ai_depth,
        };
        self.new_game();
    }

    /// Reset the board and start over with the current players.
    pub fn new_game(&mut self) {
        self.game = Game::new();
        self.screen = Screen::Playing;
        self.ai_state = AiState::Idle;
        self.last_move = None;
        self.last_ai_result = None;
        self.message = None;
        log::info!("new game started (AI depth {})", self.ai_depth);
    }

    /// Back to the intro screen, discarding any game in progress.
    pub fn to_intro(&mut self) {
        self.screen = Screen::Intro;
        self.ai_state = AiState::Idle;
    }

    /// Who controls the side to move.
    #[must_use]
    pub fn current_kind(&self) -> PlayerKind {
        match self.game.to_move() {
            Piece::White => self.white,
            _ => self.black,
        }
    }

    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        self.screen == Screen::Playing && self.current_kind() == PlayerKind::Human
    }

    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        self.screen == Screen::Playing
            && matches!(self.current_kind(), PlayerKind::Computer { .. })
    }

    #[must_use]
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Seconds the current search has been running.
    #[must_use]
    pub fn ai_thinking_elapsed(&self) -> f32 {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => start_time.elapsed().as_secs_f32(),
            AiState::Idle => 0.0,
        }
    }

    /// Attempt a human move at `pos`. Refused with a reason when it is
    /// not the human's turn or the square is not a legal move.
    pub fn try_move(&mut self, pos: Pos) -> Result<(), String> {
        if self.screen != Screen::Playing {
            return Err("Game is not in progress".into());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".into());
        }
        if !self
            .game
            .is_legal(i32::from(pos.row), i32::from(pos.col))
        {
            return Err(format!("({}, {}) is not a legal move", pos.row, pos.col));
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Apply a validated move and resolve whose turn comes next.
    fn execute_move(&mut self, pos: Pos) {
        self.game.make_move(pos);
        self.last_move = Some(pos);
        self.message = None;
        self.resolve_turn();
    }

    /// After a move the turn has passed to the opponent. If they have no
    /// legal move the turn comes straight back; if neither side can
    /// move, the game is over.
    fn resolve_turn(&mut self) {
        if !self.game.legal_moves().is_empty() {
            return;
        }

        let skipped = self.game.to_move();
        self.game.switch_turn();

        if self.game.legal_moves().is_empty() {
            log::info!("neither side can move, game over");
            self.screen = Screen::GameOver;
            self.ai_state = AiState::Idle;
        } else {
            let name = side_name(skipped);
            log::info!("{} has no legal moves, turn passed back", name);
            self.message = Some(format!("{} has no moves - turn passed!", name));
        }
    }

    /// Kick off the search on a worker thread. The result is polled
    /// from the UI loop via [`GameState::check_ai_result`].
    pub fn start_ai_thinking(&mut self) {
        let PlayerKind::Computer { depth } = self.current_kind() else {
            return;
        };

        let (sender, receiver) = mpsc::channel();
        let game = self.game.clone();

        thread::spawn(move || {
            let engine = Engine::with_depth(depth);
            let result = engine.get_move_with_stats(&game);
            let _ = sender.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver,
            start_time: Instant::now(),
        };
    }

    /// Poll the worker thread; apply the move when it arrives.
    pub fn check_ai_result(&mut self) {
        let AiState::Thinking { receiver, .. } = &self.ai_state else {
            return;
        };

        let Ok(result) = receiver.try_recv() else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.last_ai_result = Some(result);

        match result.best_move {
            Some(mv) => self.execute_move(mv),
            // The searcher found no move for a side the turn loop
            // believed could play; treat it as a pass to stay safe.
            None => self.resolve_turn(),
        }
    }

    #[must_use]
    pub fn counts(&self) -> (u32, u32) {
        self.game.count_pieces()
    }

    /// Winner at game over, `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Piece> {
        let (black, white) = self.counts();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Piece::Black),
            std::cmp::Ordering::Less => Some(Piece::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Display name for a side.
#[must_use]
pub fn side_name(piece: Piece) -> &'static str {
    match piece {
        Piece::Black => "Black",
        Piece::White => "White",
        Piece::Empty => "-",
    }
}
