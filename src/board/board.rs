//! Board structure: two bitboards, one per color

use super::bitboard::Bitboard;
use super::{Piece, Pos, BOARD_SIZE};

/// 8x8 Reversi board.
///
/// A fresh board carries the four center discs; every later mutation
/// goes through [`crate::rules::apply_move`], which places a disc and
/// flips the outflanked ones as a single transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    /// Starting position: the four center discs, diagonally alternating.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place(Pos::new(3, 3), Piece::White);
        board.place(Pos::new(3, 4), Piece::Black);
        board.place(Pos::new(4, 3), Piece::Black);
        board.place(Pos::new(4, 4), Piece::White);
        board
    }

    /// Board with no discs at all. Used to fabricate positions in tests
    /// and by the UI for previews; real games start from [`Board::new`].
    pub fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get the disc at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Piece {
        if self.black.get(pos) {
            Piece::Black
        } else if self.white.get(pos) {
            Piece::White
        } else {
            Piece::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a disc on an empty cell (no flip processing).
    /// Use `rules::apply_move` for game moves.
    #[inline]
    pub fn place(&mut self, pos: Pos, piece: Piece) {
        debug_assert!(self.is_empty(pos));
        match piece {
            Piece::Black => self.black.set(pos),
            Piece::White => self.white.set(pos),
            Piece::Empty => {}
        }
    }

    /// Turn the disc at `pos` into `piece`, whatever it was before.
    #[inline]
    pub fn flip_to(&mut self, pos: Pos, piece: Piece) {
        self.black.clear(pos);
        self.white.clear(pos);
        match piece {
            Piece::Black => self.black.set(pos),
            Piece::White => self.white.set(pos),
            Piece::Empty => {}
        }
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn discs(&self, piece: Piece) -> Option<&Bitboard> {
        match piece {
            Piece::Black => Some(&self.black),
            Piece::White => Some(&self.white),
            Piece::Empty => None,
        }
    }

    /// Count discs of one color
    #[inline]
    pub fn count(&self, piece: Piece) -> u32 {
        match piece {
            Piece::Black => self.black.count(),
            Piece::White => self.white.count(),
            Piece::Empty => 0,
        }
    }

    /// Full-board tally as (black, white)
    #[inline]
    pub fn count_pieces(&self) -> (u32, u32) {
        (self.black.count(), self.white.count())
    }

    /// Total discs on board
    #[inline]
    pub fn disc_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
