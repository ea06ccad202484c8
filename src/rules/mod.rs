//! Game rules for Reversi
//!
//! A move is legal when it is placed on an empty cell and outflanks at
//! least one opponent disc: along one of the 8 rays from the cell there
//! must be one or more contiguous opponent discs immediately followed by
//! a disc of the mover's color. Applying a move places the disc and
//! flips every outflanked disc as one atomic transition.

use crate::board::{Board, Piece, Pos, BOARD_SIZE};

/// The 8 ray directions (N, NE, E, SE, S, SW, W, NW), as (drow, dcol)
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Walk one ray from `pos` and report whether it outflanks for `piece`.
///
/// The scan stops at the first empty cell or board edge (ray invalid)
/// and at the first own disc (valid only if an opponent disc was seen
/// in between).
fn ray_outflanks(board: &Board, pos: Pos, dr: i8, dc: i8, piece: Piece) -> bool {
    let opponent = piece.opponent();
    let mut r = pos.row as i32 + dr as i32;
    let mut c = pos.col as i32 + dc as i32;
    let mut found_opponent = false;

    while Pos::is_valid(r, c) {
        match board.get(Pos::new(r as u8, c as u8)) {
            p if p == opponent => {
                found_opponent = true;
                r += dr as i32;
                c += dc as i32;
            }
            p if p == piece => return found_opponent,
            _ => return false, // empty cell breaks the ray
        }
    }

    false
}

/// Check whether placing `piece` at (row, col) is legal.
///
/// Coordinates are untrusted (a click may land outside the grid):
/// anything out of bounds is simply not a legal move.
#[must_use]
pub fn is_legal_move(board: &Board, row: i32, col: i32, piece: Piece) -> bool {
    if !Pos::is_valid(row, col) {
        return false;
    }
    let pos = Pos::new(row as u8, col as u8);
    if !board.is_empty(pos) {
        return false;
    }

    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| ray_outflanks(board, pos, dr, dc, piece))
}

/// All legal moves for `piece`, in row-major order.
///
/// The order is part of the engine contract: the search breaks ties
/// between equally scored moves by keeping the first one found, so the
/// enumeration order decides which move the computer actually plays.
#[must_use]
pub fn legal_moves(board: &Board, piece: Piece) -> Vec<Pos> {
    let mut moves = Vec::new();
    for r in 0..BOARD_SIZE as i32 {
        for c in 0..BOARD_SIZE as i32 {
            if is_legal_move(board, r, c, piece) {
                moves.push(Pos::new(r as u8, c as u8));
            }
        }
    }
    moves
}

/// Collect every disc that placing `piece` at `pos` would flip.
///
/// Returns an empty vector when the move outflanks nothing (i.e. is not
/// legal on an empty cell).
#[must_use]
pub fn flips_for(board: &Board, pos: Pos, piece: Piece) -> Vec<Pos> {
    let opponent = piece.opponent();
    let mut flips = Vec::new();

    for &(dr, dc) in &DIRECTIONS {
        let mut r = pos.row as i32 + dr as i32;
        let mut c = pos.col as i32 + dc as i32;
        let mut pending: Vec<Pos> = Vec::new();

        while Pos::is_valid(r, c) {
            let p = Pos::new(r as u8, c as u8);
            if board.get(p) == opponent {
                pending.push(p);
            } else if board.get(p) == piece {
                // own disc confirms the whole run
                flips.append(&mut pending);
                break;
            } else {
                break; // empty cell discards the run
            }
            r += dr as i32;
            c += dc as i32;
        }
    }

    flips
}

/// Apply a validated move: place the disc and flip every outflanked one.
///
/// Precondition: the caller has checked legality via [`is_legal_move`]
/// or [`legal_moves`]. Calling this with an illegal move is a caller
/// bug; debug builds assert on it.
pub fn apply_move(board: &mut Board, pos: Pos, piece: Piece) {
    let flips = flips_for(board, pos, piece);
    debug_assert!(
        board.is_empty(pos) && !flips.is_empty(),
        "apply_move requires a validated legal move"
    );

    board.place(pos, piece);
    for flip in flips {
        board.flip_to(flip, piece);
    }
}
