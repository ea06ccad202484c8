//! Board and bitboard unit tests

use super::{Bitboard, Board, Piece, Pos, BOARD_SIZE};

#[test]
fn fresh_board_has_exactly_four_center_discs() {
    let board = Board::new();

    assert_eq!(board.get(Pos::new(3, 3)), Piece::White);
    assert_eq!(board.get(Pos::new(3, 4)), Piece::Black);
    assert_eq!(board.get(Pos::new(4, 3)), Piece::Black);
    assert_eq!(board.get(Pos::new(4, 4)), Piece::White);

    let mut occupied = 0;
    for r in 0..BOARD_SIZE as u8 {
        for c in 0..BOARD_SIZE as u8 {
            if board.get(Pos::new(r, c)) != Piece::Empty {
                occupied += 1;
            }
        }
    }
    assert_eq!(occupied, 4);
    assert_eq!(board.count_pieces(), (2, 2));
}

#[test]
fn place_and_get() {
    let mut board = Board::empty();
    board.place(Pos::new(0, 0), Piece::Black);
    board.place(Pos::new(7, 7), Piece::White);

    assert_eq!(board.get(Pos::new(0, 0)), Piece::Black);
    assert_eq!(board.get(Pos::new(7, 7)), Piece::White);
    assert_eq!(board.get(Pos::new(4, 4)), Piece::Empty);
    assert_eq!(board.disc_count(), 2);
}

#[test]
fn flip_to_swaps_owner_without_changing_count() {
    let mut board = Board::empty();
    board.place(Pos::new(2, 5), Piece::White);
    assert_eq!(board.count_pieces(), (0, 1));

    board.flip_to(Pos::new(2, 5), Piece::Black);
    assert_eq!(board.get(Pos::new(2, 5)), Piece::Black);
    assert_eq!(board.count_pieces(), (1, 0));
}

#[test]
fn pos_index_round_trip() {
    for idx in 0..super::TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        assert_eq!(pos.to_index(), idx);
    }
}

#[test]
fn pos_is_valid_rejects_out_of_range() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 3));
    assert!(!Pos::is_valid(3, 8));
}

#[test]
fn bitboard_set_clear_count() {
    let mut bb = Bitboard::new();
    assert!(bb.is_empty());

    bb.set(Pos::new(1, 2));
    bb.set(Pos::new(6, 0));
    assert_eq!(bb.count(), 2);
    assert!(bb.get(Pos::new(1, 2)));

    bb.clear(Pos::new(1, 2));
    assert!(!bb.get(Pos::new(1, 2)));
    assert_eq!(bb.count(), 1);
}

#[test]
fn bitboard_iter_is_row_major() {
    let mut bb = Bitboard::new();
    bb.set(Pos::new(5, 1));
    bb.set(Pos::new(0, 3));
    bb.set(Pos::new(5, 0));

    let positions: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(
        positions,
        vec![Pos::new(0, 3), Pos::new(5, 0), Pos::new(5, 1)]
    );
}

#[test]
fn opponent_is_involutive() {
    assert_eq!(Piece::Black.opponent(), Piece::White);
    assert_eq!(Piece::White.opponent(), Piece::Black);
    assert_eq!(Piece::Empty.opponent(), Piece::Empty);
}
