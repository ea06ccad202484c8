//! Board rendering and mouse interaction

use egui::{Align2, CornerRadius, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::board::{Board, Piece, Pos, BOARD_SIZE};
use crate::ui::theme;

const COLUMN_LABELS: [&str; BOARD_SIZE] = ["A", "B", "C", "D", "E", "F", "G", "H"];

/// Draws the board and reports clicks.
pub struct BoardView;

impl BoardView {
    /// Render the board into the available space. Returns the square
    /// the user clicked, if any. Hint dots are drawn on `hints`;
    /// clicks and hover previews are suppressed unless `interactive`.
    pub fn show(
        ui: &mut Ui,
        board: &Board,
        hints: &[Pos],
        last_move: Option<Pos>,
        interactive: bool,
    ) -> Option<Pos> {
        let side = ui.available_width().min(ui.available_height());
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());

        let board_rect = response.rect.shrink(theme::BOARD_MARGIN);
        let cell = board_rect.width() / BOARD_SIZE as f32;

        // Felt with a dark wooden rim
        painter.rect_filled(
            board_rect.expand(4.0),
            CornerRadius::same(4),
            theme::BOARD_BORDER,
        );
        painter.rect_filled(board_rect, CornerRadius::ZERO, theme::BOARD_BG);

        let stroke = Stroke::new(theme::GRID_LINE_WIDTH, theme::GRID_LINE);
        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * cell;
            painter.line_segment(
                [
                    Pos2::new(board_rect.left() + offset, board_rect.top()),
                    Pos2::new(board_rect.left() + offset, board_rect.bottom()),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    Pos2::new(board_rect.left(), board_rect.top() + offset),
                    Pos2::new(board_rect.right(), board_rect.top() + offset),
                ],
                stroke,
            );
        }

        let label_font = FontId::proportional(13.0);
        for i in 0..BOARD_SIZE {
            let center = board_rect.left() + (i as f32 + 0.5) * cell;
            painter.text(
                Pos2::new(center, board_rect.top() - theme::BOARD_MARGIN * 0.5),
                Align2::CENTER_CENTER,
                COLUMN_LABELS[i],
                label_font.clone(),
                theme::TEXT_SECONDARY,
            );
            let middle = board_rect.top() + (i as f32 + 0.5) * cell;
            painter.text(
                Pos2::new(board_rect.left() - theme::BOARD_MARGIN * 0.5, middle),
                Align2::CENTER_CENTER,
                (i + 1).to_string(),
                label_font.clone(),
                theme::TEXT_SECONDARY,
            );
        }

        // Discs
        let disc_radius = cell * theme::DISC_RADIUS_RATIO;
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(row, col);
                let center = cell_center(board_rect, cell, pos);
                match board.get(pos) {
                    Piece::Black => {
                        painter.circle_filled(
                            center + Vec2::new(1.0, 2.0),
                            disc_radius,
                            theme::WHITE_DISC_SHADOW,
                        );
                        painter.circle_filled(center, disc_radius, theme::BLACK_DISC);
                        painter.circle_filled(
                            center - Vec2::new(disc_radius * 0.3, disc_radius * 0.3),
                            disc_radius * 0.25,
                            theme::BLACK_DISC_HIGHLIGHT,
                        );
                    }
                    Piece::White => {
                        painter.circle_filled(
                            center + Vec2::new(1.0, 2.0),
                            disc_radius,
                            theme::WHITE_DISC_SHADOW,
                        );
                        painter.circle_filled(center, disc_radius, theme::WHITE_DISC);
                    }
                    Piece::Empty => {}
                }
            }
        }

        // Yellow dots on the legal squares
        for &pos in hints {
            let center = cell_center(board_rect, cell, pos);
            painter.circle_filled(center, cell * theme::HINT_RADIUS_RATIO, theme::HINT_DOT);
        }

        if let Some(pos) = last_move {
            let center = cell_center(board_rect, cell, pos);
            painter.circle_filled(center, theme::LAST_MOVE_MARKER_RADIUS, theme::LAST_MOVE_MARKER);
        }

        // Hover preview for the human player
        if interactive {
            if let Some(hover) = response.hover_pos() {
                if let Some(pos) = screen_to_board(board_rect, cell, hover) {
                    if board.is_empty(pos) {
                        let color = if hints.contains(&pos) {
                            theme::hover_valid()
                        } else {
                            theme::hover_invalid()
                        };
                        let center = cell_center(board_rect, cell, pos);
                        painter.circle_filled(center, disc_radius, color);
                    }
                }
            }
        }

        if interactive && response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|p| screen_to_board(board_rect, cell, p));
        }
        None
    }
}

/// Center of a square in screen coordinates.
fn cell_center(board_rect: Rect, cell: f32, pos: Pos) -> Pos2 {
    Pos2::new(
        board_rect.left() + (f32::from(pos.col) + 0.5) * cell,
        board_rect.top() + (f32::from(pos.row) + 0.5) * cell,
    )
}

/// Map a screen point to the square under it, if it is on the board.
fn screen_to_board(board_rect: Rect, cell: f32, p: Pos2) -> Option<Pos> {
    let col = ((p.x - board_rect.left()) / cell).floor() as i32;
    let row = ((p.y - board_rect.top()) / cell).floor() as i32;
    if Pos::is_valid(row, col) {
        Some(Pos::new(row as u8, col as u8))
    } else {
        None
    }
}

/// Board coordinate in algebraic notation, e.g. `(2, 3)` is `D3`.
#[must_use]
pub fn square_name(pos: Pos) -> String {
    format!("{}{}", COLUMN_LABELS[pos.col as usize], pos.row + 1)
}
